pub mod game;
pub mod play_by_play;
pub mod point_builder;
pub mod possessions;
pub mod segmenter;

pub use game::parse_game;
pub use play_by_play::{create_play_by_play, PlayByPlay, PointStreams, Transition, WalkState};
pub use point_builder::PointBuilder;
pub use possessions::{create_possessions, validate_pull_placement};
pub use segmenter::{events_per_point, filter_empty_points, segment_points};
