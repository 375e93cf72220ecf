pub mod document;
pub mod event;
pub mod game;
pub mod play;
pub mod player;
pub mod point;
pub mod possession;
pub mod team;

pub use document::*;
pub use event::*;
pub use game::*;
pub use play::*;
pub use player::*;
pub use point::*;
pub use possession::*;
pub use team::*;
