use crate::schema::{Event, Role, Team};
use file_reader::FileReaderError;
use std::fmt;
use thiserror::Error;

/// Where the play-by-play walk was when it met an event pair it has no transition for.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedEventContext {
	pub point: usize,
	pub possession: Role,
	pub o_cursor: usize,
	pub d_cursor: usize,
	pub attacking_event: Option<Event>,
	pub defending_event: Option<Event>,
	pub o_stream: Vec<Event>,
	pub d_stream: Vec<Event>,
}

impl fmt::Display for MalformedEventContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"point: {}, possession: {}, o_cursor: {}, d_cursor: {}, attacking event: {:?}, defending event: {:?}",
			self.point, self.possession, self.o_cursor, self.d_cursor, self.attacking_event, self.defending_event
		)
	}
}

#[derive(Debug, Error)]
pub enum DecodeError {
	#[error("Unbound event within possession: {0}")]
	MalformedEvent(Box<MalformedEventContext>),

	#[error("Structural invariant violated in point {point}: {reason}")]
	StructuralInvariantViolation { point: usize, reason: String },

	#[error("Missing {field} on event with code {code} in point {point}")]
	MissingField { point: usize, field: &'static str, code: i64 },

	#[error("Invalid game document: {0}")]
	InvalidDocument(#[from] serde_json::Error),

	#[error("Invalid {side} event log: {source}")]
	InvalidEventLog { side: Team, source: serde_json::Error },

	#[error(transparent)]
	File(#[from] FileReaderError),
}

impl DecodeError {
	pub fn malformed_event_error(context: MalformedEventContext) -> Self {
		DecodeError::MalformedEvent(Box::new(context))
	}

	pub fn pull_placement_error(point: usize, reason: &str) -> Self {
		DecodeError::StructuralInvariantViolation {
			point,
			reason: reason.to_string(),
		}
	}

	pub const fn missing_field_error(point: usize, field: &'static str, code: i64) -> Self {
		DecodeError::MissingField { point, field, code }
	}

	/// The point the failure belongs to, when it belongs to one.
	pub fn point(&self) -> Option<usize> {
		match self {
			DecodeError::MalformedEvent(context) => Some(context.point),
			DecodeError::StructuralInvariantViolation { point, .. } | DecodeError::MissingField { point, .. } => Some(*point),
			DecodeError::InvalidDocument(_) | DecodeError::InvalidEventLog { .. } | DecodeError::File(_) => None,
		}
	}
}
