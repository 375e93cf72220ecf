use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileReaderError {
	#[error("Expected a .{expected} file, got: {}", path.display())]
	UnsupportedExtension { path: PathBuf, expected: String },

	#[error("Failed to read {}: {source}", path.display())]
	Io { path: PathBuf, source: io::Error },

	#[error("Failed to decode JSON from {}: {source}", path.display())]
	Json { path: PathBuf, source: serde_json::Error },
}

impl FileReaderError {
	pub fn unsupported_extension_error(path: PathBuf, expected: &str) -> Self {
		FileReaderError::UnsupportedExtension {
			path,
			expected: expected.to_string(),
		}
	}
}
