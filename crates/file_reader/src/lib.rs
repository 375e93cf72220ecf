pub mod error;

pub use error::FileReaderError;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file on disk that is only read if its extension matches what the caller expects.
#[derive(Debug, Clone)]
pub struct FileReader {
	path: PathBuf,
}

impl FileReader {
	pub fn new(path: impl AsRef<Path>, extension: &str) -> Result<Self, FileReaderError> {
		let path = path.as_ref().to_path_buf();
		let matches = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

		if !matches {
			return Err(FileReaderError::unsupported_extension_error(path, extension));
		}

		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn read_content(&self) -> Result<String, FileReaderError> {
		debug!(path = %self.path.display(), "reading file");
		fs::read_to_string(&self.path).map_err(|source| FileReaderError::Io {
			path: self.path.clone(),
			source,
		})
	}

	/// Reads the whole file and decodes it as a single JSON value.
	pub fn read_json<T: DeserializeOwned>(&self) -> Result<T, FileReaderError> {
		let content = self.read_content()?;
		serde_json::from_str(&content).map_err(|source| FileReaderError::Json {
			path: self.path.clone(),
			source,
		})
	}
}
