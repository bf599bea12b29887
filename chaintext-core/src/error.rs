use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while loading a corpus, building a model,
/// persisting it or generating text from it.
///
/// # Notes
/// - `Overrun` is the only kind a caller can usefully retry (with a
///   larger ceiling or a different seed); the others are terminal.
/// - Unresolvable generation contexts are NOT an error kind: the
///   generator recovers from them in place by restarting from a random
///   sentence start.
#[derive(Debug)]
pub enum Error {
	/// The input path does not exist or is not a directory.
	MissingInput(PathBuf),

	/// No usable text was found under the input directory.
	EmptyCorpus(PathBuf),

	/// No sentence survived filtering; the model would have no starts.
	EmptyModel,

	/// A chain order of 0 was requested.
	InvalidOrder(usize),

	/// Saving or loading a model snapshot failed.
	Persistence {
		path: PathBuf,
		source: PersistenceError,
	},

	/// The generation loop hit its iteration ceiling before both
	/// termination conditions held.
	Overrun { steps: usize },
}

/// Cause of a snapshot save/load failure.
#[derive(Debug)]
pub enum PersistenceError {
	Io(io::Error),
	Codec(postcard::Error),
}

impl Error {
	/// Wraps an I/O or codec failure with the snapshot path it concerns.
	pub(crate) fn persistence(path: &std::path::Path, source: impl Into<PersistenceError>) -> Self {
		Self::Persistence {
			path: path.to_path_buf(),
			source: source.into(),
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingInput(path) => {
				write!(f, "input path is not a folder: {}", path.display())
			}
			Self::EmptyCorpus(path) => {
				write!(f, "no usable text files found in folder {}", path.display())
			}
			Self::EmptyModel => {
				write!(f, "no valid sentences found after preprocessing, check the corpus")
			}
			Self::InvalidOrder(order) => write!(f, "chain order must be >= 1, got {order}"),
			Self::Persistence { path, source } => {
				write!(f, "model snapshot failed for {}: {source}", path.display())
			}
			Self::Overrun { steps } => {
				write!(f, "generation exceeded the iteration ceiling of {steps} steps")
			}
		}
	}
}

impl fmt::Display for PersistenceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(e) => write!(f, "{e}"),
			Self::Codec(e) => write!(f, "{e}"),
		}
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Self::Persistence { source: PersistenceError::Io(e), .. } => Some(e),
			Self::Persistence { source: PersistenceError::Codec(e), .. } => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for PersistenceError {
	fn from(e: io::Error) -> Self {
		Self::Io(e)
	}
}

impl From<postcard::Error> for PersistenceError {
	fn from(e: postcard::Error) -> Self {
		Self::Codec(e)
	}
}
