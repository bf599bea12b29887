//! Corpus acquisition from a folder of plain-text files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io;

/// Loads every `.txt` file under `folder` (recursively) into one string.
///
/// Files are concatenated in sorted path order with a newline between
/// them. Unreadable files are skipped with a warning rather than
/// aborting the whole load.
///
/// # Errors
/// - [`Error::MissingInput`] if `folder` is not a directory.
/// - [`Error::EmptyCorpus`] if no `.txt` file exists or none yields text.
pub fn load_folder<P: AsRef<Path>>(folder: P) -> Result<String, Error> {
	let folder = folder.as_ref();
	if !folder.is_dir() {
		return Err(Error::MissingInput(folder.to_path_buf()));
	}

	let files = io::list_files_recursive(folder, "txt")
		.map_err(|_| Error::MissingInput(folder.to_path_buf()))?;
	if files.is_empty() {
		return Err(Error::EmptyCorpus(folder.to_path_buf()));
	}

	let mut corpus = String::new();
	for file in &files {
		match fs::read_to_string(file) {
			Ok(contents) => {
				log::info!("read corpus file {}", file.display());
				corpus.push_str(&contents);
				corpus.push('\n');
			}
			Err(e) => log::warn!("skipping unreadable file {}: {e}", file.display()),
		}
	}

	if corpus.trim().is_empty() {
		return Err(Error::EmptyCorpus(folder.to_path_buf()));
	}

	Ok(corpus)
}

/// Path of the model snapshot for a given corpus folder and order.
///
/// Example: `corpus/` + order 3 → `corpus/markov_chain_order3.bin`
pub fn snapshot_path<P: AsRef<Path>>(folder: P, order: usize) -> PathBuf {
	folder.as_ref().join(format!("markov_chain_order{order}.bin"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_folder_is_an_error() {
		let err = load_folder("/definitely/not/a/folder").unwrap_err();
		assert!(matches!(err, Error::MissingInput(_)));
	}

	#[test]
	fn folder_without_text_files_is_empty_corpus() {
		let root = std::env::temp_dir().join(format!("chaintext_corpus_{}", std::process::id()));
		fs::create_dir_all(&root).unwrap();
		let err = load_folder(&root).unwrap_err();
		assert!(matches!(err, Error::EmptyCorpus(_)));
		fs::remove_dir_all(&root).unwrap();
	}

	#[test]
	fn snapshot_path_is_keyed_by_order() {
		let path = snapshot_path("corpus", 3);
		assert!(path.ends_with("markov_chain_order3.bin"));
	}
}
