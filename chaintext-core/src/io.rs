use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively lists all files with a given extension under a directory.
///
/// Results are sorted so that corpus concatenation order is stable
/// across runs on the same tree.
pub(crate) fn list_files_recursive<P: AsRef<Path>>(
	dir: P,
	extension: &str,
) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	collect_into(dir.as_ref(), extension, &mut files)?;
	files.sort();
	Ok(files)
}

fn collect_into(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> io::Result<()> {
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_dir() {
			collect_into(&path, extension, files)?;
		} else if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;

	#[test]
	fn lists_nested_files_sorted() {
		let root = std::env::temp_dir().join(format!("chaintext_io_{}", std::process::id()));
		let nested = root.join("inner");
		fs::create_dir_all(&nested).unwrap();
		File::create(root.join("b.txt")).unwrap();
		File::create(root.join("a.txt")).unwrap();
		File::create(nested.join("c.txt")).unwrap();
		File::create(root.join("skip.md")).unwrap();

		let files = list_files_recursive(&root, "txt").unwrap();
		assert_eq!(files.len(), 3);
		assert!(files[0].ends_with("a.txt"));
		assert!(files.iter().all(|f| f.extension().unwrap() == "txt"));

		fs::remove_dir_all(&root).unwrap();
	}
}
