use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

use crate::model::phrase_bank::PhraseBank;

/// Reads a phrase bank file, one phrase per line.
///
/// - Reads the entire file into memory
/// - Trims lines and drops blank ones
pub fn read_phrase_bank<P: AsRef<Path>>(filepath: P) -> io::Result<PhraseBank> {
	let mut contents = String::new();
	File::open(filepath)?.read_to_string(&mut contents)?;
	Ok(PhraseBank::from_lines(&contents))
}

/// Lists the phrase bank files (`.txt`) in a directory.
///
/// Returns bank names (file stems, no extension), sorted. Subdirectories
/// are ignored.
pub fn list_banks<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
	let mut banks = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new("txt")) {
			if let Some(stem) = path.file_stem() {
				banks.push(stem.to_string_lossy().to_string());
			}
		}
	}

	banks.sort();
	Ok(banks)
}
