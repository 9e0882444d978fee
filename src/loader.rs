//! This module provides the `SourceLoader` struct, responsible for loading
//! Turing Machine descriptions from files or in-memory strings.

use crate::parser::parse;
use crate::types::{CompilerError, MachineDescription};
use std::fs;
use std::path::Path;

/// `SourceLoader` is a utility struct for loading machine descriptions.
pub struct SourceLoader;

impl SourceLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the `.tm` file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(MachineDescription)` if the file is read and parsed.
    /// * `Err(CompilerError::FileError)` if the file cannot be read.
    /// * `Err(CompilerError::UnrecognizedLine)` if the content fails to parse.
    pub fn load_machine(path: &Path) -> Result<MachineDescription, CompilerError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CompilerError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a machine description from the provided string content.
    ///
    /// This is useful for descriptions that are not stored in files, e.g.
    /// from user input.
    pub fn load_machine_from_string(content: &str) -> Result<MachineDescription, CompilerError> {
        parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_machine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.tm");

        let content = "start 2\nfrom 1 read 0 write 1 goto 2 move right";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = SourceLoader::load_machine(&file_path);
        assert!(result.is_ok());

        let machine = result.unwrap();
        assert_eq!(machine.transitions.len(), 1);
        assert_eq!(machine.params.get("start"), Some("2"));
    }

    #[test]
    fn test_load_invalid_machine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.tm");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"this is not a machine").unwrap();

        let result = SourceLoader::load_machine(&file_path);
        assert!(matches!(
            result,
            Err(CompilerError::UnrecognizedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = SourceLoader::load_machine(&dir.path().join("absent.tm"));
        assert!(matches!(result, Err(CompilerError::FileError(_))));
    }

    #[test]
    fn test_load_from_string() {
        let result = SourceLoader::load_machine_from_string("empty_symbol .");
        assert!(result.is_ok());
        assert_eq!(result.unwrap().params.get("empty_symbol"), Some("."));
    }
}
