use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub trait FsExt: AsRef<Path> {
    /// Resolves the path against the current working directory. Absolute paths are returned as is.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?.join(self))
    }

    /// Resolves the path like `relative_to_cwd` and fails unless it names an existing file.
    fn assert_file_exists(&self) -> Result<PathBuf> {
        let path = self.relative_to_cwd()?;

        if !path.is_file() {
            return Err(anyhow!("{:?} is not a valid file", path));
        }

        Ok(path)
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_joins_cwd() {
        let path = "some/config.conf".relative_to_cwd().unwrap();

        assert_eq!(path, std::env::current_dir().unwrap().join("some/config.conf"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let absolute = std::env::temp_dir().join("quoridor.conf");

        assert_eq!(absolute.relative_to_cwd().unwrap(), absolute);
    }

    #[test]
    fn test_missing_file() {
        let err = "does/not/exist.conf".assert_file_exists().unwrap_err();

        assert!(err.to_string().contains("is not a valid file"));
    }

    #[test]
    fn test_existing_file() {
        let manifest = format!("{}/Cargo.toml", env!("CARGO_MANIFEST_DIR"));

        assert!(manifest.assert_file_exists().is_ok());
    }
}
