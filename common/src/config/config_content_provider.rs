use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where raw config text lives. `Ok(None)` means "nothing stored yet".
pub trait ConfigContentProvider {
    fn read_content(&self) -> Result<Option<String>, String>;
    fn write_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn read_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn write_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.path.display(), e)
        })
    }
}
