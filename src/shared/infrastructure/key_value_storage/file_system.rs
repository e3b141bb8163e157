// File system implementation of the KeyValueStorage port.
//
// Layout
// - One file per key: <root>/<key>.json
// - Writes go to <key>.json.tmp first and are renamed into place.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys map to a single file directly under the root.
    pub fn is_valid_key(key: &str) -> bool {
        !key.is_empty() && !key.contains(['/', '\\']) && !key.starts_with('.')
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !Self::is_valid_key(key) {
            return Err(StorageError::Backend(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
