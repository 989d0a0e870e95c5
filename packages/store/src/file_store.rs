//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by the native shells to keep the
//! teacher session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── sessionToken    # raw value
//! └── currentUser
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/activity-signup/` |
//! | Linux | `~/.local/share/activity-signup/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\activity-signup\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|e| io_error(key, e))?;
        std::fs::write(self.value_path(key), value).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
