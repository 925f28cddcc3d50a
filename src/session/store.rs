/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Persistent session token storage
//!
//! The token lives in a key-value backend under the fixed key
//! [`TOKEN_KEY`]. [`SessionStore`] is the only type in the crate that reads
//! or writes it, so the "at most one active token" invariant is enforced in
//! one place. Backends are pluggable through [`KeyValueStore`]:
//!
//! - [`MemoryStore`] keeps entries for the lifetime of the process
//! - [`FileStore`] persists entries as a JSON object on disk

use crate::application::config::SessionConfig;
use crate::constants::TOKEN_KEY;
use crate::error::AppError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use once_cell::sync::Lazy;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A string key-value store with per-key atomic operations
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(what: &str) -> AppError {
    AppError::Store(format!("{what} lock poisoned"))
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.read().map_err(|_| poisoned("memory store"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| poisoned("memory store"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| poisoned("memory store"))?;
        entries.remove(key);
        Ok(())
    }
}

static FILE_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Normalised key identifying a store file across `FileStore` instances
fn lock_key(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let canonical = match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent).ok().map(|p| p.join(name)),
        _ => None,
    };
    canonical.unwrap_or(absolute)
}

/// The process-wide lock shared by every store on `path`
fn shared_lock(path: &Path) -> Arc<Mutex<()>> {
    let mut locks = FILE_LOCKS.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(lock_key(path)).or_default())
}

/// Key-value store persisted as a JSON object in a single file
///
/// A missing file reads as an empty store. Writes go to a uniquely named
/// temporary file in the same directory that is then persisted over the
/// original. Every `FileStore` on the same path within the process shares
/// one lock, so read-modify-write cycles never interleave.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    guard: Arc<Mutex<()>>,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            guard: shared_lock(&path),
            path,
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Store(format!("corrupt store {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(AppError::Store(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(&serde_json::to_vec_pretty(entries)?)?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.guard.lock().map_err(|_| poisoned("file store"))?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.guard.lock().map_err(|_| poisoned("file store"))?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.guard.lock().map_err(|_| poisoned("file store"))?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Accessor for the session token
///
/// Cloning is cheap and every clone shares the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Wraps an existing key-value backend
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Creates a store that keeps the token in memory only
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Creates the store described by the session configuration
    ///
    /// A configured `store_path` selects a [`FileStore`]; otherwise the token
    /// is kept in memory.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        match &config.store_path {
            Some(path) => {
                info!("Persisting session token in {}", path);
                Self::new(Arc::new(FileStore::new(path)))
            }
            None => Self::in_memory(),
        }
    }

    /// Reads the current token
    ///
    /// An empty stored value reads as no token.
    pub fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self.backend.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Replaces the current token
    pub fn store(&self, token: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return Err(AppError::InvalidInput("session token is empty".to_string()));
        }
        self.backend.set(TOKEN_KEY, token)?;
        debug!("Session token stored");
        Ok(())
    }

    /// Removes the current token. Succeeds when no token is stored.
    pub fn clear(&self) -> Result<(), AppError> {
        self.backend.remove(TOKEN_KEY)?;
        debug!("Session token cleared");
        Ok(())
    }

    /// Whether a token is currently stored
    pub fn has_token(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_some())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("backend", &"KeyValueStore")
            .finish()
    }
}
