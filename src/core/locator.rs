//! Locale directory discovery.
//!
//! Locale files conventionally live in a configured directory, but the
//! process is not always started from the project root. The locator first
//! tries the preferred path and then walks from the start directory up
//! through its ancestors looking for a directory with the requested name.
//!
//! Every filesystem query is checked on its own: an error on one ancestor
//! (permission denied, vanished path, I/O failure) counts as "not found at
//! this level" and the walk continues. None of the operations here return
//! errors.

use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

/// Resource directory name searched for by [`find_locales_directory`].
pub const LOCALES_DIR_NAME: &str = "locales";

/// Number of directories checked by default, the start directory included.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Filesystem query used by the [`Locator`].
pub trait FsProbe: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send;
}

/// Probe backed by `tokio::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl FsProbe for TokioFs {
    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(metadata.is_dir())
    }
}

/// Upward directory search from a fixed start directory.
#[derive(Debug, Clone)]
pub struct Locator<F = TokioFs> {
    start: PathBuf,
    fs: F,
}

impl Locator<TokioFs> {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self::with_probe(start, TokioFs)
    }

    /// Locator starting at the process working directory.
    ///
    /// Returns `None` when the working directory cannot be determined.
    pub fn from_current_dir() -> Option<Self> {
        match std::env::current_dir() {
            Ok(dir) => Some(Self::new(dir)),
            Err(e) => {
                debug!(error = %e, "cannot determine current directory");
                None
            }
        }
    }
}

impl<F: FsProbe> Locator<F> {
    pub fn with_probe(start: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            start: start.into(),
            fs,
        }
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Find the nearest `dir_name` directory in the start directory or one of
    /// its ancestors.
    ///
    /// At most `max_depth` directories are checked, the start directory
    /// being the first. The search also ends once the filesystem root has
    /// been checked.
    pub async fn find_directory(&self, dir_name: &str, max_depth: usize) -> Option<PathBuf> {
        let mut current = self.start.as_path();

        for depth in 0..max_depth {
            let candidate = current.join(dir_name);
            trace!(depth, candidate = %candidate.display(), "checking");

            if self.probe_dir(&candidate).await {
                debug!(path = %candidate.display(), depth, "found directory");
                return Some(candidate);
            }

            match current.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => current = parent,
                _ => {
                    debug!(dir_name, depth, "reached filesystem root");
                    return None;
                }
            }
        }

        debug!(dir_name, max_depth, "depth limit reached");
        None
    }

    /// [`find_directory`](Self::find_directory) for [`LOCALES_DIR_NAME`] with
    /// the default depth.
    pub async fn find_locales_directory(&self) -> Option<PathBuf> {
        self.find_directory(LOCALES_DIR_NAME, DEFAULT_MAX_DEPTH)
            .await
    }

    /// `preferred` when it is an existing directory, otherwise the result of
    /// the upward search for `locales`.
    pub async fn effective_locales_dir(&self, preferred: &Path) -> Option<PathBuf> {
        self.effective_directory(preferred, LOCALES_DIR_NAME, DEFAULT_MAX_DEPTH)
            .await
    }

    /// `preferred` when it is an existing directory, otherwise the result of
    /// searching upward for `dir_name`.
    pub async fn effective_directory(
        &self,
        preferred: &Path,
        dir_name: &str,
        max_depth: usize,
    ) -> Option<PathBuf> {
        if self.probe_dir(preferred).await {
            return Some(preferred.to_path_buf());
        }

        debug!(
            preferred = %preferred.display(),
            dir_name,
            "preferred directory not found, searching upward"
        );
        self.find_directory(dir_name, max_depth).await
    }

    async fn probe_dir(&self, path: &Path) -> bool {
        match self.fs.is_dir(path).await {
            Ok(is_dir) => is_dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "treating inaccessible path as missing");
                false
            }
        }
    }
}

/// Search for `dir_name` from the current working directory upward.
pub async fn find_directory_recursive(dir_name: &str, max_depth: usize) -> Option<PathBuf> {
    Locator::from_current_dir()?
        .find_directory(dir_name, max_depth)
        .await
}

/// Search for `locales` from the current working directory upward.
pub async fn find_locales_directory() -> Option<PathBuf> {
    find_directory_recursive(LOCALES_DIR_NAME, DEFAULT_MAX_DEPTH).await
}

/// Use `preferred` if it is a directory, else search upward for `locales`.
pub async fn effective_locales_dir(preferred: impl AsRef<Path>) -> Option<PathBuf> {
    let preferred = preferred.as_ref();
    match Locator::from_current_dir() {
        Some(locator) => locator.effective_locales_dir(preferred).await,
        None => TokioFs
            .is_dir(preferred)
            .await
            .unwrap_or(false)
            .then(|| preferred.to_path_buf()),
    }
}
