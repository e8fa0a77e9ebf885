//! Common-password corpus
//!
//! Loads the set of known-weak passwords. Loading never touches global
//! state: callers own the resulting [`CommonPasswordSet`] and may share it
//! across concurrent evaluations.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the corpus location.
pub const COMMON_PASSWORDS_PATH_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

const DEFAULT_COMMON_PASSWORDS_PATH: &str = "./assets/common_passwords.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Common password file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Common password file has no lines")]
    Empty,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_COMMON_PASSWORDS_PATH`
/// 2. Default path `./assets/common_passwords.txt`
pub fn common_passwords_path() -> PathBuf {
    std::env::var(COMMON_PASSWORDS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PASSWORDS_PATH))
}

/// Known-weak passwords. Membership is an exact, case-sensitive match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads one entry per line, trimmed of surrounding whitespace.
    /// A blank line yields the empty-string entry.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CorpusError> {
        let mut entries = HashSet::new();
        for line in reader.lines() {
            entries.insert(line?.trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Loads the corpus from a file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no lines at all
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CorpusError::NotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        let set = Self::from_reader(std::io::BufReader::new(file))?;

        if set.is_empty() {
            return Err(CorpusError::Empty);
        }

        Ok(set)
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CommonPasswordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of loading the corpus: either the loaded set, or an empty set
/// together with the reason loading failed.
#[derive(Debug)]
pub enum CorpusLoad {
    Loaded(CommonPasswordSet),
    Degraded {
        set: CommonPasswordSet,
        error: CorpusError,
    },
}

impl CorpusLoad {
    /// Loads from `path`, degrading to an empty set on any failure.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match CommonPasswordSet::load(path) {
            Ok(set) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Common passwords loaded: {} entries from {:?}", set.len(), path);
                Self::Loaded(set)
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Common passwords unavailable ({}), continuing with empty set", error);
                Self::Degraded {
                    set: CommonPasswordSet::empty(),
                    error,
                }
            }
        }
    }

    /// Loads from the path given by [`common_passwords_path`].
    pub fn from_env() -> Self {
        Self::from_path(common_passwords_path())
    }

    pub fn set(&self) -> &CommonPasswordSet {
        match self {
            Self::Loaded(set) | Self::Degraded { set, .. } => set,
        }
    }

    pub fn error(&self) -> Option<&CorpusError> {
        match self {
            Self::Loaded(_) => None,
            Self::Degraded { error, .. } => Some(error),
        }
    }

    pub fn into_set(self) -> CommonPasswordSet {
        match self {
            Self::Loaded(set) | Self::Degraded { set, .. } => set,
        }
    }
}
