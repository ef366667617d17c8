//! Utility functions and helpers

use crate::error::{ClientError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// URL validation and joining utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Parse an absolute URL
    pub fn validate_url(input: &str) -> Result<Url> {
        Url::parse(input)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))
    }

    /// Join `base` and `path` with exactly one `/` between them.
    ///
    /// Plain concatenation would give `api//some/search/` for a base ending
    /// in `/`; trimming both sides makes the trailing slash optional.
    pub fn join(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Final path component as UTF-8
    pub fn file_name(path: &Path) -> Result<String> {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::Config(format!("Path has no UTF-8 file name: {:?}", path))
            })
    }

    /// Read the whole file. The handle is closed before this returns, on
    /// success and on any read failure.
    pub fn read_all(path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path)?;
        if !file.metadata()?.is_file() {
            return Err(ClientError::Config(format!("Path is not a file: {:?}", path)));
        }
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
