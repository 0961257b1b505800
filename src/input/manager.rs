//! Cached front door for reading résumé and job files

use crate::error::{Result, SkillfyError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_by_type;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads documents as plain text, remembering each file by its canonical path.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        // Canonical path doubles as the cache key; a missing file is bad input
        let canonical = fs::canonicalize(path).await.map_err(|_| {
            SkillfyError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        // Serve from cache
        if let Some(cached_text) = self.cached(&canonical) {
            debug!("Cache hit for {}", canonical.display());
            return Ok(cached_text.to_string());
        }

        // Extension picks the extractor
        let file_type = FileType::from_path(path).ok_or_else(|| {
            SkillfyError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;
        let text = extract_by_type(file_type, path).await?;

        if text.trim().is_empty() {
            warn!("No text could be extracted from: {}", path.display());
        }

        // Remember for the next request
        if self.enable_cache {
            self.cache.insert(canonical, text.clone());
        }

        Ok(text)
    }

    fn cached(&self, canonical: &Path) -> Option<&str> {
        if !self.enable_cache {
            return None;
        }
        self.cache.get(canonical).map(String::as_str)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
