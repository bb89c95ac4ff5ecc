//! Optional image assets. Loading is best effort: a missing or unreadable
//! file only produces a warning and the caller continues without it.

use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Asset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Asset {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Read an asset from disk; `None` when unset or on any I/O failure.
pub fn load_best_effort(label: &str, path: Option<&str>) -> Option<Asset> {
    let raw = path?;
    let path = crate::utils::path::expand_tilde(raw);

    match fs::read(&path) {
        Ok(bytes) => Some(Asset { path, bytes }),
        Err(e) => {
            warning(format!(
                "Could not load {label} image '{}': {e}",
                Path::new(raw).display()
            ));
            None
        }
    }
}
