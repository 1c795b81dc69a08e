use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Manifest sidecar file name under the data directory.
pub const MANIFEST_FILE: &str = "index_meta.json";

/// Build-time statistics written next to the index files.
///
/// Purely informational: the searcher shows it in the startup summary when
/// present and shrugs when it isn't. The index and doc-map files remain the
/// only data the engine actually needs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndexManifest {
    pub version: u32,
    pub documents: usize,
    pub terms: usize,
    pub tokens: u64,
    pub build_seconds: f64,
}

impl IndexManifest {
    pub const VERSION: u32 = 1;

    pub fn write(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Opportunistic load: any failure (missing file, stale schema) is `None`.
    pub fn load(path: &Path) -> Option<IndexManifest> {
        let json = fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }
}
