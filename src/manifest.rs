use crate::naming;
use crate::store::AudioStore;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Manifest consumed by the web front-end. Lists every phrase whose audio
/// file currently exists on disk, in phrase-list order, so the front-end
/// never has to re-derive filenames.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub phrases: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: usize,
    pub text: String,
    pub file: String,
    pub size: u64,
}

/// Builds the manifest from current disk state. A phrase is listed iff its
/// derived file exists right now, whether it was fetched this run or by an
/// earlier one.
pub fn scan(store: &AudioStore, phrases: &[&str]) -> Manifest {
    let mut entries = Vec::new();
    for (index, text) in phrases.iter().enumerate() {
        let filename = naming::audio_filename(index, text);
        if let Some(size) = store.size_of(&filename) {
            entries.push(ManifestEntry {
                index,
                text: (*text).to_string(),
                file: format!("{}/{}", store.dir().display(), filename),
                size,
            });
        }
    }
    Manifest { phrases: entries }
}

/// Overwrites `manifest.json` in the output directory. The previous manifest
/// is never merged with; the file always reflects the scan it was built from.
pub fn write(manifest: &Manifest, store: &AudioStore) -> anyhow::Result<PathBuf> {
    store.ensure_dir()?;
    let path = store.path_for(MANIFEST_FILENAME);
    let tmp = store.path_for("manifest.json.tmp");
    let json = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, &path).with_context(|| format!("rename into {}", path.display()))?;
    Ok(path)
}
