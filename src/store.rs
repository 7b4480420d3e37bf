use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory for generated MP3 files. Existence of a file is the sole
/// success indicator: files are written once and never re-validated or
/// updated in place.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output directory {}", self.dir.display()))
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.path_for(filename).is_file()
    }

    pub fn size_of(&self, filename: &str) -> Option<u64> {
        let meta = fs::metadata(self.path_for(filename)).ok()?;
        meta.is_file().then(|| meta.len())
    }

    /// Writes `bytes` under `filename` via a temp file and rename, so an
    /// interrupted write never leaves a half-written MP3 that a later run
    /// would trust as complete.
    pub fn put(&self, filename: &str, bytes: &[u8]) -> anyhow::Result<()> {
        self.ensure_dir()?;
        let path = self.path_for(filename);
        let tmp = self.dir.join(format!("{filename}.tmp"));
        fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("rename into {}", path.display()))?;
        Ok(())
    }
}
