//! Data sources feeding section loads.

use std::future::Future;
use std::path::{Path, PathBuf};

use cdesk_paging::{LoadError, LoadPayload, SectionKind};
use tracing::debug;

/// Asynchronous loader for a section's records.
///
/// Implementations must be cheap to share: the dashboard holds one behind an
/// `Arc` and calls it from spawned tasks.
pub trait DataSource: Send + Sync + 'static {
    fn fetch(
        &self,
        section: SectionKind,
    ) -> impl Future<Output = Result<LoadPayload, LoadError>> + Send;
}

/// Reads `<root>/<section>.json` for each section.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the payload file for `section`.
    pub fn path_for(&self, section: SectionKind) -> PathBuf {
        self.root.join(format!("{}.json", section.key()))
    }
}

impl DataSource for JsonDirSource {
    async fn fetch(&self, section: SectionKind) -> Result<LoadPayload, LoadError> {
        let path = self.path_for(section);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| LoadError::unavailable(section, err))?;
        let payload = LoadPayload::from_json(&text)?;
        debug!(section = %section, path = %path.display(), items = payload.len(), "payload read");
        Ok(payload)
    }
}
