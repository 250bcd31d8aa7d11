//! HAProxy Config Use Case
//!
//! Orchestrates the save flow for one load balancer:
//! 1. Transform the topology into a rendering context
//! 2. Render the configuration text
//! 3. Atomically replace the config file
//!
//! Nothing is written when the transform or the render fails, so a bad
//! topology never clobbers a working config.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::LoadBalancer;
use crate::domain::ports::FileSystem;
use crate::domain::services::transform_loadbalancer;
use crate::domain::value_objects::ContentHash;
use crate::error::LbResult;
use crate::infrastructure::template::ConfigRenderer;

/// What `save_if_changed` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was (re)written
    Written(ContentHash),
    /// The file already held this exact content
    Unchanged(ContentHash),
}

impl WriteOutcome {
    pub fn hash(&self) -> &ContentHash {
        match self {
            WriteOutcome::Written(hash) | WriteOutcome::Unchanged(hash) => hash,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }
}

/// Compiles load balancers into HAProxy config files
pub struct HaproxyConfigWriter<FS: FileSystem> {
    renderer: ConfigRenderer,
    file_system: FS,
}

impl<FS: FileSystem> HaproxyConfigWriter<FS> {
    pub fn new(renderer: ConfigRenderer, file_system: FS) -> Self {
        Self {
            renderer,
            file_system,
        }
    }

    pub fn renderer(&self) -> &ConfigRenderer {
        &self.renderer
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Configuration text for `loadbalancer`
    pub fn render(&self, loadbalancer: &LoadBalancer) -> LbResult<String> {
        let context = transform_loadbalancer(loadbalancer)?;
        self.renderer.render(&context)
    }

    /// Render and atomically write the config file
    pub fn save(&self, path: &Path, loadbalancer: &LoadBalancer) -> LbResult<ContentHash> {
        let text = self.render(loadbalancer)?;
        let hash = ContentHash::from_content(&text);
        self.file_system.write_atomic(path, &text)?;
        info!(
            path = %path.display(),
            loadbalancer = %loadbalancer.id,
            hash = %hash,
            "wrote haproxy config"
        );
        Ok(hash)
    }

    /// Like [`save`](Self::save), but leaves an identical file untouched
    pub fn save_if_changed(
        &self,
        path: &Path,
        loadbalancer: &LoadBalancer,
    ) -> LbResult<WriteOutcome> {
        let text = self.render(loadbalancer)?;
        let hash = ContentHash::from_content(&text);

        if self.file_system.hash(path)?.as_ref() == Some(&hash) {
            debug!(path = %path.display(), hash = %hash, "haproxy config unchanged");
            return Ok(WriteOutcome::Unchanged(hash));
        }

        self.file_system.write_atomic(path, &text)?;
        info!(
            path = %path.display(),
            loadbalancer = %loadbalancer.id,
            hash = %hash,
            "wrote haproxy config"
        );
        Ok(WriteOutcome::Written(hash))
    }
}
