//! Lazily-loaded, process-wide model handle.
//!
//! The artifact is read on the first successful [`ModelProvider::get`] and the
//! resulting predictor is shared read-only afterwards. Concurrent first callers
//! block on the same initialization; exactly one of them runs the loader. A
//! failed load leaves the provider empty, so a later call may try again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::ForecastError;
use crate::model::{Predictor, TreeEnsemble};

type Loader = dyn Fn(&Path) -> Result<Arc<dyn Predictor>, ForecastError> + Send + Sync;

pub struct ModelProvider {
    path: PathBuf,
    loader: Box<Loader>,
    cell: OnceCell<Arc<dyn Predictor>>,
}

impl ModelProvider {
    /// Provider backed by a tree-ensemble artifact at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_loader(path, |p| {
            let model = TreeEnsemble::load(p)?;
            tracing::info!(
                path = %p.display(),
                name = model.name(),
                trees = model.tree_count(),
                "loaded model artifact"
            );
            Ok(Arc::new(model) as Arc<dyn Predictor>)
        })
    }

    /// Provider with a custom loader (alternative artifact formats, test doubles).
    pub fn with_loader<F>(path: impl Into<PathBuf>, loader: F) -> Self
    where
        F: Fn(&Path) -> Result<Arc<dyn Predictor>, ForecastError> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            loader: Box::new(loader),
            cell: OnceCell::new(),
        }
    }

    /// Provider that is already initialized with `predictor`.
    pub fn preloaded(predictor: Arc<dyn Predictor>) -> Self {
        let provider = Self::with_loader(PathBuf::new(), |p| {
            Err(ForecastError::ArtifactLoad(format!(
                "preloaded provider cannot load '{}'",
                p.display()
            )))
        });
        // Fresh cell, so `set` cannot fail.
        let _ = provider.cell.set(predictor);
        provider
    }

    /// The shared predictor, loading it on first use.
    pub fn get(&self) -> Result<Arc<dyn Predictor>, ForecastError> {
        self.cell
            .get_or_try_init(|| {
                tracing::debug!(path = %self.path.display(), "loading model artifact");
                (self.loader)(&self.path)
            })
            .map(Arc::clone)
            .inspect_err(|e| tracing::error!(path = %self.path.display(), "{e}"))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelProvider")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
