use super::artifact::ModelLoadError;
use super::pipeline::LogisticPipeline;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily loaded, process-lifetime handle on the model artifact.
///
/// The first successful [`ModelHandle::acquire`] reads and validates the file;
/// later calls hand out the same shared pipeline. A failed load leaves the
/// handle empty so the caller decides whether that is fatal.
#[derive(Debug)]
pub struct ModelHandle {
    path: PathBuf,
    cell: OnceCell<Arc<LogisticPipeline>>,
}

impl ModelHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn acquire(&self) -> Result<Arc<LogisticPipeline>, ModelLoadError> {
        self.cell
            .get_or_try_init(|| LogisticPipeline::from_path(&self.path).map(Arc::new))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/pipeline.json")
    }

    #[test]
    fn acquire_loads_once_and_shares_the_pipeline() {
        let handle = ModelHandle::new(bundled_path());
        assert!(!handle.is_loaded());

        let first = handle.acquire().expect("artifact loads");
        let second = handle.acquire().expect("cached");

        assert!(handle.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_artifact_reports_io_error() {
        let handle = ModelHandle::new("does/not/exist/pipeline.json");

        let err = handle.acquire().expect_err("missing file");

        assert!(matches!(err, ModelLoadError::Io { .. }));
        assert!(!handle.is_loaded());
        assert!(err.to_string().contains("does/not/exist"));
    }
}
