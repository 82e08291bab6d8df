//! The thumbnail batch.
//!
//! Takes the sources found by [`scan`](crate::scan) and, one at a time,
//! identifies each image, plans its square crop and writes the derivative
//! next to the source:
//!
//! ```text
//! content/ramen/
//! ├── miso/
//! │   ├── thumbnail.jpg          # 1200x800 source
//! │   └── thumbnail_small.jpg    # 400x400, written here
//! └── shoyu_zurich/
//!     ├── thumbnail.jpg          # 800x1600 source
//!     └── thumbnail_small.jpg    # 400x400, window shifted down
//! ```
//!
//! ## Failure Model
//!
//! Every failure is fatal. The first source that cannot be read, decoded or
//! written stops the batch and its error is returned; thumbnails already
//! written stay on disk. No sources at all, including a missing content
//! root, is a successful empty run.
//!
//! ## Progress
//!
//! An optional channel receives a [`ProcessEvent`] per source. The batch
//! itself is strictly sequential.

use crate::imaging::{
    BackendError, ImageBackend, RustBackend, ThumbnailParams, create_thumbnail, plan_thumbnail,
};
use crate::scan::{self, ScanError, ThumbnailSource};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
}

/// Whether the batch writes files or only plans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// Progress event, one per source.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    ThumbnailWritten {
        index: usize,
        identifier: String,
        params: ThumbnailParams,
    },
    ThumbnailPlanned {
        index: usize,
        identifier: String,
        params: ThumbnailParams,
    },
}

/// Outcome of one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedThumbnail {
    pub identifier: String,
    pub params: ThumbnailParams,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    pub mode: Mode,
    pub thumbnails: Vec<ProcessedThumbnail>,
}

/// Scan `source_root` and generate every thumbnail with the default backend.
pub fn process(
    source_root: &Path,
    mode: Mode,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let sources = scan::scan(source_root)?;
    process_with_backend(&RustBackend::new(), &sources, mode, progress)
}

/// Process already-discovered sources using a specific backend (allows
/// testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    sources: &[ThumbnailSource],
    mode: Mode,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let mut thumbnails = Vec::with_capacity(sources.len());

    for (i, source) in sources.iter().enumerate() {
        if !source.path.is_file() {
            return Err(ProcessError::SourceNotFound(source.path.clone()));
        }

        let index = i + 1;
        let params = match mode {
            Mode::Write => create_thumbnail(backend, &source.path, &source.identifier)?,
            Mode::DryRun => {
                let dims = backend.identify(&source.path)?;
                plan_thumbnail(&source.path, &source.identifier, dims)?
            }
        };

        if let Some(tx) = &progress {
            let identifier = source.identifier.clone();
            let event = match mode {
                Mode::Write => ProcessEvent::ThumbnailWritten {
                    index,
                    identifier,
                    params: params.clone(),
                },
                Mode::DryRun => ProcessEvent::ThumbnailPlanned {
                    index,
                    identifier,
                    params: params.clone(),
                },
            };
            // A dropped receiver only loses progress output
            tx.send(event).ok();
        }

        thumbnails.push(ProcessedThumbnail {
            identifier: source.identifier.clone(),
            params,
        });
    }

    Ok(ProcessResult { mode, thumbnails })
}
