//! Discovery of thumbnail sources.
//!
//! Walks the content root and collects every `thumbnail.<ext>` file at any
//! depth, the equivalent of the glob `content/ramen/**/thumbnail.*`:
//!
//! ```text
//! content/ramen/                       # Content root
//! ├── miso/
//! │   ├── index.md
//! │   ├── thumbnail.jpg                # Source, identifier "miso"
//! │   └── thumbnail_small.jpg          # Derivative (ignored)
//! ├── 2023/
//! │   └── tonkotsu/
//! │       └── thumbnail.png            # Source, identifier "tonkotsu"
//! └── .drafts/                         # Hidden, not descended into
//!     └── thumbnail.jpg
//! ```
//!
//! Entries are visited in file-name order so repeated runs process sources
//! in the same sequence.

use crate::naming::{is_thumbnail_source, post_identifier};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Content root used when none is given on the command line.
pub const DEFAULT_SOURCE_ROOT: &str = "content/ramen";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSource {
    pub path: PathBuf,
    /// Immediate parent directory name, keys the crop override table.
    pub identifier: String,
}

impl ThumbnailSource {
    pub fn new(path: PathBuf) -> Self {
        let identifier = post_identifier(&path);
        Self { path, identifier }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

/// Find every thumbnail source under `root`.
///
/// A root with no matches, or no root at all, yields an empty list.
pub fn scan(root: &Path) -> Result<Vec<ThumbnailSource>, ScanError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_thumbnail_source(entry.path()) {
            sources.push(ThumbnailSource::new(entry.into_path()));
        }
    }

    Ok(sources)
}
