// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! One-way export of conversion results
//!
//! Writes go through a temp-file-then-rename so a crash never leaves a
//! half-written file behind. Paths may start with `~`.
//!
//! Nothing here is ever read back: history does not survive the session.

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::info;

use crate::core::ConversionRecord;
use crate::session::History;

/// Errors that can occur while exporting
#[derive(Debug, Error)]
pub enum ExportError {
    /// Path is not valid UTF-8 and cannot be tilde-expanded
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),

    /// Atomic write operation failed
    #[error("Atomic write to {path} failed: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// History could not be serialised
    #[error("Failed to serialise history: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Generic I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &Path) -> Result<PathBuf, ExportError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ExportError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Writes `text` (plus a trailing newline) to `path` atomically
///
/// Parent directories are created as needed. Returns the expanded path.
pub fn write_output(path: &Path, text: &str) -> Result<PathBuf, ExportError> {
    let path = expand_path(path)?;
    write_atomic(&path, format!("{}\n", text).as_bytes())?;

    info!(path = %path.display(), bytes = text.len(), "Saved output");
    Ok(path)
}

/// Writes the history (most recent first) to `path` as a JSON array
pub fn write_history(path: &Path, history: &History) -> Result<PathBuf, ExportError> {
    let path = expand_path(path)?;

    let records: Vec<&ConversionRecord> = history.iter().collect();
    let json = serde_json::to_string_pretty(&records)?;
    write_atomic(&path, json.as_bytes())?;

    info!(path = %path.display(), records = records.len(), "Exported history");
    Ok(path)
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let wrap = |source: std::io::Error| ExportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::options().open(path).map_err(wrap)?;
    file.write_all(content).map_err(wrap)?;
    file.commit().map_err(wrap)?;

    Ok(())
}
