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

//! Clipboard access and the transient "copied" indicator
//!
//! Copying is fire-and-forget: the controller swallows any
//! [`ClipboardError`] and simply does not show the indicator. The
//! [`ClipboardSink`] trait keeps the controller testable without a
//! display server.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors from the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing provider)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard refused the write
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Anything that can receive copied text
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, via arboard
///
/// The handle is opened lazily on the first copy, so sessions that never
/// copy never touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// In-memory clipboard for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message
    pub fail_with: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(message) = &self.fail_with {
            return Err(ClipboardError::WriteFailed(message.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Short-lived confirmation shown after a successful copy
///
/// Visible for a fixed duration after [`CopyIndicator::show`], then
/// clears on its own. Independent of every other piece of session state.
#[derive(Clone, Debug)]
pub struct CopyIndicator {
    duration: Duration,
    shown_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown_at: None,
        }
    }

    /// Starts the visibility window at `now`
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// True while `now` is inside the visibility window
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(shown_at) => now.saturating_duration_since(shown_at) < self.duration,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.shown_at = None;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
