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

//! Session controller - orchestrates conversions for a presentation layer
//!
//! # Responsibilities
//!
//! - Run the codec in the active direction
//! - Record non-blank results in the bounded history
//! - Swap direction and buffers
//! - Copy the current output to a clipboard sink
//!
//! # Architecture
//!
//! The Controller owns the `Codec` and the `History` and exposes an
//! explicit command interface (`convert`, `submit`, `swap`, `copy`). It
//! knows nothing about terminals; the shell in `session::shell` is one
//! presentation layer driving it.

use std::time::Instant;
use tracing::{debug, trace, warn};

use crate::config::AppConfig;
use crate::core::{swap, Codec, ConversionOutcome, ConversionRecord, Mode, SwapState};
use crate::session::clipboard::{ClipboardSink, CopyIndicator};
use crate::session::history::History;

/// Conversion controller for one session
///
/// Holds the current mode and the input/output buffers the presentation
/// layer displays, plus the session history.
pub struct Controller {
    /// Codec with its symbol table (built once per session)
    codec: Codec,
    /// Conversions so far, most recent first
    history: History,
    /// Active direction
    mode: Mode,
    /// Current input buffer
    input: String,
    /// Current output buffer
    output: String,
    /// "Copied" confirmation
    copy_indicator: CopyIndicator,
}

impl Controller {
    /// Creates a Controller from validated settings
    ///
    /// # Example
    ///
    /// ```
    /// use morse_desk::config::AppConfig;
    /// use morse_desk::session::Controller;
    ///
    /// let mut controller = Controller::new(&AppConfig::default());
    /// controller.submit("SOS");
    /// assert_eq!(controller.output(), "... --- ...");
    /// ```
    pub fn new(config: &AppConfig) -> Self {
        Self::with_codec(Codec::new(), config)
    }

    /// Creates a Controller around an existing codec
    pub fn with_codec(codec: Codec, config: &AppConfig) -> Self {
        Self {
            codec,
            history: History::new(config.history_limit),
            mode: config.default_mode,
            input: String::new(),
            output: String::new(),
            copy_indicator: CopyIndicator::new(config.copy_feedback),
        }
    }

    /// Converts `input` in the given direction
    ///
    /// Blank input (empty or whitespace only) short-circuits: the codec is
    /// not consulted and history is untouched. Otherwise the result is
    /// returned, and recorded in history only if it is non-blank.
    pub fn convert(&mut self, mode: Mode, input: &str) -> ConversionOutcome {
        if input.trim().is_empty() {
            trace!("Blank input, skipping conversion");
            return ConversionOutcome::default();
        }

        let output = self.codec.convert(mode, input);
        debug!(
            %mode,
            input_len = input.len(),
            output_len = output.len(),
            "Converted input"
        );

        if output.trim().is_empty() {
            return ConversionOutcome { output, record: None };
        }

        let record = ConversionRecord::new(mode, input, output.clone());
        if let Some(evicted) = self.history.push(record.clone()) {
            trace!(input = %evicted.input, "Evicted oldest history entry");
        }

        ConversionOutcome {
            output,
            record: Some(record),
        }
    }

    /// Sets the input buffer and converts it in the active mode
    ///
    /// The output buffer always reflects the latest submission, including
    /// an empty result for blank input.
    pub fn submit(&mut self, input: &str) -> ConversionOutcome {
        self.input = input.to_string();
        let outcome = self.convert(self.mode, input);
        self.output = outcome.output.clone();
        outcome
    }

    /// Toggles direction and exchanges the input and output buffers
    ///
    /// Does not run a conversion.
    pub fn swap(&mut self) {
        let swapped = swap(SwapState {
            mode: self.mode,
            input: std::mem::take(&mut self.input),
            output: std::mem::take(&mut self.output),
        });

        debug!(from = %self.mode, to = %swapped.mode, "Swapped direction");

        self.mode = swapped.mode;
        self.input = swapped.input;
        self.output = swapped.output;
    }

    /// Copies the output buffer to `clipboard`
    ///
    /// Failures are logged and swallowed; the indicator is only shown on
    /// success. Returns whether the copy succeeded. Copying an empty output
    /// is a no-op.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) -> bool {
        if self.output.is_empty() {
            return false;
        }

        match clipboard.set_text(&self.output) {
            Ok(()) => {
                self.copy_indicator.show(now);
                true
            }
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                false
            }
        }
    }

    /// Whether the "copied" confirmation should be shown at `now`
    pub fn copy_confirmed(&self, now: Instant) -> bool {
        self.copy_indicator.is_visible(now)
    }

    /// Sets the active direction without touching the buffers
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Empties both buffers (history is kept)
    pub fn clear_buffers(&mut self) {
        self.input.clear();
        self.output.clear();
        self.copy_indicator.clear();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Read-only view of the session history
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_starts_in_configured_mode() {
        let config = AppConfig::default().with_mode(Mode::MorseToText);
        let controller = Controller::new(&config);

        assert_eq!(controller.mode(), Mode::MorseToText);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_submit_updates_buffers() {
        let mut controller = Controller::default();
        controller.submit("hi");

        assert_eq!(controller.input(), "hi");
        assert_eq!(controller.output(), ".... ..");
    }

    #[test]
    fn test_convert_returns_record_for_non_blank_output() {
        let mut controller = Controller::default();
        let outcome = controller.convert(Mode::TextToMorse, "E");

        assert_eq!(outcome.output, ".");
        let record = outcome.record.expect("non-blank output should be recorded");
        assert_eq!(record.input, "E");
        assert_eq!(record.mode, Mode::TextToMorse);
    }
}
