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

//! src/core/types.rs
//!
//! Core type definitions for conversions
//!
//! - `Mode`: The active conversion direction
//! - `ConversionRecord`: One logged input/output pair
//! - `ConversionOutcome`: What a single convert command produced
//! - `SwapState`: The (mode, input, output) triple a swap operates on
//!
//! Records serialise with serde so a session's history can be exported.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Conversion direction
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Plain text in, Morse tokens out
    #[default]
    TextToMorse,
    /// Morse tokens in, plain text out
    MorseToText,
}

impl Mode {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Mode::TextToMorse => Mode::MorseToText,
            Mode::MorseToText => Mode::TextToMorse,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::TextToMorse => write!(f, "text→morse"),
            Mode::MorseToText => write!(f, "morse→text"),
        }
    }
}

/// Unrecognised mode name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown mode '{0}' (expected 'text' or 'morse')")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Accepts the short names used on the command line and in the shell
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "t2m" | "text-to-morse" | "text→morse" | "encode" => Ok(Mode::TextToMorse),
            "morse" | "m2t" | "morse-to-text" | "morse→text" | "decode" => Ok(Mode::MorseToText),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// One successful conversion, as kept in the session history
///
/// Never mutated after creation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConversionRecord {
    /// Direction the conversion ran in
    pub mode: Mode,
    /// Text as submitted
    pub input: String,
    /// Codec output (never blank)
    pub output: String,
    /// Local time the record was created
    pub created_at: DateTime<Local>,
}

impl ConversionRecord {
    /// Creates a record stamped with the current local time
    pub fn new(mode: Mode, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            mode,
            input: input.into(),
            output: output.into(),
            created_at: Local::now(),
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} => {}",
            self.created_at.format("%H:%M:%S"),
            self.mode,
            self.input,
            self.output
        )
    }
}

/// Result of one convert command
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversionOutcome {
    /// Converted text (empty for blank input)
    pub output: String,
    /// History entry, present only when the output was non-blank
    pub record: Option<ConversionRecord>,
}

/// The buffers a swap exchanges
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapState {
    pub mode: Mode,
    pub input: String,
    pub output: String,
}

/// Toggles the direction and exchanges input and output
///
/// Pure value transform; nothing is converted.
pub fn swap(state: SwapState) -> SwapState {
    SwapState {
        mode: state.mode.toggled(),
        input: state.output,
        output: state.input,
    }
}
