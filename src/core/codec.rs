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

//! src/core/codec.rs
//!
//! Text ↔ Morse conversion
//!
//! Both directions are total functions: every input produces some output
//! and nothing here returns an error. Characters and tokens that the
//! [`SymbolTable`] does not know are dropped without a placeholder.
//!
//! # Decoding is lossy
//! An unknown token contributes nothing, so a malformed fragment between
//! two words can silently merge them. This leniency is kept on purpose;
//! callers that need diagnostics must inspect the input themselves.

use regex::Regex;

use crate::core::{
    table::{SymbolTable, WORD_SEPARATOR},
    types::Mode,
};

/// Bidirectional Morse codec over a fixed symbol table
///
/// # Example
/// ```
/// use morse_desk::core::Codec;
///
/// let codec = Codec::new();
/// assert_eq!(codec.encode("SOS"), "... --- ...");
/// assert_eq!(codec.decode("... --- ... / ... --- ..."), "SOS SOS");
/// ```
#[derive(Clone, Debug)]
pub struct Codec {
    table: SymbolTable,
    whitespace_runs: Regex,
}

impl Codec {
    /// Creates a codec over the standard International Morse table
    pub fn new() -> Self {
        Self::with_table(SymbolTable::standard())
    }

    /// Creates a codec over a caller-supplied table
    pub fn with_table(table: SymbolTable) -> Self {
        Self {
            table,
            whitespace_runs: Regex::new(r"\s{2,}")
                .expect("whitespace run pattern should be valid regex"),
        }
    }

    /// The table this codec reads from
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Runs the direction selected by `mode`
    pub fn convert(&self, mode: Mode, input: &str) -> String {
        match mode {
            Mode::TextToMorse => self.encode(input),
            Mode::MorseToText => self.decode(input),
        }
    }

    /// Encodes text as space-separated Morse tokens
    ///
    /// Input is uppercased first. Unmapped characters are skipped, so
    /// `"Café"` encodes the same as `"CAF"`.
    pub fn encode(&self, text: &str) -> String {
        text.to_uppercase()
            .chars()
            .filter_map(|c| self.table.token_for(c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decodes space-separated Morse tokens back to text
    ///
    /// Steps:
    /// 1. Pad every `/` with spaces so it always stands as its own token
    /// 2. Split on single spaces
    /// 3. Map each token through the reverse table (`/` gives a space,
    ///    unknown and empty tokens give nothing)
    /// 4. Collapse whitespace runs and trim
    pub fn decode(&self, morse: &str) -> String {
        let padded = morse.replace(WORD_SEPARATOR, " / ");

        let decoded: String = padded
            .split(' ')
            .filter_map(|token| self.table.char_for(token))
            .collect();

        self.whitespace_runs
            .replace_all(&decoded, " ")
            .trim()
            .to_string()
    }
}

/// Turns multi-line input into a single line the codec can read
///
/// Each line break becomes a word break: Morse lines are joined with the
/// `/` token, text lines with a space. Blank lines are skipped and every
/// line is trimmed, so `\r\n` endings and trailing newlines leave nothing
/// behind.
pub fn join_lines(mode: Mode, input: &str) -> String {
    let separator = match mode {
        Mode::TextToMorse => " ".to_string(),
        Mode::MorseToText => format!(" {} ", WORD_SEPARATOR),
    };

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(&separator)
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sos() {
        let codec = Codec::new();
        assert_eq!(codec.encode("SOS"), "... --- ...");
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        let codec = Codec::new();
        assert_eq!(codec.encode("sos"), codec.encode("SOS"));
    }

    #[test]
    fn test_encode_empty() {
        let codec = Codec::new();
        assert_eq!(codec.encode(""), "");
    }

    #[test]
    fn test_decode_word_separator() {
        let codec = Codec::new();
        assert_eq!(codec.decode("... --- ... / ... --- ..."), "SOS SOS");
    }

    #[test]
    fn test_convert_dispatches_on_mode() {
        let codec = Codec::new();
        assert_eq!(codec.convert(Mode::TextToMorse, "E"), ".");
        assert_eq!(codec.convert(Mode::MorseToText, "."), "E");
    }

    #[test]
    fn test_join_lines_trailing_newline_decodes() {
        let codec = Codec::new();
        let joined = join_lines(Mode::MorseToText, "... --- ...\n");
        assert_eq!(codec.decode(&joined), "SOS");
    }

    #[test]
    fn test_join_lines_morse_lines_become_words() {
        let codec = Codec::new();
        let joined = join_lines(Mode::MorseToText, ".... ..\r\n-- --- .-. ... .\n");
        assert_eq!(codec.decode(&joined), "HI MORSE");
    }

    #[test]
    fn test_join_lines_text_lines_keep_word_break() {
        let codec = Codec::new();
        let joined = join_lines(Mode::TextToMorse, "hi\nthere\n");
        assert_eq!(codec.encode(&joined), ".... .. / - .... . .-. .");
    }

    #[test]
    fn test_join_lines_skips_blank_lines() {
        assert_eq!(join_lines(Mode::TextToMorse, "\n a \n\n b\n"), "a b");
        assert_eq!(join_lines(Mode::MorseToText, "\n\n"), "");
    }
}
