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

//! src/core/table.rs
//!
//! Symbol table shared by both conversion directions
//!
//! The forward table (character → token) is a literal list. The reverse
//! table (token → character) is derived from it by inversion, so the two
//! directions can never drift apart.
//!
//! # Alphabet
//! - Latin letters `A`-`Z` (uppercase only; callers normalise first)
//! - Digits `0`-`9`
//! - Punctuation `. , ? ' ! / ( ) & : ; = + - _ " $ @`
//! - Space, encoded as the reserved token `/`

use std::collections::HashMap;

/// Token reserved for the space character
pub const WORD_SEPARATOR: &str = "/";

/// International Morse assignments, in display order
const FORWARD: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', WORD_SEPARATOR),
];

/// Immutable bidirectional character ↔ token mapping
///
/// Construct once with [`SymbolTable::standard`] and hand it to a
/// [`Codec`](crate::core::Codec). Nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
    /// Forward entries in display order (for listings)
    entries: Vec<(char, &'static str)>,
}

impl SymbolTable {
    /// Builds the standard International Morse table
    pub fn standard() -> Self {
        Self::from_entries(FORWARD)
    }

    /// Builds a table from a forward list, deriving the reverse map
    ///
    /// If two characters ever shared a token, the later entry would win in
    /// the reverse map. The curated table is collision-free, so this is not
    /// treated as an error.
    pub fn from_entries(entries: &[(char, &'static str)]) -> Self {
        let forward: HashMap<char, &'static str> = entries.iter().copied().collect();
        let reverse = invert(entries);

        Self {
            forward,
            reverse,
            entries: entries.to_vec(),
        }
    }

    /// Token for a character, if the character is in the alphabet
    pub fn token_for(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c).copied()
    }

    /// Character for a token, if the token is known
    pub fn char_for(&self, token: &str) -> Option<char> {
        self.reverse.get(token).copied()
    }

    /// Forward entries in display order
    pub fn entries(&self) -> &[(char, &'static str)] {
        &self.entries
    }

    /// Number of distinct characters in the alphabet
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// True when no two characters share a token
    pub fn is_bijective(&self) -> bool {
        self.forward.len() == self.reverse.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inverts a forward list into token → character (last write wins)
fn invert(entries: &[(char, &'static str)]) -> HashMap<&'static str, char> {
    let mut reverse = HashMap::with_capacity(entries.len());
    for &(c, token) in entries {
        reverse.insert(token, c);
    }
    reverse
}
