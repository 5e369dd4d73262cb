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

//! Codec tests
//!
//! Tests for both conversion directions:
//! - Known encodings (SOS, punctuation)
//! - Silent omission of unmapped characters and tokens
//! - Word separation with `/`
//! - Round-trips over the whole alphabet

use crate::core::{Codec, SymbolTable};

#[test]
fn test_encode_drops_unmapped_characters() {
    let codec = Codec::new();

    // É has no entry; no separator artefact is left behind
    assert_eq!(codec.encode("Café"), "-.-. .- ..-. .");
}

#[test]
fn test_encode_only_unmapped_is_empty() {
    let codec = Codec::new();
    assert_eq!(codec.encode("éü#%"), "");
}

#[test]
fn test_encode_space_becomes_slash() {
    let codec = Codec::new();
    assert_eq!(codec.encode("HI THERE"), ".... .. / - .... . .-. .");
}

#[test]
fn test_encode_punctuation() {
    let codec = Codec::new();
    assert_eq!(codec.encode("?"), "..--..");
    assert_eq!(codec.encode("A/B"), ".- -..-. -...");
    assert_eq!(codec.encode("@"), ".--.-.");
}

#[test]
fn test_decode_unknown_token_is_dropped() {
    let codec = Codec::new();

    // Unknown token leaves no trailing space
    assert_eq!(codec.decode("... ???"), "S");
}

#[test]
fn test_decode_unknown_tokens_can_merge_words() {
    let codec = Codec::new();

    // Lossy by design: a garbage token between words contributes nothing
    assert_eq!(codec.decode(".... .. ...... - .... ."), "HITHE");
}

#[test]
fn test_decode_slash_without_surrounding_spaces() {
    let codec = Codec::new();
    assert_eq!(codec.decode("...---.../...---..."), "");
    assert_eq!(codec.decode(".../---"), "S O");
}

#[test]
fn test_decode_collapses_repeated_separators() {
    let codec = Codec::new();
    assert_eq!(codec.decode("... / / / ---"), "S O");
}

#[test]
fn test_decode_trims_leading_and_trailing_space() {
    let codec = Codec::new();
    assert_eq!(codec.decode(" / ... --- ... / "), "SOS");
}

#[test]
fn test_decode_extra_spaces_between_tokens() {
    let codec = Codec::new();

    // Empty tokens from double spaces are unmapped and contribute nothing
    assert_eq!(codec.decode("...   ---   ..."), "SOS");
}

#[test]
fn test_decode_empty() {
    let codec = Codec::new();
    assert_eq!(codec.decode(""), "");
    assert_eq!(codec.decode("   "), "");
    assert_eq!(codec.decode("/"), "");
}

#[test]
fn test_round_trip_every_symbol() {
    let codec = Codec::new();
    let table = SymbolTable::standard();

    for &(c, _) in table.entries() {
        if c == ' ' {
            continue;
        }
        let text = c.to_string();
        assert_eq!(
            codec.decode(&codec.encode(&text)),
            text,
            "Round-trip failed for '{}'",
            c
        );
    }
}

#[test]
fn test_round_trip_sentences() {
    let codec = Codec::new();

    let samples = [
        "hello world",
        "The quick brown fox jumps over the lazy dog",
        "CALL 911, NOW!",
        "e=mc2 (roughly)",
        "user@example.com said \"hi\"; ok?",
        "a-b_c & $5 + 'x': y/z",
    ];

    for sample in samples {
        assert_eq!(
            codec.decode(&codec.encode(sample)),
            sample.to_uppercase(),
            "Round-trip failed for {:?}",
            sample
        );
    }
}

/// Helper: Every non-space character in the standard table
fn alphabet() -> Vec<char> {
    SymbolTable::standard()
        .entries()
        .iter()
        .map(|&(c, _)| c)
        .filter(|&c| c != ' ')
        .collect()
}

#[test]
fn test_round_trip_generated_phrases() {
    let codec = Codec::new();
    let symbols = alphabet();
    let n = symbols.len();

    for seed in 0..500usize {
        let word_count = 1 + seed % 4;
        let words: Vec<String> = (0..word_count)
            .map(|w| {
                let len = 1 + (seed + w * 3) % 6;
                (0..len)
                    .map(|k| {
                        let c = symbols[(seed * 31 + w * 17 + k * 7) % n];
                        // Mix in lowercase; encode uppercases first
                        if (seed + k) % 2 == 0 {
                            c.to_ascii_lowercase()
                        } else {
                            c
                        }
                    })
                    .collect()
            })
            .collect();
        let phrase = words.join(" ");

        assert_eq!(
            codec.decode(&codec.encode(&phrase)),
            phrase.to_uppercase(),
            "Round-trip failed for {:?}",
            phrase
        );
    }
}

#[test]
fn test_round_trip_every_symbol_pair() {
    let codec = Codec::new();
    let symbols = alphabet();

    for &a in &symbols {
        for &b in &symbols {
            let phrase = format!("{}{} {}", a, b, a);
            assert_eq!(
                codec.decode(&codec.encode(&phrase)),
                phrase.to_uppercase(),
                "Round-trip failed for {:?}",
                phrase
            );
        }
    }
}
