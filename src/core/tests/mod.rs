//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Codec behaviour (encode, decode, round-trips)
//! - Type tests (Mode, ConversionRecord, swap)

#[cfg(test)]
mod codec_tests;
#[cfg(test)]
mod types_tests;
