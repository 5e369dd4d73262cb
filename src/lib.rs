// Copyright 2025 bakri (tidynest@proton.me)
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

//! Morse Desk
//!
//! Converts plain text to International Morse code and back, with a
//! bounded in-session history and clipboard support.
//!
//! # Features
//!
//! - **Bidirectional codec:** Letters, digits, common punctuation, `/` for spaces
//! - **Lenient decoding:** Unknown tokens are dropped, never an error
//! - **Session history:** Last 10 conversions, most recent first
//! - **Clipboard:** Fire-and-forget copy with a short confirmation
//! - **Export:** Atomic writes of output or history (JSON)
//!
//! # Architecture
//!
//! - **`core`:** Symbol table, codec and value types (pure, no I/O)
//! - **`session`:** Controller, history, clipboard and the interactive shell
//! - **`config`:** Runtime settings and their validation
//! - **`export`:** Atomic file output
//! - **`logging`:** Tracing subscriber setup
//!
//! # Examples
//!
//! ## Converting directly
//!
//! ```
//! use morse_desk::Codec;
//!
//! let codec = Codec::new();
//! assert_eq!(codec.encode("Café"), "-.-. .- ..-. .");
//! assert_eq!(codec.decode("... ???"), "S");
//! ```
//!
//! ## Driving a session
//!
//! ```
//! use morse_desk::config::AppConfig;
//! use morse_desk::session::Controller;
//!
//! let mut controller = Controller::new(&AppConfig::default());
//! controller.submit("HI");
//! controller.swap();
//! assert_eq!(controller.input(), ".... ..");
//! assert_eq!(controller.output(), "HI");
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod logging;
pub mod session;

// Re-export commonly used types for convenience
pub use core::{Codec, ConversionRecord, Mode, SymbolTable};
