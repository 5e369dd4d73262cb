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

//! src/core/mod.rs
//!
//! Core conversion logic
//!
//! This module contains the pieces with actual algorithmic content:
//! - The symbol table (character ↔ token)
//! - The codec (encode and decode over that table)
//! - Value types shared with the session layer
//!
//! Everything here is pure and free of I/O, so it can be tested without
//! a terminal or clipboard.

pub mod codec;
pub mod table;
pub mod types;

pub use codec::Codec;
pub use table::SymbolTable;
pub use types::*;

#[cfg(test)]
mod tests;
