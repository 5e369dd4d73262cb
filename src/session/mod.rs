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

//! Interactive session layer
//!
//! # Architecture
//!
//! - **Model**: `Codec` (in `core`) and `History`
//! - **View**: the line-oriented `Shell`
//! - **Controller**: explicit `convert` / `swap` / `copy` commands
//!
//! # Module Structure
//!
//! ```text
//! session/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // Conversion orchestration
//! ├── history.rs      // Bounded most-recent-first log
//! ├── clipboard.rs    // Clipboard sinks and the copy indicator
//! ├── commands.rs     // Shell line parser (nom)
//! └── shell.rs        // Terminal presentation
//! ```

pub mod clipboard;
pub mod commands;
pub mod controller;
pub mod history;
pub mod shell;

pub use {controller::Controller, history::History, shell::Shell};

#[cfg(test)]
mod tests;
