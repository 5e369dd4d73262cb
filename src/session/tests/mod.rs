//! Session module tests
//!
//! - Controller behaviour (blank input, history cap, swap, copy)
//! - Shell loop driven from in-memory input
