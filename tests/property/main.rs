//! Property-based tests for the scheduling engines and the safety check.
//!
//! Run with: `cargo test --test property`

mod banker_props;
mod scheduler_props;
