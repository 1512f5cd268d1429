//! Core types and the view controller for the Keepsake client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. The
//! transport is reached through the [`api::KeepsakeApi`] trait; the binary
//! crate supplies the reqwest implementation.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod api;
pub mod couple;
pub mod date;
pub mod error;
mod loose;
pub mod memory;
pub mod note;
pub mod view;

pub use error::{Error, Result, WorkflowError};
