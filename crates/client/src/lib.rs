//! Fatewheel client library.
//!
//! The binary in `main.rs` is a thin composition root; the main menu lives
//! here so it can be driven by scripted input in tests.
pub mod app;

pub use app::{App, MainMenuChoice};
