//! Mocktest - terminal client for building curriculum-aligned mock tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐
//! │     CLI     │  │     TUI     │
//! └──────┬──────┘  └──────┬──────┘
//!        │                │
//!        └───────┬────────┘
//!                │
//!         ┌──────┴──────┐
//!         │    Core     │   view-state machine, form, catalog
//!         └─────────────┘
//! ```

pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

pub use config::Config;
pub use core::{TestPayload, ViewController, ViewState};
