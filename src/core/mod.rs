//! Core logic shared by the CLI and the TUI: the view-state machine, the
//! test form, and the curriculum catalog.

pub mod curriculum;
mod error;
pub mod form;
pub mod view;

pub use curriculum::Board;
pub use error::{ParseError, Result, ValidationError};
pub use form::{TestForm, TestPayload};
pub use view::{ViewController, ViewState};
