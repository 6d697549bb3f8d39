//! Core library for the mod profile editor.
//! Holds the profile document state machine (load/edit/validate/save, dirty tracking and
//! unsaved-changes confirmation) plus a thin egui front end.

pub mod config;
mod document;
mod error;
mod gui;
pub mod logging;
pub mod statics;
mod template;
mod validate;

pub use config::EditorConfig;
pub use document::{
    DiscardChoice, DiscardDecision, DocumentPrompt, ProfileDocument, Severity, Status,
    normalize_json_path,
};
pub use error::{DocumentError, ValidationError};
pub use gui::run_gui;
pub use template::create_template;
pub use validate::{Balance, scan_balance, validate};
