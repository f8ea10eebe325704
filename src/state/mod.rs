//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (View, LoginField)
//! - Form drafts and validation (ApplicationDraft, CandidateDraft, Violation)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{
    nivel_estudio_next, nivel_estudio_prev, number_to_field_text, ApplicationDraft, ApplyField,
    CandidateDraft, EditField, Violation, NIVEL_ESTUDIO,
};
pub use navigation::{LoginField, View};
pub use state_impl::State;
