//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — hosted text-generation models the tutor can query
//! - [`question::Question`] — a validated student question
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
