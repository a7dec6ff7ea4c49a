//! Core domain concepts shared across all subdomains.
//!
//! - [`base_url`] — default bridge address and URL normalization
//! - [`error::DomainError`] — domain-level errors
//! - [`string::preview`] — single-line previews for logs

pub mod base_url;
pub mod error;
pub mod lenient;
pub mod string;
