//! Request and response shapes for the hosted services the background worker
//! calls. Responses are validated here, before any field reaches the UI.

mod gemini;
mod geocode;

pub use gemini::*;
pub use geocode::*;

use crate::AppError;

/// Maps a non-success HTTP status to the error shown to the user.
pub fn check_status(service: &str, status: u16) -> Result<(), AppError> {
	if (200..300).contains(&status) { Ok(()) } else { Err(AppError::ServiceStatus { service: service.to_owned(), status }) }
}
