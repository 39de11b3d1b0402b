use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures that can cross a context boundary, so every variant is
/// serializable and renders as a user-facing sentence.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("The {0} API key is not configured. Rebuild the extension with it set in .env.")]
	MissingConfiguration(String),
	#[error("Please enter a search term")]
	EmptyQuery,
	#[error("Date, latitude, and longitude are required parameters")]
	MissingLocationContext,
	#[error("Location not found")]
	LocationNotFound,
	#[error("Could not reach the {service} service: {reason}")]
	Network { service: String, reason: String },
	#[error("{service} request failed with status {status}")]
	ServiceStatus { service: String, status: u16 },
	#[error("Invalid response format from {0}")]
	InvalidResponse(String),
	#[error("Could not read the occurrence table: {0}")]
	PageStructure(String),
	#[error("An internal extension error occurred: {0}")]
	ExtensionError(String),
}
