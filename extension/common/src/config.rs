use {crate::AppError, bon::Builder};

pub const DEFAULT_GEOCODER_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Endpoints and keys for the hosted services, fixed when the extension is built.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Config {
	#[builder(into, default = DEFAULT_GEOCODER_URL.to_owned())]
	pub geocoder_url: String,
	#[builder(into, default)]
	pub geocoder_api_key: String,
	#[builder(into, default = DEFAULT_GEMINI_URL.to_owned())]
	pub gemini_url: String,
	#[builder(into, default)]
	pub gemini_api_key: String,
}

impl Default for Config {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl Config {
	pub fn geocoder_key(&self) -> Result<&str, AppError> {
		require_key(&self.geocoder_api_key, "geocoder")
	}

	pub fn gemini_key(&self) -> Result<&str, AppError> {
		require_key(&self.gemini_api_key, "Gemini")
	}
}

fn require_key<'a>(key: &'a str, service: &str) -> Result<&'a str, AppError> {
	let key = key.trim();
	if key.is_empty() { Err(AppError::MissingConfiguration(service.to_owned())) } else { Ok(key) }
}
