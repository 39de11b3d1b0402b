use {
	crate::AppError,
	serde::{Deserialize, Serialize},
};

pub const GEMINI_SERVICE: &str = "Gemini";
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where and when a specimen was recorded, as the page printed it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "LocationContextWire")]
pub struct LocationContext {
	date: String,
	latitude: String,
	longitude: String,
}

#[derive(Deserialize)]
struct LocationContextWire {
	date: String,
	latitude: String,
	longitude: String,
}

impl TryFrom<LocationContextWire> for LocationContext {
	type Error = AppError;

	fn try_from(wire: LocationContextWire) -> Result<Self, Self::Error> {
		Self::new(&wire.date, &wire.latitude, &wire.longitude)
	}
}

impl LocationContext {
	pub fn new(date: &str, latitude: &str, longitude: &str) -> Result<Self, AppError> {
		let [date, latitude, longitude] = [date, latitude, longitude].map(str::trim);
		if date.is_empty() || latitude.is_empty() || longitude.is_empty() {
			return Err(AppError::MissingLocationContext);
		}
		Ok(Self { date: date.to_owned(), latitude: latitude.to_owned(), longitude: longitude.to_owned() })
	}

	pub fn prompt(&self) -> String {
		let Self { date, latitude, longitude } = self;
		format!(
			"Provide a brief socioeconomic background of the location at coordinates ({latitude}, {longitude}) during {date}. Include information about economic conditions, social structure, and major historical events if relevant."
		)
	}
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
	pub contents: Vec<Content>,
	pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
	pub fn for_context(context: &LocationContext) -> Self {
		Self { contents: vec![Content { parts: vec![Part { text: Some(context.prompt()) }] }], generation_config: GenerationConfig::default() }
	}
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
	pub temperature: f32,
	pub max_output_tokens: u32,
	pub top_p: f32,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { temperature: 0.7, max_output_tokens: 1024, top_p: 0.8 }
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
	#[serde(default)]
	pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
	pub text: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateContentResponse {
	#[serde(default)]
	pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Candidate {
	pub content: Option<Content>,
}

impl GenerateContentResponse {
	/// Text of the first part of the first candidate.
	pub fn into_text(self) -> Result<String, AppError> {
		self.candidates
			.into_iter()
			.next()
			.and_then(|candidate| candidate.content)
			.and_then(|content| content.parts.into_iter().next())
			.and_then(|part| part.text)
			.filter(|text| !text.trim().is_empty())
			.ok_or_else(|| AppError::InvalidResponse(GEMINI_SERVICE.to_owned()))
	}
}
