use crate::{
	AppError,
	record::PageData,
	services::{GeocodeQuery, GeocodedLocation, LocationContext},
};
use serde::{Deserialize, Serialize};

/// Popup → content script.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum ToContentScript {
	#[serde(rename = "requestData")]
	RequestData,
}

/// Content script → popup, over the runtime bus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", content = "data")]
pub enum ToPopup {
	#[serde(rename = "updateGBIFData")]
	UpdateGbifData(PageData),
}

/// Popup → background service worker. Answered with a [`BackgroundReply`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum ToBackground {
	Geocode(GeocodeQuery),
	DescribeLocation(LocationContext),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ServiceReply {
	Location(GeocodedLocation),
	Narrative(String),
}

const BACKGROUND_WORKER: &str = "the background worker";

impl ServiceReply {
	pub fn into_location(self) -> Result<GeocodedLocation, AppError> {
		match self {
			Self::Location(location) => Ok(location),
			Self::Narrative(_) => Err(AppError::InvalidResponse(BACKGROUND_WORKER.to_owned())),
		}
	}

	pub fn into_narrative(self) -> Result<String, AppError> {
		match self {
			Self::Narrative(text) => Ok(text),
			Self::Location(_) => Err(AppError::InvalidResponse(BACKGROUND_WORKER.to_owned())),
		}
	}
}

pub type BackgroundReply = Result<ServiceReply, AppError>;
