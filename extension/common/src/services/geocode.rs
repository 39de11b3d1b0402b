use {
	crate::{AppError, record::Coordinates},
	serde::{Deserialize, Serialize},
	url::Url,
};

pub const GEOCODER_SERVICE: &str = "geocoder";

/// A non-blank free-text place search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "GeocodeQueryWire")]
pub struct GeocodeQuery {
	query: String,
}

#[derive(Deserialize)]
struct GeocodeQueryWire {
	query: String,
}

impl TryFrom<GeocodeQueryWire> for GeocodeQuery {
	type Error = AppError;

	fn try_from(wire: GeocodeQueryWire) -> Result<Self, Self::Error> {
		Self::new(wire.query)
	}
}

impl GeocodeQuery {
	pub fn new(query: impl AsRef<str>) -> Result<Self, AppError> {
		let query = query.as_ref().trim();
		if query.is_empty() {
			return Err(AppError::EmptyQuery);
		}
		Ok(Self { query: query.to_owned() })
	}

	pub fn as_str(&self) -> &str {
		&self.query
	}

	pub fn request_url(&self, endpoint: &str, api_key: &str) -> Result<Url, AppError> {
		Url::parse_with_params(endpoint, [("q", self.query.as_str()), ("key", api_key)]).map_err(|e| AppError::ExtensionError(format!("bad geocoder URL: {e}")))
	}
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct GeocodeResponse {
	#[serde(default)]
	pub results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeocodeResult {
	pub geometry: Option<Geometry>,
	pub formatted: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Geometry {
	pub lat: f64,
	pub lng: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
	pub label: String,
	pub coordinates: Coordinates,
}

impl GeocodeResponse {
	/// The best match, labelled with the service's formatted address when it has one.
	pub fn into_location(self, query: &GeocodeQuery) -> Result<GeocodedLocation, AppError> {
		let best = self.results.into_iter().next().ok_or(AppError::LocationNotFound)?;
		let Geometry { lat, lng } = best.geometry.ok_or_else(|| AppError::InvalidResponse(GEOCODER_SERVICE.to_owned()))?;
		if !lat.is_finite() || !lng.is_finite() {
			return Err(AppError::InvalidResponse(GEOCODER_SERVICE.to_owned()));
		}
		let label = best.formatted.filter(|f| !f.trim().is_empty()).unwrap_or_else(|| query.as_str().to_owned());
		Ok(GeocodedLocation { label, coordinates: Coordinates { latitude: lat, longitude: lng } })
	}
}

#[cfg(test)]
mod tests {
	use {super::*, serde_json::json};

	fn parse(value: serde_json::Value) -> GeocodeResponse {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn blank_queries_are_rejected() {
		assert_eq!(GeocodeQuery::new("   "), Err(AppError::EmptyQuery));
		assert_eq!(GeocodeQuery::new(" Nairobi ").unwrap().as_str(), "Nairobi");
	}

	#[test]
	fn blank_queries_do_not_deserialize() {
		assert!(serde_json::from_value::<GeocodeQuery>(json!({ "query": " " })).is_err());
		assert_eq!(serde_json::from_value::<GeocodeQuery>(json!({ "query": "Lima" })).unwrap().as_str(), "Lima");
	}

	#[test]
	fn request_url_encodes_query_and_key() {
		let url = GeocodeQuery::new("São Paulo & co").unwrap().request_url("https://api.opencagedata.com/geocode/v1/json", "k3y").unwrap();
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
		assert_eq!(pairs, [("q".to_owned(), "São Paulo & co".to_owned()), ("key".to_owned(), "k3y".to_owned())]);
	}

	#[test]
	fn first_result_wins() {
		let response = parse(json!({
			"results": [
				{ "geometry": { "lat": -1.28, "lng": 36.82 }, "formatted": "Nairobi, Kenya" },
				{ "geometry": { "lat": 0.0, "lng": 0.0 }, "formatted": "Elsewhere" }
			]
		}));
		let location = response.into_location(&GeocodeQuery::new("nairobi").unwrap()).unwrap();
		assert_eq!(location.label, "Nairobi, Kenya");
		assert_eq!(location.coordinates, Coordinates { latitude: -1.28, longitude: 36.82 });
	}

	#[test]
	fn label_falls_back_to_the_query() {
		let response = parse(json!({ "results": [{ "geometry": { "lat": 1.0, "lng": 2.0 } }] }));
		let location = response.into_location(&GeocodeQuery::new("somewhere").unwrap()).unwrap();
		assert_eq!(location.label, "somewhere");
	}

	#[test]
	fn no_results_is_location_not_found() {
		let query = GeocodeQuery::new("atlantis").unwrap();
		assert_eq!(parse(json!({ "results": [] })).into_location(&query), Err(AppError::LocationNotFound));
		assert_eq!(parse(json!({ "status": { "code": 200 } })).into_location(&query), Err(AppError::LocationNotFound));
	}

	#[test]
	fn result_without_geometry_is_invalid() {
		let query = GeocodeQuery::new("x").unwrap();
		let response = parse(json!({ "results": [{ "formatted": "x" }] }));
		assert_eq!(response.into_location(&query), Err(AppError::InvalidResponse(GEOCODER_SERVICE.to_owned())));
	}
}
