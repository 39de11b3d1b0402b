use serde::{Deserialize, Serialize};

/// The four values scraped from one occurrence page. Any subset may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
	pub latitude: Option<String>,
	pub longitude: Option<String>,
	pub collection_date: Option<String>,
	pub collector_name: Option<String>,
}

impl ExtractedRecord {
	pub fn is_empty(&self) -> bool {
		self.latitude.is_none() && self.longitude.is_none() && self.collection_date.is_none() && self.collector_name.is_none()
	}

	pub fn coordinates(&self) -> Option<Coordinates> {
		Coordinates::parse(self.latitude.as_deref()?, self.longitude.as_deref()?)
	}
}

/// A record together with the address of the page it came from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageData {
	pub url: String,
	pub data: ExtractedRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
	pub latitude: f64,
	pub longitude: f64,
}

impl Coordinates {
	/// Both values must parse as finite decimals.
	pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
		let latitude = latitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
		let longitude = longitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
		Some(Self { latitude, longitude })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_with_camel_case_keys_and_nulls() {
		let record = ExtractedRecord { latitude: Some("38.5".to_owned()), collection_date: Some("2019-05-14".to_owned()), ..Default::default() };
		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(json, serde_json::json!({ "latitude": "38.5", "longitude": null, "collectionDate": "2019-05-14", "collectorName": null }));
	}

	#[test]
	fn coordinates_require_both_finite_values() {
		assert_eq!(Coordinates::parse("38.5", " -77.0 "), Some(Coordinates { latitude: 38.5, longitude: -77.0 }));
		assert_eq!(Coordinates::parse("38.5", ""), None);
		assert_eq!(Coordinates::parse("NaN", "-77.0"), None);
		assert_eq!(Coordinates::parse("inf", "-77.0"), None);
		assert_eq!(Coordinates::parse("north", "-77.0"), None);
	}

	#[test]
	fn record_coordinates_need_both_fields() {
		let only_latitude = ExtractedRecord { latitude: Some("38.5".to_owned()), ..Default::default() };
		assert!(only_latitude.coordinates().is_none());
		assert!(!only_latitude.is_empty());
		assert!(ExtractedRecord::default().is_empty());
	}
}
