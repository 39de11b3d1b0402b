//! Outbound links derived from a record. Nothing here touches the network.

use {
	crate::record::Coordinates,
	chrono::{DateTime, NaiveDate},
	percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode},
	url::{ParseError, Url},
};

pub const BIONOMIA_ROSTER_URL: &str = "https://bionomia.net/roster";
pub const WORLDVIEW_URL: &str = "https://worldview.earthdata.nasa.gov/";
pub const ARCGIS_VIEWER_URL: &str = "https://www.arcgis.com/apps/mapviewer/index.html";

/// Degrees added on each side of the point for the imagery bounding box.
pub const WORLDVIEW_PADDING_DEGREES: f64 = 2.0;
pub const WORLDVIEW_LAYERS: [&str; 6] = [
	"MODIS_Terra_CorrectedReflectance_TrueColor",
	"MODIS_Aqua_CorrectedReflectance_TrueColor",
	"VIIRS_SNPP_CorrectedReflectance_TrueColor",
	"Coastlines_15m",
	"Reference_Features_15m",
	"Reference_Labels_15m",
];
pub const WORLDVIEW_TIME: &str = "2024-11-01-T00:00:00Z";
pub const ARCGIS_ZOOM_LEVEL: u8 = 14;

/// Everything `encodeURIComponent` leaves alone stays unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'!').remove(b'~').remove(b'*').remove(b'\'').remove(b'(').remove(b')');

/// Roster search for a formatted collector name; `None` for a blank name.
pub fn bionomia_roster_url(formatted_name: &str) -> Option<String> {
	let name = formatted_name.trim();
	if name.is_empty() {
		return None;
	}
	Some(format!("{BIONOMIA_ROSTER_URL}?q={}", utf8_percent_encode(name, URI_COMPONENT)))
}

/// Satellite imagery around the point, with the fixed overlay set.
pub fn worldview_url(coordinates: Coordinates) -> Result<Url, ParseError> {
	let Coordinates { latitude, longitude } = coordinates;
	let pad = WORLDVIEW_PADDING_DEGREES;
	let bbox = [longitude - pad, latitude - pad, longitude + pad, latitude + pad].map(coordinate_text).join(",");
	let layers = WORLDVIEW_LAYERS.join(",");
	Url::parse_with_params(WORLDVIEW_URL, [("v", bbox.as_str()), ("l", layers.as_str()), ("lg", "true"), ("t", WORLDVIEW_TIME)])
}

/// ArcGIS map viewer centered on the point, scoped to `date` when known.
pub fn arcgis_viewer_url(coordinates: Coordinates, date: Option<NaiveDate>) -> Result<Url, ParseError> {
	let center = format!("{},{}", coordinate_text(coordinates.longitude), coordinate_text(coordinates.latitude));
	let level = ARCGIS_ZOOM_LEVEL.to_string();
	let time = date.map(|date| date.format("%Y-%m-%d").to_string());
	let params = [("center", Some(center.as_str())), ("level", Some(level.as_str())), ("time", time.as_deref())];
	Url::parse_with_params(ARCGIS_VIEWER_URL, params.into_iter().filter_map(|(key, value)| Some((key, value?))))
}

/// Reads the calendar date out of a page-supplied date string. Accepts plain
/// dates, RFC 3339 timestamps and GBIF's zone-less `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
	let raw = raw.trim();
	NaiveDate::parse_from_str(raw, "%Y-%m-%d")
		.ok()
		.or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
		.or_else(|| raw.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()))
}

/// Rounded to six decimals and always printed with a fractional part (`-79.0`).
fn coordinate_text(value: f64) -> String {
	let rounded = (value * 1e6).round() / 1e6;
	let rounded = if rounded == 0.0 { 0.0 } else { rounded };
	format!("{rounded:?}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query_value(url: &Url, key: &str) -> Option<String> {
		url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
	}

	#[test]
	fn roster_url_percent_encodes_the_name() {
		assert_eq!(bionomia_roster_url("John Smith").as_deref(), Some("https://bionomia.net/roster?q=John%20Smith"));
		assert_eq!(bionomia_roster_url("Émile O'Neil").as_deref(), Some("https://bionomia.net/roster?q=%C3%89mile%20O'Neil"));
		assert_eq!(bionomia_roster_url("A&B=C").as_deref(), Some("https://bionomia.net/roster?q=A%26B%3DC"));
	}

	#[test]
	fn no_roster_url_for_blank_name() {
		assert_eq!(bionomia_roster_url(""), None);
		assert_eq!(bionomia_roster_url("  "), None);
	}

	#[test]
	fn worldview_bbox_pads_two_degrees() {
		let url = worldview_url(Coordinates { latitude: 38.5, longitude: -77.0 }).unwrap();
		assert_eq!(query_value(&url, "v").as_deref(), Some("-79.0,36.5,-75.0,40.5"));
		assert_eq!(query_value(&url, "l"), Some(WORLDVIEW_LAYERS.join(",")));
		assert_eq!(query_value(&url, "lg").as_deref(), Some("true"));
		assert_eq!(query_value(&url, "t").as_deref(), Some(WORLDVIEW_TIME));
		assert_eq!(url.host_str(), Some("worldview.earthdata.nasa.gov"));
	}

	#[test]
	fn worldview_bbox_hides_float_noise() {
		let url = worldview_url(Coordinates { latitude: 38.1, longitude: 2.0 }).unwrap();
		assert_eq!(query_value(&url, "v").as_deref(), Some("0.0,36.1,4.0,40.1"));
	}

	#[test]
	fn arcgis_url_centers_on_longitude_then_latitude() {
		let url = arcgis_viewer_url(Coordinates { latitude: 38.889, longitude: -77.036 }, None).unwrap();
		assert_eq!(query_value(&url, "center").as_deref(), Some("-77.036,38.889"));
		assert_eq!(query_value(&url, "level").as_deref(), Some("14"));
		assert_eq!(query_value(&url, "time"), None);
	}

	#[test]
	fn arcgis_url_carries_the_record_date() {
		let date = parse_record_date("2019-05-14T00:00:00");
		let url = arcgis_viewer_url(Coordinates { latitude: 1.0, longitude: 2.0 }, date).unwrap();
		assert_eq!(query_value(&url, "time").as_deref(), Some("2019-05-14"));
	}

	#[test]
	fn links_build_for_extreme_coordinates() {
		for (latitude, longitude) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0), (1e-9, -1e300)] {
			let coordinates = Coordinates { latitude, longitude };
			assert!(worldview_url(coordinates).is_ok());
			assert!(arcgis_viewer_url(coordinates, NaiveDate::from_ymd_opt(1900, 1, 1)).is_ok());
		}
	}

	#[test]
	fn record_dates() {
		let expected = NaiveDate::from_ymd_opt(2019, 5, 14);
		assert_eq!(parse_record_date("2019-05-14"), expected);
		assert_eq!(parse_record_date(" 2019-05-14T10:30:00+02:00 "), expected);
		assert_eq!(parse_record_date("2019-05-14T10:30:00"), expected);
		assert_eq!(parse_record_date("May 2019"), None);
		assert_eq!(parse_record_date(""), None);
	}
}
