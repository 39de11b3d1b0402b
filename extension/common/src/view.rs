use crate::{
	links::{arcgis_viewer_url, bionomia_roster_url, parse_record_date, worldview_url},
	naming::format_collector_name,
	record::PageData,
	services::LocationContext,
};

pub const NOT_AVAILABLE: &str = "Not available";

/// What the popup shows. It starts empty and only ever moves to `Populated`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PresenterState {
	#[default]
	Empty,
	Populated(RecordView),
}

impl PresenterState {
	/// `None` (no record, or none in time) keeps the popup in its empty state.
	pub fn from_message(page: Option<&PageData>) -> Self {
		page.map_or(Self::Empty, |page| Self::Populated(RecordView::from_page(page)))
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

/// Display strings and links derived from one record. The record itself is
/// never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordView {
	pub source_url: String,
	pub latitude: String,
	pub longitude: String,
	pub collection_date: String,
	pub collector_name: String,
	pub roster_url: Option<String>,
	pub worldview_url: Option<String>,
	pub arcgis_url: Option<String>,
	pub location_context: Option<LocationContext>,
}

impl RecordView {
	pub fn from_page(page: &PageData) -> Self {
		let record = &page.data;
		let formatted_name = record.collector_name.as_deref().map(format_collector_name).unwrap_or_default();
		let coordinates = record.coordinates();
		let date = record.collection_date.as_deref().and_then(parse_record_date);

		Self {
			source_url: page.url.clone(),
			latitude: slot(record.latitude.as_deref()),
			longitude: slot(record.longitude.as_deref()),
			collection_date: slot(record.collection_date.as_deref()),
			collector_name: slot(Some(formatted_name.as_str())),
			roster_url: bionomia_roster_url(&formatted_name),
			worldview_url: coordinates.and_then(|c| worldview_url(c).ok()).map(String::from),
			arcgis_url: coordinates.and_then(|c| arcgis_viewer_url(c, date).ok()).map(String::from),
			location_context: match (&record.collection_date, &record.latitude, &record.longitude) {
				(Some(date), Some(latitude), Some(longitude)) => LocationContext::new(date, latitude, longitude).ok(),
				_ => None,
			},
		}
	}
}

fn slot(value: Option<&str>) -> String {
	value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE).to_owned()
}

#[cfg(test)]
mod tests {
	use {super::*, crate::record::ExtractedRecord};

	fn page(data: ExtractedRecord) -> PageData {
		PageData { url: "https://www.gbif.org/occurrence/42".to_owned(), data }
	}

	fn full_record() -> ExtractedRecord {
		ExtractedRecord {
			latitude: Some("38.5".to_owned()),
			longitude: Some("-77.0".to_owned()),
			collection_date: Some("2019-05-14".to_owned()),
			collector_name: Some("JohnSmith".to_owned()),
		}
	}

	#[test]
	fn no_message_stays_empty() {
		assert!(PresenterState::from_message(None).is_empty());
		assert_eq!(PresenterState::default(), PresenterState::Empty);
	}

	#[test]
	fn empty_record_is_still_populated() {
		let state = PresenterState::from_message(Some(&page(ExtractedRecord::default())));
		let PresenterState::Populated(view) = state else { panic!("expected a populated view") };
		assert_eq!(view.latitude, NOT_AVAILABLE);
		assert_eq!(view.collector_name, NOT_AVAILABLE);
		assert_eq!(view.roster_url, None);
	}

	#[test]
	fn only_latitude_populated() {
		let view = RecordView::from_page(&page(ExtractedRecord { latitude: Some("38.5".to_owned()), ..Default::default() }));
		assert_eq!(view.latitude, "38.5");
		assert_eq!(view.longitude, NOT_AVAILABLE);
		assert_eq!(view.collection_date, NOT_AVAILABLE);
		assert_eq!(view.collector_name, NOT_AVAILABLE);
		assert_eq!(view.worldview_url, None);
		assert_eq!(view.arcgis_url, None);
		assert_eq!(view.location_context, None);
	}

	#[test]
	fn full_record_derives_every_link() {
		let view = RecordView::from_page(&page(full_record()));
		assert_eq!(view.collector_name, "John Smith");
		assert_eq!(view.roster_url.as_deref(), Some("https://bionomia.net/roster?q=John%20Smith"));
		assert!(view.worldview_url.unwrap().contains("v=-79.0%2C36.5%2C-75.0%2C40.5"));
		assert!(view.arcgis_url.unwrap().contains("time=2019-05-14"));
		assert_eq!(view.location_context, LocationContext::new("2019-05-14", "38.5", "-77.0").ok());
		assert_eq!(view.source_url, "https://www.gbif.org/occurrence/42");
	}

	#[test]
	fn blank_values_render_as_fallback() {
		let view = RecordView::from_page(&page(ExtractedRecord { latitude: Some("  ".to_owned()), collector_name: Some(String::new()), ..Default::default() }));
		assert_eq!(view.latitude, NOT_AVAILABLE);
		assert_eq!(view.collector_name, NOT_AVAILABLE);
	}

	#[test]
	fn unparseable_coordinates_skip_map_links() {
		let record = ExtractedRecord { latitude: Some("38.5".to_owned()), longitude: Some("west".to_owned()), ..full_record() };
		let view = RecordView::from_page(&page(record));
		assert_eq!(view.longitude, "west");
		assert_eq!(view.worldview_url, None);
		assert_eq!(view.arcgis_url, None);
	}

	#[test]
	fn deriving_leaves_the_record_untouched() {
		let page = page(full_record());
		let _ = RecordView::from_page(&page);
		assert_eq!(page.data.collector_name.as_deref(), Some("JohnSmith"));
	}
}
