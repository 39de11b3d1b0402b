//! Reading an occurrence record out of GBIF's rendered "term / value" tables.
//!
//! The page is reached through [`OccurrencePage`] so the same lookup runs
//! against the live DOM in the content script and against fixtures in tests.

use {
	crate::{
		AppError,
		poll::{PollOutcome, PollPolicy, poll_until},
		record::{ExtractedRecord, PageData},
	},
	std::{future::Future, time::Duration},
	strum::{EnumIter, IntoEnumIterator, IntoStaticStr},
	tracing::{debug, error, warn},
};

/// Class of the compact tables GBIF renders once the record has loaded.
pub const MARKER_SELECTOR: &str = ".table--compact";

/// Term labels, as they appear in the first cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Field {
	#[strum(serialize = "decimal latitude")]
	Latitude,
	#[strum(serialize = "decimal longitude")]
	Longitude,
	#[strum(serialize = "date identified")]
	CollectionDate,
	#[strum(serialize = "identified by")]
	CollectorName,
}

impl Field {
	pub fn label(self) -> &'static str {
		self.into()
	}
}

/// Raw text content of the cells of one table row, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
	pub cells: Vec<String>,
}

impl TableRow {
	pub fn new<I, S>(cells: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { cells: cells.into_iter().map(Into::into).collect() }
	}

	fn label_matches(&self, label: &str) -> bool {
		self.cells.first().is_some_and(|cell| cell.trim().to_lowercase() == label.to_lowercase())
	}
}

/// A page that may still be rendering.
pub trait OccurrencePage {
	/// Address of the page, copied into the emitted record.
	fn location(&self) -> String;

	/// Whether the marker element is in the document yet.
	fn has_marker(&self) -> bool;

	fn rows(&self) -> Result<Vec<TableRow>, AppError>;
}

/// Trimmed second cell of the first row whose first cell equals `label`,
/// ignoring case and surrounding whitespace.
pub fn find_cell_value(rows: &[TableRow], label: &str) -> Option<String> {
	rows.iter().find(|row| row.label_matches(label)).and_then(|row| row.cells.get(1)).map(|value| value.trim().to_owned())
}

/// Looks every field up independently; a missing label only blanks its own field.
pub fn extract_record(rows: &[TableRow]) -> ExtractedRecord {
	Field::iter().fold(ExtractedRecord::default(), |mut record, field| {
		let value = find_cell_value(rows, field.label());
		match field {
			Field::Latitude => record.latitude = value,
			Field::Longitude => record.longitude = value,
			Field::CollectionDate => record.collection_date = value,
			Field::CollectorName => record.collector_name = value,
		}
		record
	})
}

/// One bounded poll of a page followed by at most one extraction.
pub struct Extractor<P> {
	page: P,
	policy: PollPolicy,
}

impl<P: OccurrencePage> Extractor<P> {
	pub fn new(page: P, policy: PollPolicy) -> Self {
		Self { page, policy }
	}

	/// Resolves to the page's record, or `None` when the marker never showed up
	/// or the table could not be read. Failures are logged here and go no further.
	pub async fn run<S, F>(&self, sleep: S) -> Option<PageData>
	where
		S: FnMut(Duration) -> F,
		F: Future<Output = ()>,
	{
		match poll_until(self.policy, || self.page.has_marker(), sleep).await {
			PollOutcome::Ready { attempts } => debug!(attempts, "occurrence table rendered"),
			PollOutcome::TimedOut { attempts } => {
				debug!(attempts, "occurrence table never rendered, giving up");
				return None;
			},
		}

		match self.page.rows() {
			Ok(rows) => {
				let data = extract_record(&rows);
				if data.is_empty() {
					warn!(rows = rows.len(), "occurrence table rendered without any known label");
				}
				Some(PageData { url: self.page.location(), data })
			},
			Err(e) => {
				error!("Error extracting GBIF data: {e}");
				None
			},
		}
	}
}
