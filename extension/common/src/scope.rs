/// Path fragment shared by every GBIF occurrence record page.
pub const OCCURRENCE_PATH: &str = "gbif.org/occurrence/";

/// Whether `url` is a page both the content script and the popup act on.
pub fn is_occurrence_page(url: &str) -> bool {
	url.contains(OCCURRENCE_PATH)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_occurrence_pages_only() {
		assert!(is_occurrence_page("https://www.gbif.org/occurrence/1234567890"));
		assert!(is_occurrence_page("https://gbif.org/occurrence/search?taxon_key=1"));
		assert!(!is_occurrence_page("https://www.gbif.org/species/2435099"));
		assert!(!is_occurrence_page("chrome://extensions/"));
		assert!(!is_occurrence_page(""));
	}
}
