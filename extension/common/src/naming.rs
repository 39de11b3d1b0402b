use itertools::Itertools;

/// Turns a scraped "identified by" value into a display name.
///
/// GBIF sometimes serves run-together names (`JohnSmith`, `J.A.Smith`). A
/// space goes before every capital that follows anything but whitespace or
/// another capital, and before the last capital of an upper-case run that
/// continues in lower case (`JOHNSmith` → `JOHN Smith`). Every word is then
/// re-cased as `Xxxx` and joined with single spaces. An all-capital word stays
/// one word. Applying it to its own output changes nothing.
pub fn format_collector_name(name: &str) -> String {
	split_run_together_words(name).split_whitespace().map(capitalize).join(" ")
}

fn split_run_together_words(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut spaced = String::with_capacity(name.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		if c.is_uppercase()
			&& let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p))
		{
			let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			let starts_word = !prev.is_whitespace() && !prev.is_uppercase();
			if starts_word || (prev.is_uppercase() && next_is_lower) {
				spaced.push(' ');
			}
		}
		spaced.push(c);
	}
	spaced
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	chars.next().map(|first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_run_together_names() {
		assert_eq!(format_collector_name("JohnSmith"), "John Smith");
		assert_eq!(format_collector_name("MaryAnnEvans"), "Mary Ann Evans");
	}

	#[test]
	fn recases_spaced_names() {
		assert_eq!(format_collector_name("jane DOE"), "Jane Doe");
		assert_eq!(format_collector_name("  ada   lovelace "), "Ada Lovelace");
		assert_eq!(format_collector_name("ada\tlovelace"), "Ada Lovelace");
	}

	#[test]
	fn acronym_before_a_word_is_split_off() {
		assert_eq!(format_collector_name("JOHNSmith"), "John Smith");
	}

	#[test]
	fn initials_are_separated() {
		assert_eq!(format_collector_name("J.A. Smith"), "J. A. Smith");
		assert_eq!(format_collector_name("J.R.Tolkien"), "J. R. Tolkien");
		assert_eq!(format_collector_name("Smith, J.A."), "Smith, J. A.");
		assert_eq!(format_collector_name("O'Neil"), "O' Neil");
	}

	#[test]
	fn empty_input_formats_to_empty() {
		assert_eq!(format_collector_name(""), "");
		assert_eq!(format_collector_name("   "), "");
	}

	#[test]
	fn non_ascii_letters_are_recased() {
		assert_eq!(format_collector_name("ÉmileDURAND"), "Émile Durand");
	}

	#[test]
	fn formatting_is_idempotent() {
		for raw in ["JohnSmith", "jane DOE", "JOHNSmith", "McDonald", "J.R.Tolkien", "O'Neil, P.", "ABc", "  x  ", "ÉmileDURAND", "Smith J"] {
			let once = format_collector_name(raw);
			assert_eq!(format_collector_name(&once), once, "formatting {raw:?} twice changed it");
		}
	}
}
