use {
	common::{
		AppError,
		extract::{MARKER_SELECTOR, OccurrencePage, TableRow},
	},
	wasm_bindgen::JsCast,
	web_sys::{Document, Element, NodeList},
};

/// The page the content script was injected into.
pub struct LiveDocument {
	document: Document,
}

impl LiveDocument {
	pub fn current() -> Result<Self, AppError> {
		let document = web_sys::window().and_then(|w| w.document()).ok_or_else(|| AppError::PageStructure("no document in this context".to_owned()))?;
		Ok(Self { document })
	}

	pub fn from_document(document: Document) -> Self {
		Self { document }
	}
}

impl OccurrencePage for LiveDocument {
	fn location(&self) -> String {
		self.document.location().and_then(|l| l.href().ok()).unwrap_or_default()
	}

	fn has_marker(&self) -> bool {
		matches!(self.document.query_selector(MARKER_SELECTOR), Ok(Some(_)))
	}

	fn rows(&self) -> Result<Vec<TableRow>, AppError> {
		elements(&self.document.query_selector_all("tr").map_err(js_failure)?)
			.map(|row| -> Result<TableRow, AppError> {
				let cells = row.query_selector_all(":scope > td").map_err(js_failure)?;
				Ok(TableRow { cells: elements(&cells).map(|cell| cell.text_content().unwrap_or_default()).collect() })
			})
			.collect()
	}
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
	(0..list.length()).filter_map(|i| list.item(i)).filter_map(|node| node.dyn_into::<Element>().ok())
}

fn js_failure(err: wasm_bindgen::JsValue) -> AppError {
	AppError::PageStructure(format!("{err:?}"))
}
