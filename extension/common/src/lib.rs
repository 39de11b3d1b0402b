//! Platform-independent core of the GBIF occurrence linker: what the content
//! script extracts, what travels between contexts, and what the popup derives
//! from it.

pub mod channel;
pub mod config;
mod error;
pub mod extract;
pub mod links;
pub mod message;
pub mod naming;
pub mod poll;
pub mod record;
pub mod scope;
pub mod services;
pub mod view;

pub use config::Config;
pub use error::AppError;
pub use message::{BackgroundReply, ServiceReply, ToBackground, ToContentScript, ToPopup};
pub use record::{Coordinates, ExtractedRecord, PageData};
pub use scope::is_occurrence_page;
pub use view::{NOT_AVAILABLE, PresenterState, RecordView};
