//! Data-browsing core of the Simple_CPU v1 reference: the instruction
//! catalog, the query filter and the view/card state of a reading session.
//!
//! Nothing in this crate draws anything; the `ui` crate renders a
//! [`DocumentBrowser`] and feeds user input back into it.

pub mod browser;
pub mod card;
pub mod catalog;
pub mod data;
mod error;
pub mod format;
pub mod module;
pub mod query;
pub mod record;
pub mod view;

pub use browser::{CardId, DocumentBrowser};
pub use card::{CardState, ExpandableCard};
pub use catalog::InstructionCatalog;
pub use data::ReferenceData;
pub use error::CatalogError;
pub use format::{FormatField, InstructionFormat};
pub use module::{ArchitectureDiagram, DiagramRef, ExternalLink, ModuleDescriptor};
pub use query::{Query, filter};
pub use record::InstructionRecord;
pub use view::{View, ViewSelector};
