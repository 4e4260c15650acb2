//! Directory listing: table layout and the lister that fills it

pub mod error;
pub mod lister;
pub mod table;

pub use error::ListError;
pub use lister::{DirectoryLister, ListingSummary};
pub use table::Row;
