//! Input/output helpers.
//!
//! - line splitting (`split`) and permissive numeric parsing (`parse`)
//! - dataset ingest (`ingest`)
//! - fitted-values CSV export (`export`)
//! - fit summary JSON read/write (`summary`)

pub mod export;
pub mod ingest;
pub mod parse;
pub mod split;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use parse::*;
pub use split::*;
pub use summary::*;
