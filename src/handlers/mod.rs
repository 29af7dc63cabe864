//! HTTP handlers for table data and introspection.

pub mod meta;
pub mod table;
pub use meta::*;
pub use table::*;
