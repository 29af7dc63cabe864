//! QueryService: read-only access using the safe SQL builder.

mod query;
pub use query::{QueryService, RowReceiver};
