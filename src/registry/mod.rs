pub mod builtin;
pub mod schema;
pub mod types;
pub mod validator;

pub use builtin::*;
pub use schema::*;
pub use types::*;
pub use validator::*;
