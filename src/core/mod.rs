pub mod error;
pub mod path;
pub mod value;

pub use error::{Result, StoreError};
pub use path::DocPath;
pub use value::{FieldMap, FieldValue};
