pub mod csv;
pub mod error;
pub mod files;
pub mod parser;
pub mod record;
pub mod serializer;

pub use error::PersistenceError;
pub use files::{atomic_write, read_file, touch_files};
pub use parser::parse_into;
pub use record::Record;
pub use serializer::serialize;
