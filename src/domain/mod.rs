pub mod fields;
pub mod list;
pub mod slots;
pub mod task;

pub use fields::{coerce_id, format_timestamp, normalize_key, Fields};
pub use list::List;
pub use slots::{Slots, MAX_ID};
pub use task::Task;
