pub mod category;
pub mod entry;
pub mod ownership;
pub mod time_field;

pub use category::Category;
pub use entry::{EntryDraft, TourEntry};
pub use ownership::Ownership;
pub use time_field::TimeField;
