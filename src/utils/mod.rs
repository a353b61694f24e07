pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;
pub mod tokenize;

pub use formatting::truncate_chars;
