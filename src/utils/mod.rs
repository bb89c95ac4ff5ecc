pub mod ansi;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod number;
pub mod path;
pub mod table;
