pub mod category;
pub mod day_summary;
pub mod log_entry;
pub mod rating;
