pub mod add;
pub mod backup;
pub mod del;
pub mod emission;
pub mod log;
pub mod quiz;
pub mod rating;
pub mod streak;
pub mod summary;
