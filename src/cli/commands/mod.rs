pub mod about;
pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod factors;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod quiz;
pub mod streak;
pub mod summary;
