pub mod backup;
pub mod config;
pub mod db;
pub mod day;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod stamp;
