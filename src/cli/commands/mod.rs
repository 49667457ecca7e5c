pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod fill;
pub mod init;
pub mod log;
pub mod show;
pub mod slot;
pub mod toggle;
