pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod navigate;
pub mod roster;
pub mod save;
pub mod select;
pub mod show;
pub mod task;
pub mod watch;
