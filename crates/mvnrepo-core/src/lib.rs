pub mod config;
pub mod error;
pub mod logging;

pub mod checksum;
pub mod listing;
pub mod probe;
pub mod strutil;
