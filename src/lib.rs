//! uzip - extract ZIP, RAR, 7z and tar archives with byte-level progress.

pub mod archive;
pub mod config;
pub mod paths;
pub mod progress;
pub mod runner;
