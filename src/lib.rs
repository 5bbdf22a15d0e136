pub mod config;
pub mod console;
pub mod error;
pub mod filters;
pub mod preview;
pub mod session;
pub mod stats;
pub mod table;
