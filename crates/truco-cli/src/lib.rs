pub mod advise;
pub mod config;
pub mod logging;
