pub mod config;
pub mod list;
pub mod logging;
pub mod model;
pub mod strings;
pub mod ui;
