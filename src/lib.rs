pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod shutdown;
pub mod ui;
