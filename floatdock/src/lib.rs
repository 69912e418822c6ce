pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod ui;
