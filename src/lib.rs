pub mod cart;
pub mod config;
pub mod confirm;
pub mod logging;
pub mod notify;
pub mod storage;
pub mod ui;
