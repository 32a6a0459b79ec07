pub mod config;
pub mod data;
pub mod display;
pub mod export;
pub mod logging;
pub mod notify;
pub mod view;

pub use data::record::{DataType, DataValue, Record};
