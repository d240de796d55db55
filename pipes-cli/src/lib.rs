pub mod app_config;
pub mod quote;

pub use app_config::Config;
pub use quote::{quote, render, Quote, Rejection};
