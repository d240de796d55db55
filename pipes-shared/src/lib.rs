pub mod models;
pub mod money;

pub use models::order_request::{Feature, OrderRequest};
pub use money::{format_fixed, format_pounds, round_half_up, CURRENCY_SYMBOL};
