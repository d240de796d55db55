pub mod models;
pub mod basket;

pub use models::{AcceptedOrder, BasketSummary, SummaryLine};
pub use basket::{Basket, BasketError};
