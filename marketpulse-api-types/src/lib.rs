pub mod result;
pub mod search;
pub mod stock;
pub mod user;

pub use stock::{Stock, StockWithWatchlistStatus};
pub use user::User;
