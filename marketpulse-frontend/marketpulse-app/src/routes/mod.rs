pub mod home_page;
pub mod not_found;
pub mod search_page;
pub mod stock_details;
pub mod watchlist;
