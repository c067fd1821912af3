pub mod header;
pub mod loading;
pub mod modal;
pub mod nav_items;
pub mod search_command;
pub mod user_dropdown;
