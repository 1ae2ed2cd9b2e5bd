pub mod bot_filter;
pub mod client_info;
pub mod time;
