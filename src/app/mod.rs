mod quote_actions;
mod quote_request_controller;

pub use quote_actions::{
    SHARE_TITLE, ShareDisposition, build_share_url, copy_current_quote, format_share_text,
    share_current_quote,
};
pub use quote_request_controller::QuoteRequestController;
