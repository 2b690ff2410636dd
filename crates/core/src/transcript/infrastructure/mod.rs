pub mod timed_text_variant;
pub mod watch_page_client;
