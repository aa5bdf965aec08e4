// Pure transforms over a content schedule (filtering, CSV export, clipboard
// text) plus the handlers that expose them over HTTP.

pub mod clipboard;
pub mod csv_export;
pub mod filter;
pub mod handlers;
