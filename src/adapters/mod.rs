// Adapters layer: concrete implementations of the domain ports.

pub mod html;
pub mod http;

pub use html::HtmlDocument;
pub use http::HttpFetcher;
