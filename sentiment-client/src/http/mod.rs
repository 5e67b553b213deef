pub mod client;
pub mod request_builder;
pub mod response_converter;

pub use client::SentimentHttpClient;
pub use request_builder::{RequestBuilderImpl, ANALYZE_PATH, HISTORY_PATH};
pub use response_converter::ResponseConverterImpl;
