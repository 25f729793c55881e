mod client;
mod error;
mod extract;
pub mod models;
mod rating;
mod search;
mod subject;
mod text;

pub use client::DoubanClient;
pub use error::DoubanError;
pub use models::Book;
pub use search::SearchResponse;
pub use subject::parse_subject;

pub type Result<T> = std::result::Result<T, DoubanError>;
