pub mod adapters;
mod error;
pub mod models;
mod provider;
mod title;

pub use adapters::DoubanProvider;
pub use error::ProviderError;
pub use models::{MetaRecord, MetaSourceInfo};
pub use provider::MetadataProvider;
pub use title::title_tokens;
