//! Source-specific provider adapters

mod douban_adapter;

pub use douban_adapter::DoubanProvider;
