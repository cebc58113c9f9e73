//! HTTP page fetching

mod page_source;

pub use page_source::{FetchError, HttpPageSource};
