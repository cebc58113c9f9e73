//! Adapters implementing application ports on top of integration crates

mod rp5_adapter;

pub use rp5_adapter::Rp5ProviderAdapter;
