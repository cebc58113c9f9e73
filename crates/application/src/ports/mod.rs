//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure and presentation
//! layers implement these ports.

mod location_prompt_port;
mod location_store_port;
mod page_source_port;
mod weather_provider_port;

#[cfg(test)]
pub use location_prompt_port::MockLocationPromptPort;
pub use location_prompt_port::LocationPromptPort;
#[cfg(test)]
pub use location_store_port::MockLocationStorePort;
pub use location_store_port::LocationStorePort;
#[cfg(test)]
pub use page_source_port::MockPageSourcePort;
pub use page_source_port::PageSourcePort;
#[cfg(test)]
pub use weather_provider_port::MockWeatherProviderPort;
pub use weather_provider_port::WeatherProviderPort;
