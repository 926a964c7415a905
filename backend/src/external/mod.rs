//! External API integrations

pub mod climate;

pub use climate::ClimateArchiveClient;
