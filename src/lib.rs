pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::forms::{ContactForm, ContactWorkflow, TrackingWorkflow};
pub use config::{ApiConfig, ServerSettings, SiteConfig, TomlConfig};
pub use core::client::ApiClient;
pub use utils::error::{RequestError, Result, SiteError};
