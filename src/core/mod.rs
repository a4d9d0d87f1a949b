pub mod api;
pub mod client;
pub mod fields;

pub use crate::domain::model::{ContactReply, ResponseBody, StatisticsReply, TrackingOutcome};
pub use crate::domain::ports::{ContactGateway, StatisticsGateway, TrackingGateway};
pub use crate::utils::error::{RequestError, Result};
pub use client::{ApiClient, RequestBody, RequestOptions};
