// 對外的具體實作：靜態網站伺服器

pub mod static_site;

pub use static_site::{router, serve};
