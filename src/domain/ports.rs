use crate::domain::model::{ContactReply, StatisticsReply, TrackingOutcome};
use async_trait::async_trait;

// 以下介面都不回傳錯誤：失敗已在實作內轉成對應的 fallback 結果

#[async_trait]
pub trait TrackingGateway: Send + Sync {
    async fn track(&self, code: &str) -> TrackingOutcome;
}

#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// `fields` 為表單欄位名稱與值（依表單順序）
    async fn send_contact(&self, fields: &[(String, String)]) -> ContactReply;
}

#[async_trait]
pub trait StatisticsGateway: Send + Sync {
    async fn statistics(&self) -> StatisticsReply;
}
