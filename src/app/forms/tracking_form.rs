use crate::app::render::render_tracking;
use crate::domain::model::TrackingOutcome;
use crate::domain::page::{Banner, PageState};
use crate::domain::ports::TrackingGateway;

pub const MISSING_CODE_MESSAGE: &str = "Por favor, digite o código de rastreamento.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// 未輸入代碼，沒有送出請求
    MissingCode,
    Completed {
        outcome: TrackingOutcome,
        markup: String,
    },
}

pub struct TrackingWorkflow<G: TrackingGateway> {
    gateway: G,
}

impl<G: TrackingGateway> TrackingWorkflow<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn lookup(&self, code: &str, page: &mut PageState) -> LookupResult {
        let code = code.trim();
        if code.is_empty() {
            page.show_banner(Banner::error(MISSING_CODE_MESSAGE));
            return LookupResult::MissingCode;
        }

        tracing::info!("🔍 Looking up tracking code {}", code);
        let outcome = self.gateway.track(code).await;
        match &outcome {
            TrackingOutcome::Found(record) => {
                tracing::info!("📦 {} found with status '{}'", code, record.status)
            }
            TrackingOutcome::NotFound => tracing::info!("📭 {} not found", code),
            TrackingOutcome::Unavailable { message } => {
                tracing::warn!("⚠️ Tracking lookup for {} failed: {}", code, message)
            }
        }

        let markup = render_tracking(&outcome);
        LookupResult::Completed { outcome, markup }
    }
}
