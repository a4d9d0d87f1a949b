use crate::core::client::{ApiClient, RequestBody, RequestOptions};
use crate::domain::model::{
    ContactReply, ResponseBody, StatisticsReply, TrackingOutcome, TrackingResponse,
};
use crate::domain::ports::{ContactGateway, StatisticsGateway, TrackingGateway};
use crate::utils::error::RequestError;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const TRACKING_FAILURE_MESSAGE: &str = "Erro ao consultar rastreamento. Tente novamente.";
pub const CONTACT_FAILURE_MESSAGE: &str = "Erro ao enviar mensagem. Tente novamente.";

pub const CONTACT_ENDPOINT: &str = "/contato";
pub const STATISTICS_ENDPOINT: &str = "/api/estatisticas";

// 路徑片段中需要編碼的字元
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn tracking_endpoint(code: &str) -> String {
    format!(
        "/api/rastrear/{}",
        utf8_percent_encode(code.trim(), PATH_SEGMENT)
    )
}

impl ApiClient {
    /// 查詢貨件；「找不到」與「查詢失敗」回傳不同結果
    pub async fn track(&self, code: &str) -> TrackingOutcome {
        let body = match self.request(&tracking_endpoint(code), RequestOptions::get()).await {
            Ok(body) => body,
            Err(_) => {
                return TrackingOutcome::Unavailable {
                    message: TRACKING_FAILURE_MESSAGE.to_string(),
                }
            }
        };

        match body.into_json::<TrackingResponse>() {
            Some(Ok(TrackingResponse {
                encontrado: true,
                record: Some(record),
                ..
            })) => TrackingOutcome::Found(record),
            Some(Ok(TrackingResponse {
                encontrado: false, ..
            })) => TrackingOutcome::NotFound,
            Some(Ok(_)) => {
                tracing::warn!("⚠️ Tracking response for '{}' is missing record fields", code);
                TrackingOutcome::Unavailable {
                    message: TRACKING_FAILURE_MESSAGE.to_string(),
                }
            }
            Some(Err(e)) => {
                tracing::warn!("⚠️ Unexpected tracking response shape: {}", e);
                TrackingOutcome::Unavailable {
                    message: TRACKING_FAILURE_MESSAGE.to_string(),
                }
            }
            None => {
                tracing::warn!("⚠️ Tracking endpoint answered with a non-JSON body");
                TrackingOutcome::Unavailable {
                    message: TRACKING_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }

    /// 送出聯絡表單（multipart）
    pub async fn send_contact(&self, fields: &[(String, String)]) -> ContactReply {
        let options = RequestOptions::post(RequestBody::Multipart(fields.to_vec()));

        match self.request(CONTACT_ENDPOINT, options).await {
            Ok(ResponseBody::Json(value)) => {
                serde_json::from_value(value).unwrap_or_else(|e| {
                    tracing::warn!("⚠️ Unexpected contact response shape: {}", e);
                    ContactReply::failure(CONTACT_FAILURE_MESSAGE)
                })
            }
            Ok(ResponseBody::Text(_)) => {
                tracing::warn!("⚠️ Contact endpoint answered with a non-JSON body");
                ContactReply::failure(CONTACT_FAILURE_MESSAGE)
            }
            // 後端在 500 時仍會附上訊息
            Err(e) => ContactReply::failure(
                e.server_message()
                    .unwrap_or_else(|| CONTACT_FAILURE_MESSAGE.to_string()),
            ),
        }
    }

    pub async fn statistics(&self) -> StatisticsReply {
        match self.request(STATISTICS_ENDPOINT, RequestOptions::get()).await {
            Ok(body) => match body.into_json::<StatisticsReply>() {
                Some(Ok(reply)) => reply,
                _ => StatisticsReply::unavailable(),
            },
            // 500 回應的內容仍是 {success: false, error}
            Err(RequestError::HttpStatus { body, .. }) => {
                serde_json::from_str(&body).unwrap_or_else(|_| StatisticsReply::unavailable())
            }
            Err(_) => StatisticsReply::unavailable(),
        }
    }
}

#[async_trait]
impl TrackingGateway for ApiClient {
    async fn track(&self, code: &str) -> TrackingOutcome {
        ApiClient::track(self, code).await
    }
}

#[async_trait]
impl ContactGateway for ApiClient {
    async fn send_contact(&self, fields: &[(String, String)]) -> ContactReply {
        ApiClient::send_contact(self, fields).await
    }
}

#[async_trait]
impl StatisticsGateway for ApiClient {
    async fn statistics(&self) -> StatisticsReply {
        ApiClient::statistics(self).await
    }
}
