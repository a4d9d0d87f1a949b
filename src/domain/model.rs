use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// 依回應宣告的 content type 正規化後的內容
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            ResponseBody::Json(_) => None,
        }
    }

    /// 將結構化內容轉成指定型別；純文字回應回傳 None
    pub fn into_json<T: DeserializeOwned>(self) -> Option<serde_json::Result<T>> {
        match self {
            ResponseBody::Json(value) => Some(serde_json::from_value(value)),
            ResponseBody::Text(_) => None,
        }
    }
}

/// 遠端服務回傳的貨件資料（唯讀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub codigo: String,
    pub status: String,
    pub destinatario: String,
    pub cidade_destino: String,
    pub data_criacao: String,
}

/// 查詢結果：「找不到」與「查詢失敗」分開表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingOutcome {
    Found(TrackingRecord),
    NotFound,
    Unavailable { message: String },
}

impl TrackingOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, TrackingOutcome::Found(_))
    }

    pub fn record(&self) -> Option<&TrackingRecord> {
        match self {
            TrackingOutcome::Found(record) => Some(record),
            _ => None,
        }
    }
}

/// `/api/rastrear/{code}` 的回應格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingResponse {
    pub encontrado: bool,
    #[serde(flatten)]
    pub record: Option<TrackingRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

impl From<&TrackingOutcome> for TrackingResponse {
    fn from(outcome: &TrackingOutcome) -> Self {
        match outcome {
            TrackingOutcome::Found(record) => Self {
                encontrado: true,
                record: Some(record.clone()),
                erro: None,
            },
            TrackingOutcome::NotFound => Self {
                encontrado: false,
                record: None,
                erro: None,
            },
            TrackingOutcome::Unavailable { message } => Self {
                encontrado: false,
                record: None,
                erro: Some(message.clone()),
            },
        }
    }
}

// 對外仍輸出舊格式：失敗時為 {"encontrado": false, "erro": "..."}
impl Serialize for TrackingOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TrackingResponse::from(self).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ContactReply {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `/api/estatisticas` 的內容不做結構檢查
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// 後端失敗時（500）附上的錯誤說明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatisticsReply {
    pub fn unavailable() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
        }
    }
}
