use crate::config::ApiConfig;
use crate::domain::model::ResponseBody;
use crate::utils::error::RequestError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 請求內容
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Text(String),
    /// 表單欄位，以 multipart/form-data 送出
    Multipart(Vec<(String, String)>),
}

/// 呼叫端可覆寫的選項；未指定的部分使用預設值
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            body,
            ..Self::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// 每次呼叫重新建立，不重複使用
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// 後端 API 的通用 client：合併標頭、送出一次請求、依 content type 解析回應
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, RequestError> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: ApiConfig, client: Client) -> Result<Self, RequestError> {
        Url::parse(&config.base_url).map_err(|_| RequestError::InvalidEndpoint {
            endpoint: config.base_url.clone(),
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }

    /// 建立請求描述：預設標頭在前，呼叫端標頭覆寫（名稱不分大小寫）
    pub fn prepare(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<RequestDescriptor, RequestError> {
        if endpoint.trim().is_empty() {
            return Err(RequestError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
            });
        }

        let full_url = format!("{}{}", self.base_url, endpoint);
        let url = Url::parse(&full_url)
            .map_err(|_| RequestError::InvalidEndpoint { endpoint: full_url })?;

        let mut headers = Self::default_headers();
        for (name, value) in &options.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| RequestError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| RequestError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(RequestDescriptor {
            url,
            method: options.method,
            headers,
            body: options.body,
        })
    }

    /// 送出一次請求；失敗時記錄診斷資訊並回傳錯誤，不重試
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody, RequestError> {
        let descriptor = self.prepare(endpoint, options)?;
        let method = descriptor.method.clone();
        let url = descriptor.url.clone();

        tracing::debug!("📡 {} {}", method, url);

        match self.dispatch(descriptor).await {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::error!(
                    "❌ API request {} {} failed ({}): {}",
                    method,
                    url,
                    e.category(),
                    e
                );
                Err(e)
            }
        }
    }

    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, RequestError> {
        let RequestDescriptor {
            url,
            method,
            mut headers,
            body,
        } = descriptor;

        let request = self.client.request(method, url);
        let request = match body {
            RequestBody::Empty => request.headers(headers),
            RequestBody::Json(value) => request.headers(headers).body(serde_json::to_vec(&value)?),
            RequestBody::Text(text) => request.headers(headers).body(text),
            RequestBody::Multipart(fields) => {
                // multipart 的 content-type（含 boundary）由 reqwest 產生
                headers.remove(CONTENT_TYPE);
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value));
                request.headers(headers).multipart(form)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
            .unwrap_or(false);

        let text = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::HttpStatus { status, body: text });
        }

        if is_json {
            Ok(ResponseBody::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }
}
