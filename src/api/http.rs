//! Fetch-based gateway
//!
//! Every response must be 2xx with a JSON content type; anything else is a
//! failure, including HTML error pages served with status 200.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, RequestMode, Response};

use super::CandidateGateway;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Candidate, FederalHistoryRecord, StateLeaderRecord, Suggestion, SuggestionRecord};
use crate::roster::CandidatePayload;

const SNIPPET_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("application/json")
}

/// Decode a list body; a JSON value that is not an array yields no rows
pub fn decode_list<T: DeserializeOwned>(body: &str) -> ApiResult<Vec<T>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn decode_one<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

fn fetch_error(err: JsValue, abort: Option<&AbortSignal>) -> ApiError {
    if abort.is_some_and(|signal| signal.aborted()) {
        ApiError::Aborted
    } else {
        js_error(err)
    }
}

async fn read_text(response: &Response, abort: Option<&AbortSignal>) -> ApiResult<String> {
    let value = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(|e| fetch_error(e, abort))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Issue a request and return the JSON body text
async fn send(
    method: &str,
    url: &str,
    body: Option<&str>,
    abort: Option<&AbortSignal>,
) -> ApiResult<String> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    init.set_signal(abort);

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(e, abort))?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .map_err(js_error)?
        .unwrap_or_default();
    let text = read_text(&response, abort).await?;
    if !is_json_content_type(&content_type) {
        return Err(ApiError::UnexpectedContent {
            content_type,
            snippet: snippet(&text),
        });
    }
    Ok(text)
}

fn encode(payload: &CandidatePayload) -> ApiResult<String> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

#[async_trait(?Send)]
impl CandidateGateway for HttpGateway {
    async fn list_candidates(&self) -> ApiResult<Vec<Candidate>> {
        let body = send("GET", &self.config.candidates_url(), None, None).await?;
        decode_list(&body)
    }

    async fn create_candidate(&self, payload: &CandidatePayload) -> ApiResult<Candidate> {
        let json = encode(payload)?;
        let body = send("POST", &self.config.create_candidate_url(), Some(&json), None).await?;
        decode_one(&body)
    }

    async fn update_candidate(&self, id: i64, payload: &CandidatePayload) -> ApiResult<Candidate> {
        let json = encode(payload)?;
        let body = send("PUT", &self.config.update_candidate_url(id), Some(&json), None).await?;
        decode_one(&body)
    }

    async fn search_suggestions(
        &self,
        term: &str,
        abort: Option<&AbortSignal>,
    ) -> ApiResult<Vec<Suggestion>> {
        let body = send("GET", &self.config.suggestions_url(term), None, abort).await?;
        let records: Vec<SuggestionRecord> = decode_list(&body)?;
        Ok(records.into_iter().map(Suggestion::from).collect())
    }

    async fn list_state_leaders(&self) -> ApiResult<Vec<StateLeaderRecord>> {
        let body = send("GET", &self.config.state_leaders_url(), None, None).await?;
        decode_list(&body)
    }

    async fn list_federal_history(&self) -> ApiResult<Vec<FederalHistoryRecord>> {
        let body = send("GET", &self.config.federal_history_url(), None, None).await?;
        decode_list(&body)
    }
}
