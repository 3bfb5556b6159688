//! Anthropic analyzer implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use clutch_protocols::{AnalysisRequest, AnalysisResult, ClassifiedError, ContentAnalyzer};

use crate::api::{ApiRequest, ApiResponse};
use crate::classify::{classify_status, classify_transport};
use crate::decoder::decode_result;
use crate::prompt::build_user_prompt;
use crate::retry::with_rate_limit_retry;
use crate::settings::AnalyzerSettings;

/// Prompt used for the credential check.
const VALIDATION_PROMPT: &str = "hi";

/// Analyzer backed by the Anthropic Messages API.
pub struct AnthropicAnalyzer {
    client: reqwest::Client,
    settings: AnalyzerSettings,
}

impl AnthropicAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: AnalyzerSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    fn build_request(&self, request: &AnalysisRequest) -> ApiRequest {
        ApiRequest::single_turn(
            self.settings.model.clone(),
            self.settings.max_tokens,
            Some(self.settings.system_prompt.clone()),
            build_user_prompt(request),
        )
    }

    fn build_validation_request(&self) -> ApiRequest {
        ApiRequest::single_turn(self.settings.model.clone(), 1, None, VALIDATION_PROMPT)
    }

    async fn send(
        &self,
        credential: &str,
        api_request: &ApiRequest,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(&self.settings.api_url)
            .header("x-api-key", credential)
            .header("anthropic-version", &self.settings.api_version)
            .header("content-type", "application/json")
            .json(api_request)
            .send()
            .await
    }

    /// One exchange: send, classify the status, return the model's text.
    async fn exchange(
        &self,
        credential: &str,
        api_request: &ApiRequest,
    ) -> Result<String, ClassifiedError> {
        let response = self
            .send(credential, api_request)
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            // The status decides the kind even when the body cannot be read.
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &body));
        }
        let body = response.text().await.map_err(|e| classify_transport(&e))?;

        let api_response: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifiedError::decode(format!("unexpected response envelope: {}", e)))?;

        debug!(
            id = %api_response.id,
            model = %api_response.model,
            stop_reason = ?api_response.stop_reason,
            output_tokens = api_response.usage.as_ref().map(|u| u.output_tokens),
            "Received model reply"
        );

        let text = api_response.text();
        if text.trim().is_empty() {
            return Err(ClassifiedError::decode("response contained no text"));
        }
        Ok(text)
    }

    /// One exchange bounded by the analysis timeout.
    async fn attempt(
        &self,
        credential: &str,
        api_request: &ApiRequest,
    ) -> Result<String, ClassifiedError> {
        let limit = self.settings.analysis_timeout;
        debug!(
            model = %api_request.model,
            prompt_chars = api_request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            timeout_ms = limit.as_millis() as u64,
            "Sending analysis request"
        );

        match timeout(limit, self.exchange(credential, api_request)).await {
            Ok(result) => result,
            Err(_) => Err(ClassifiedError::timeout(format!(
                "no response within {}",
                describe(limit)
            ))),
        }
    }

    /// Analyze one page.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClassifiedError> {
        let started = Instant::now();
        let api_request = self.build_request(request);
        let credential = request.credential.as_str();
        let body = &api_request;

        let outcome = with_rate_limit_retry(&self.settings.retry, move || {
            self.attempt(credential, body)
        })
        .await
        .and_then(|text| decode_result(&text));

        match &outcome {
            Ok(_) => info!(
                url = %request.source_url,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Analysis complete"
            ),
            Err(e) => warn!(
                url = %request.source_url,
                kind = %e.kind,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Analysis failed: {}",
                e.message
            ),
        }

        outcome
    }

    /// Check a credential with a one-token request.
    ///
    /// 200 and 400 both count as accepted: a 400 here means the key
    /// authenticated and only the minimal payload was refused.
    pub async fn validate_credential(&self, credential: &str) -> Result<bool, ClassifiedError> {
        let api_request = self.build_validation_request();
        let limit = self.settings.validation_timeout;

        match timeout(limit, self.send(credential, &api_request)).await {
            Err(_) => {
                warn!(timeout_ms = limit.as_millis() as u64, "Credential check timed out");
                Err(ClassifiedError::validation_timeout(format!(
                    "credential check got no response within {}",
                    describe(limit)
                )))
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Credential check could not reach the API");
                Ok(false)
            }
            Ok(Ok(response)) => {
                let status = response.status().as_u16();
                let valid = matches!(status, 200 | 400);
                debug!(status, valid, "Credential check answered");
                Ok(valid)
            }
        }
    }
}

fn describe(limit: Duration) -> String {
    if limit.subsec_millis() == 0 {
        format!("{} seconds", limit.as_secs())
    } else {
        format!("{} ms", limit.as_millis())
    }
}

#[async_trait]
impl ContentAnalyzer for AnthropicAnalyzer {
    fn id(&self) -> &str {
        "anthropic"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClassifiedError> {
        AnthropicAnalyzer::analyze(self, request).await
    }

    async fn validate_credential(&self, credential: &str) -> Result<bool, ClassifiedError> {
        AnthropicAnalyzer::validate_credential(self, credential).await
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
