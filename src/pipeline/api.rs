// src/pipeline/api.rs
//! Transport-neutral payloads of the "generate PDF" endpoint.

use super::Pipeline;
use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// `{"content": "...", "subject": "biology"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// Informational only; layout does not depend on it.
    #[serde(default)]
    pub subject: Option<String>,
}

/// `{"pdfBase64": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub pdf_base64: String,
}

/// `{"error": "...", "status": 400}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl From<&PipelineError> for ErrorResponse {
    fn from(err: &PipelineError) -> Self {
        Self {
            error: err.to_string(),
            status: err.status(),
        }
    }
}

/// Decodes a request, generates the PDF and encodes the response.
pub fn generate(pipeline: &Pipeline, request: &GenerateRequest) -> Result<GenerateResponse, PipelineError> {
    let content = request
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or(PipelineError::EmptyContent)?;
    if let Some(subject) = &request.subject {
        log::debug!("Generating PDF for subject '{}'", subject);
    }
    let pdf = pipeline.generate(content)?;
    Ok(GenerateResponse {
        pdf_base64: pdf.to_base64(),
    })
}

/// Handles a raw JSON request body. Returns the status code and the JSON
/// response body; failures are reported in the body, never as a panic.
pub fn handle_generate_json(pipeline: &Pipeline, body: &str) -> (u16, String) {
    let result = serde_json::from_str::<GenerateRequest>(body)
        .map_err(PipelineError::from)
        .and_then(|request| generate(pipeline, &request));

    let encoded = match result {
        Ok(response) => serde_json::to_string(&response).map(|json| (200, json)),
        Err(err) => {
            log::warn!("Generate request failed: {}", err);
            serde_json::to_string(&ErrorResponse::from(&err)).map(|json| (err.status(), json))
        }
    };
    encoded.unwrap_or_else(|err| {
        log::error!("Could not encode response: {}", err);
        (500, r#"{"error":"Could not encode response","status":500}"#.to_string())
    })
}
