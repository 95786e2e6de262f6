// src/enhance.rs
//! The seam to the language model that enhances worksheet text.
//!
//! The model call itself lives outside this crate. Callers implement
//! [`Enhancer`] around their client and hand it to
//! [`Pipeline::enhance_and_generate`](crate::Pipeline::enhance_and_generate).

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Documents longer than this are cut before they are sent to the model.
pub const MAX_DOCUMENT_CHARS: usize = 6000;

pub const DEFAULT_SUBJECT: &str = "biology";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRequest {
    pub document_text: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl EnhancementRequest {
    pub fn new(document_text: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            document_text: document_text.into(),
            subject: subject.into(),
        }
    }
}

/// Produces enhanced markdown-lite text for a request.
pub trait Enhancer: Send + Sync {
    fn enhance(&self, request: &EnhancementRequest) -> Result<String, PipelineError>;
}

/// Returns the document text unchanged. Useful offline and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEnhancer;

impl Enhancer for PassthroughEnhancer {
    fn enhance(&self, request: &EnhancementRequest) -> Result<String, PipelineError> {
        if request.document_text.trim().is_empty() {
            return Err(PipelineError::Enhancement("No document text provided".into()));
        }
        Ok(request.document_text.clone())
    }
}

/// Cuts `text` to [`MAX_DOCUMENT_CHARS`] characters, marking the cut with
/// `...`.
pub fn truncate_document(text: &str) -> std::borrow::Cow<'_, str> {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        Some((cut, _)) => {
            log::debug!(
                "Document text too long ({} chars), truncating",
                text.chars().count()
            );
            format!("{}...", &text[..cut]).into()
        }
        None => text.into(),
    }
}

/// Builds the instruction prompt for the enhancement model.
pub fn build_prompt(request: &EnhancementRequest) -> String {
    let document = truncate_document(&request.document_text);
    format!(
        "You are an educational content enhancer specializing in climate education for {subject} worksheets.

CRITICAL INSTRUCTIONS - FOLLOW EXACTLY:
1. Start with the EXACT original content provided. Do not remove, replace, or alter any existing text.
2. DIRECTLY integrate climate-related information into the SPECIFIC topics/concepts already present in the document.
3. Insert your climate-related enhancements IMMEDIATELY AFTER relevant sections or paragraphs, each on its own line starting with \"**Climate Enhancement:**\".
4. Maintain all original structure and formatting, including bullet points, numbered lists, headings, and activities.
5. DO NOT create generic climate content. Every addition must relate directly to the specific topics and examples already in the document.
6. DO NOT summarize, paraphrase, or reword the original document. Keep all content verbatim and only add relevant enhancements.

FORMATTING GUIDELINES:
1. Keep original headings exactly as they appear.
2. Use \"- \" for bullet points.
3. For numbered lists, use \"1. \", \"2. \" format.
4. DO NOT use markdown hashtags (# or ## or ###).

ORIGINAL DOCUMENT (DO NOT ALTER, ONLY ADD TO IT):
{document}

Your task is to enhance this SPECIFIC document by incorporating relevant climate connections.
",
        subject = request.subject,
        document = document,
    )
}
