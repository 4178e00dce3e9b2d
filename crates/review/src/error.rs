#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReviewError {
    #[error("Gemini API key not found")]
    #[diagnostic(
        code(review::missing_api_key),
        help("pass --api-key or set GEMINI_API_KEY")
    )]
    MissingApiKey,

    #[error("request to the review service failed: {0}")]
    #[diagnostic(code(review::http))]
    Http(#[from] reqwest::Error),

    #[error("review service returned {status}: {message}")]
    #[diagnostic(code(review::api))]
    Api { status: u16, message: String },

    #[error("failed to decode review response: {0}")]
    #[diagnostic(code(review::decode))]
    Decode(#[from] serde_json::Error),

    #[error("the prompt was blocked by the review service: {reason}")]
    #[diagnostic(code(review::blocked))]
    Blocked { reason: String },

    #[error("the review service returned no text")]
    #[diagnostic(code(review::empty_response))]
    EmptyResponse,
}
