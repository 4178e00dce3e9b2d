pub mod client;
pub mod error;
pub mod prompt;


pub use client::{
    ApiKey, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT, GeminiClient, ReviewConfig,
};
pub use error::ReviewError;
pub use prompt::{ReviewRequest, build_prompt};
