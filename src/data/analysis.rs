//! AI measurement-point suggestions.
//!
//! The photo is posted to a text-generation endpoint together with a fixed
//! prompt; whatever text comes back is displayed verbatim. The call runs on
//! a spawned worker thread and reports through a one-shot channel polled by
//! the app each frame, so drawing and editing are never blocked. There is no
//! timeout, no cancellation and no retry; any failure is substituted by
//! [`ANALYSIS_FAILED`].

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use base64::Engine as _;
use thiserror::Error;

/// Advisory text shown when the suggestion request fails for any reason.
pub const ANALYSIS_FAILED: &str = "Analysis failed. Add measurement marks manually.";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PHOTODIM_API_KEY";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const PROMPT: &str = "Analyze this product photo. Identify the product and suggest \
typical measurement points (for example: height, width, depth). Be concise and \
list 3-5 key dimensions worth measuring.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("PHOTODIM_API_KEY is not set")]
    MissingApiKey,
    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: no suggestion text")]
    MalformedResponse,
}

/// Fire-and-forget suggestion requests, one worker thread per request.
pub struct Analyzer {
    model: String,
    in_flight: Arc<AtomicBool>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Analyzer {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Start a suggestion request for the photo at `path`.
    ///
    /// Returns a receiver that yields exactly one advisory string (the
    /// suggestion text, or [`ANALYSIS_FAILED`]). Returns `None` if a request
    /// is already in flight.
    pub fn request(&self, path: PathBuf) -> Option<Receiver<String>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return None;
        }
        let (tx, rx) = mpsc::channel();
        let model = self.model.clone();
        let in_flight = self.in_flight.clone();
        thread::spawn(move || {
            let text = match analyze_photo(&model, &path) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!("photo analysis failed: {err}");
                    ANALYSIS_FAILED.to_string()
                }
            };
            let _ = tx.send(text);
            in_flight.store(false, Ordering::SeqCst);
        });
        Some(rx)
    }
}

fn analyze_photo(model: &str, path: &Path) -> Result<String, AnalysisError> {
    let api_key = std::env::var(API_KEY_ENV).map_err(|_| AnalysisError::MissingApiKey)?;
    let bytes = std::fs::read(path)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    let body = serde_json::json!({
        "contents": [{
            "parts": [
                { "inline_data": { "mime_type": mime_for_path(path), "data": encoded } },
                { "text": PROMPT },
            ],
        }],
    });
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key={api_key}"
    );
    let response: serde_json::Value = reqwest::blocking::Client::new()
        .post(&url)
        .json(&body)
        .send()?
        .error_for_status()?
        .json()?;
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or(AnalysisError::MalformedResponse)
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}
