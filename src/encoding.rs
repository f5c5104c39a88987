use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, instrument};

use crate::error::{RegistrationError, Result};
use crate::model::{Screenshot, ScreenshotSource};

/// Guess an image MIME type from a file name's extension.
pub fn guess_content_type(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Build a `data:` URL carrying `bytes` as base64.
pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

/// Read the screenshot in full and encode it as a data URL.
#[instrument(skip(screenshot), fields(name = %screenshot.name))]
pub async fn encode_screenshot(screenshot: &Screenshot) -> Result<String> {
    let content_type = screenshot
        .content_type
        .as_deref()
        .unwrap_or_else(|| guess_content_type(&screenshot.name));

    let url = match &screenshot.source {
        ScreenshotSource::Bytes(bytes) => to_data_url(content_type, bytes),
        ScreenshotSource::Path(path) => {
            let bytes =
                tokio::fs::read(path)
                    .await
                    .map_err(|e| RegistrationError::Screenshot {
                        name: screenshot.name.clone(),
                        source: e,
                    })?;
            to_data_url(content_type, &bytes)
        }
    };

    debug!(content_type, encoded_len = url.len(), "encoded screenshot");
    Ok(url)
}
