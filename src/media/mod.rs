//! Media host client
//!
//! Product images are not stored locally: the raw payload from the request
//! is forwarded to an external media host and only the returned descriptor
//! is persisted with the product. The trait seam keeps handlers testable
//! without network access.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};

/// Descriptor returned by the media host for a stored asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Host-assigned asset id
    pub public_id: String,
    /// Canonical HTTPS URL of the stored asset
    pub secure_url: String,
    /// Image format reported by the host, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Accepts an image payload and returns a stored-asset descriptor.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, image: &str) -> Result<MediaAsset>;
}

/// HTTP client for a cloudinary-style upload endpoint.
pub struct HttpMediaHost {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

#[derive(Serialize)]
struct UploadBody<'a> {
    file: &'a str,
    upload_preset: &'a str,
}

impl HttpMediaHost {
    pub fn new(upload_url: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        }
    }
}

#[async_trait]
impl MediaHost for HttpMediaHost {
    async fn upload(&self, image: &str) -> Result<MediaAsset> {
        let response = self
            .client
            .post(&self.upload_url)
            .json(&UploadBody {
                file: image,
                upload_preset: &self.upload_preset,
            })
            .send()
            .await
            .map_err(|e| ApiError::Media(format!("upload request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::Media(format!(
                "media host returned {}",
                response.status()
            )));
        }

        let asset: MediaAsset = response
            .json()
            .await
            .map_err(|e| ApiError::Media(format!("malformed upload response: {}", e)))?;

        debug!("Uploaded asset {}", asset.public_id);
        Ok(asset)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_asset_deserializes_host_response() {
        let asset: MediaAsset = serde_json::from_str(
            r#"{"public_id": "shop/lamp", "secure_url": "https://host/lamp.png", "format": "png", "bytes": 1234}"#,
        )
        .unwrap();

        assert_eq!(asset.public_id, "shop/lamp");
        assert_eq!(asset.format.as_deref(), Some("png"));
    }
}
