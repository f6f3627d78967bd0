use crate::{
    error::{NatureError, Result},
    models::DownloadedImage,
};
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of image bytes for a URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Clone, Default)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NatureError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NatureError::ResponseError(format!(
                "Image endpoint returned HTTP {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NatureError::ResponseError(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

pub fn download_file_name(timestamp_ms: i64) -> String {
    format!("nature-ai-{}.png", timestamp_ms)
}

/// Fetches gallery images for saving. Failures are logged and swallowed at
/// the `download` boundary.
#[derive(Clone)]
pub struct Downloader {
    fetcher: Arc<dyn ImageFetcher>,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new(Arc::new(HttpImageFetcher::default()))
    }
}

impl Downloader {
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_download(&self, url: &str) -> Result<DownloadedImage> {
        let bytes = self.fetcher.fetch(url).await?;
        Ok(DownloadedImage {
            file_name: download_file_name(chrono::Utc::now().timestamp_millis()),
            bytes,
        })
    }

    /// Best-effort: returns `None` and logs when the fetch fails.
    pub async fn download(&self, url: &str, prompt: &str) -> Option<DownloadedImage> {
        let _timer = crate::logger::timer("image download");
        match self.fetch_download(url).await {
            Ok(image) => {
                log::info!(
                    "⬇️  Downloaded '{}' as {} ({} bytes)",
                    prompt,
                    image.file_name,
                    image.bytes.len()
                );
                Some(image)
            }
            Err(e) => {
                log::error!("Download failed: {}", e);
                None
            }
        }
    }

    /// Best-effort download straight into `dir`. Returns the written path.
    pub async fn download_to_dir(&self, url: &str, prompt: &str, dir: &Path) -> Option<PathBuf> {
        let image = self.download(url, prompt).await?;
        match save_image(&image, dir).await {
            Ok(path) => {
                log::info!("💾 Image saved to: {}", path.display());
                Some(path)
            }
            Err(e) => {
                log::error!("Download failed: {}", e);
                None
            }
        }
    }
}

pub async fn save_image(image: &DownloadedImage, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&image.file_name);
    tokio::fs::write(&path, &image.bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticFetcher {
        bytes: Vec<u8>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.bytes.clone())
        }
    }

    struct FailingFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageFetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(NatureError::RequestError("connection refused".into()))
        }
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(download_file_name(1_700_000_000_000), "nature-ai-1700000000000.png");
    }

    #[tokio::test]
    async fn test_download_returns_named_bytes() {
        let fetcher = Arc::new(StaticFetcher {
            bytes: vec![0x89, b'P', b'N', b'G'],
            calls: AtomicUsize::new(0),
        });
        let downloader = Downloader::new(fetcher.clone());

        let image = downloader
            .download("https://example.test/prompt/lake", "lake")
            .await
            .unwrap();
        assert_eq!(image.bytes, vec![0x89, b'P', b'N', b'G']);
        assert!(image.file_name.starts_with("nature-ai-"));
        assert!(image.file_name.ends_with(".png"));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_download_is_swallowed_without_retry() {
        let fetcher = Arc::new(FailingFetcher {
            calls: AtomicUsize::new(0),
        });
        let downloader = Downloader::new(fetcher.clone());

        assert!(downloader.download("https://example.test/x", "x").await.is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert!(downloader.fetch_download("https://example.test/x").await.is_err());
    }

    #[tokio::test]
    async fn test_failed_download_logs_error() {
        crate::logger::init_for_tests();
        let downloader = Downloader::new(Arc::new(FailingFetcher {
            calls: AtomicUsize::new(0),
        }));

        assert!(downloader.download("https://example.test/z", "z").await.is_none());

        let lines = crate::logger::take_captured();
        assert!(lines.iter().any(|(level, message)| {
            *level == LogLevel::Error
                && message.contains("Download failed")
                && message.contains("connection refused")
        }));
    }

    #[tokio::test]
    async fn test_download_to_dir_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(Arc::new(StaticFetcher {
            bytes: b"image-bytes".to_vec(),
            calls: AtomicUsize::new(0),
        }));

        let path = downloader
            .download_to_dir("https://example.test/y", "y", dir.path())
            .await
            .unwrap();
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"image-bytes");
    }

    #[tokio::test]
    async fn test_http_fetcher_network_error_is_logged_not_raised() {
        // Nothing listens on the discard port.
        let downloader = Downloader::default();
        let dir = tempfile::tempdir().unwrap();

        let saved = downloader
            .download_to_dir("http://127.0.0.1:9/prompt/lake", "lake", dir.path())
            .await;
        assert!(saved.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
