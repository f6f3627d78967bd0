pub mod composer;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod studio;

pub use composer::PromptComposer;
pub use config::Config;
pub use error::{NatureError, Result};
pub use models::{DownloadedImage, GeneratedImageRecord, Preset};
pub use studio::{Downloader, GenerationSession, HttpImageFetcher, ImageEndpoint, ImageFetcher, NatureStudio};
