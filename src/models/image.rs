use serde::{Deserialize, Serialize};

/// One entry of the gallery. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImageRecord {
    pub url: String,
    /// The prompt as typed, without the quality suffix.
    pub prompt: String,
    /// Milliseconds since epoch; doubles as id and endpoint seed.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Image bytes fetched for a download, with the file name they should be saved under.
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
