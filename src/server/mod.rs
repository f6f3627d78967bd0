pub mod page;
pub mod routes;

use crate::{
    config::Config,
    error::{NatureError, Result},
    studio::{Downloader, NatureStudio},
};
use actix_web::{web, App, HttpServer};
use std::sync::{Mutex, MutexGuard};

/// Shared state for the web front end: one studio for the page session and
/// the downloader used by the download route.
pub struct AppState {
    studio: Mutex<NatureStudio>,
    downloader: Downloader,
}

impl AppState {
    pub fn new(studio: NatureStudio, downloader: Downloader) -> Self {
        Self {
            studio: Mutex::new(studio),
            downloader,
        }
    }

    pub fn studio(&self) -> MutexGuard<'_, NatureStudio> {
        // A panic mid-request cannot leave a half-written record, so poisoning is ignored.
        self.studio
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }
}

pub async fn run(config: Config, studio: NatureStudio) -> Result<()> {
    config.validate()?;
    let state = web::Data::new(AppState::new(studio, Downloader::default()));
    let address = (config.host.clone(), config.port_or_default());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(address)
    .map_err(|e| NatureError::ServerError(format!("Failed to bind: {}", e)))?
    .run()
    .await
    .map_err(|e| NatureError::ServerError(e.to_string()))
}
