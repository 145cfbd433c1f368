//! Icon image files fetched over HTTP.

use ceamap_core::{IconError, ImageSource};
use gloo_net::http::Request;

use crate::config::ICON_DIR;

/// [`ImageSource`] reading icon files from [`ICON_DIR`] next to the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpImageSource;

impl ImageSource for HttpImageSource {
    async fn load(&self, file: &str) -> Result<Vec<u8>, IconError> {
        let url = format!("{ICON_DIR}/{file}");
        let load_error = |reason: String| IconError::Load {
            file: file.to_string(),
            reason,
        };

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| load_error(e.to_string()))?;

        if !response.ok() {
            return Err(load_error(format!("HTTP {}", response.status())));
        }

        response.binary().await.map_err(|e| load_error(e.to_string()))
    }
}
