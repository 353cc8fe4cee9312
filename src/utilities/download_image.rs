use std::io::ErrorKind;
use std::path::Path;

use reqwest::Client;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};

/// Downloads `image_url` to `destination`, overwriting any existing file, and
/// returns the number of bytes written.
///
/// On failure the destination is removed so a stale or partial image never
/// survives under that name.
pub async fn download_image(
    client: &Client,
    image_url: &str,
    destination: &Path,
) -> Result<usize> {
    match write_image(client, image_url, destination).await {
        Ok(size) => Ok(size),
        Err(e) => {
            if let Err(remove_err) = fs::remove_file(destination).await {
                if remove_err.kind() != ErrorKind::NotFound {
                    warn!(
                        path = %destination.display(),
                        error = %remove_err,
                        "Failed to remove image after failed download"
                    );
                }
            }
            Err(e)
        }
    }
}

async fn write_image(client: &Client, image_url: &str, destination: &Path) -> Result<usize> {
    let response = client.get(image_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: image_url.to_string(),
            status,
        });
    }

    let image_bytes = response.bytes().await?;
    fs::write(destination, &image_bytes).await?;
    debug!(image_url, path = %destination.display(), bytes = image_bytes.len(), "Image written");

    Ok(image_bytes.len())
}
