//! Download command - save a photo as `<id>.jpg`

use crate::{
    PixrError,
    catalog::PhotoCatalogClient,
    download::{ImageSize, PhotoDownloader},
    ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, PixrError>;

/// Execute the download command
///
/// Looks the photo up first so the full-size URL is known, then streams it
/// into `dir`.
///
/// # Errors
/// Returns an error if the lookup fails, the photo has no URL, or the file
/// cannot be written.
pub async fn execute<C>(
    client: &C,
    downloader: &PhotoDownloader,
    id: &str,
    dir: &Path,
    size: ImageSize,
    output: &dyn OutputWriter,
) -> Result<()>
where
    C: PhotoCatalogClient + ?Sized,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(PixrError::InvalidInput("Photo id cannot be empty".into()));
    }

    let details = client.get_details(id).await?;
    output.info(&format!("Downloading {} by {}", id, details.photo.author_name));

    let report = downloader.download(&details.photo, size, dir).await?;
    output.success(&format!(
        "Saved {} ({})",
        report.path.display(),
        report.human_size()
    ));
    Ok(())
}
