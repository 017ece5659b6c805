//! Details command - show the full record of one photo

use crate::{
    PixrError,
    catalog::{PhotoCatalogClient, PhotoDetails},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, PixrError>;

/// Label/value lines for a detail record, skipping unknown fields
#[must_use]
pub fn format_details(details: &PhotoDetails) -> Vec<(&'static str, String)> {
    let photo = &details.photo;
    let mut lines = vec![
        ("ID", photo.id.clone()),
        ("Author", photo.author_name.clone()),
        ("Description", photo.description_or_default().to_string()),
    ];

    let optional = [
        ("Dimensions", photo.dimensions_label()),
        ("Likes", photo.likes.map(|n| n.to_string())),
        ("Color", photo.color.clone()),
        ("Created", photo.created_at.map(|t| t.format("%Y-%m-%d").to_string())),
        ("Downloads", details.downloads.map(|n| n.to_string())),
        ("Views", details.views.map(|n| n.to_string())),
        ("Location", details.location.clone()),
        ("Camera", details.camera.clone()),
        ("Page", details.page_url.clone()),
        ("Image", photo.full_url.clone()),
    ];
    lines.extend(optional.into_iter().filter_map(|(label, value)| value.map(|v| (label, v))));
    lines
}

/// Execute the details command
///
/// # Errors
/// Returns an error if the id is empty or the lookup fails.
pub async fn execute<C>(client: &C, id: &str, json: bool, output: &dyn OutputWriter) -> Result<()>
where
    C: PhotoCatalogClient + ?Sized,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(PixrError::InvalidInput("Photo id cannot be empty".into()));
    }

    let details = client.get_details(id).await?;

    if json {
        output.write(&serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    for (label, value) in format_details(&details) {
        output.write(&format!("{label:<12} {value}"));
    }
    Ok(())
}
