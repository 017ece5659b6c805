//! Search command - print the photos matching a term

use crate::{
    PixrError,
    catalog::{Photo, PhotoCatalogClient},
    search::{PaginationTrigger, SearchController, SearchQuery},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, PixrError>;

/// One result line: id, author, likes, dimensions and description
#[must_use]
pub fn format_photo_line(photo: &Photo) -> String {
    let likes = photo
        .likes
        .map_or_else(|| "-".to_string(), |likes| format!("{likes}♥"));
    let dims = photo.dimensions_label().unwrap_or_else(|| "-".to_string());
    format!(
        "{:<12} {:<24} {:>7} {:>11}  {}",
        photo.id,
        photo.author_name,
        likes,
        dims,
        photo.description_or_default()
    )
}

/// Load up to `pages` pages into `controller`
///
/// Stops early once the cap is reached or the catalog runs out of results.
/// Returns the number of pages merged.
///
/// # Errors
/// Returns the first catalog failure.
pub async fn collect_pages<C>(
    controller: &mut SearchController,
    client: &C,
    pages: u32,
) -> Result<u32>
where
    C: PhotoCatalogClient + ?Sized,
{
    let mut merged = 0;
    while merged < pages {
        if controller.evaluate_near_end(0).is_none_or(|d| d.is_final()) {
            break;
        }
        controller.fetch_next_page(client).await?;
        merged += 1;
    }
    Ok(merged)
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the term is empty, `pages` is zero, or the catalog
/// request fails.
pub async fn execute<C>(
    client: &C,
    query: SearchQuery,
    trigger: PaginationTrigger,
    pages: u32,
    json: bool,
    output: &dyn OutputWriter,
) -> Result<()>
where
    C: PhotoCatalogClient + ?Sized,
{
    if query.term.trim().is_empty() {
        return Err(PixrError::InvalidInput("Search term cannot be empty".into()));
    }
    if pages == 0 {
        return Err(PixrError::InvalidInput("--pages must be at least 1".into()));
    }

    let mut controller = SearchController::new(trigger);
    controller.submit_query(query);
    let loaded = collect_pages(&mut controller, client, pages).await?;

    let photos = controller.photos();
    if json {
        output.write(&serde_json::to_string_pretty(photos)?);
        return Ok(());
    }

    if photos.is_empty() {
        output.warning("No photos found");
        return Ok(());
    }
    for photo in photos {
        output.write(&format_photo_line(photo));
    }

    let total = controller.session().map_or(0, |s| s.total_available());
    output.info(&format!(
        "{} photos from {loaded} page(s), {total} available ({})",
        photos.len(),
        controller.query().filter_summary()
    ));
    Ok(())
}
