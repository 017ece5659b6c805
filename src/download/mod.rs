//! Saving photos to local storage
//!
//! The search core only hands out URLs; this module turns a [`Photo`] into a
//! file named `<id>.jpg` in the target directory. Bytes are streamed into a
//! `.part` file that is renamed once the body is complete, so an interrupted
//! download never leaves a truncated `<id>.jpg` behind.

mod error;

pub use error::DownloadError;

use crate::catalog::Photo;
use byte_unit::{Byte, UnitType};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Which rendition of a photo to save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Full,
    Thumbnail,
}

/// URL to download for `photo`
///
/// `Full` falls back to the thumbnail when the record has no full URL.
///
/// # Errors
///
/// Returns `DownloadError::MissingUrl` when no usable URL is present.
pub fn source_url(photo: &Photo, size: ImageSize) -> Result<&str, DownloadError> {
    let url = match size {
        ImageSize::Full => photo
            .full_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(photo.thumbnail_url.as_str()),
        ImageSize::Thumbnail => photo.thumbnail_url.as_str(),
    };

    if url.is_empty() {
        return Err(DownloadError::MissingUrl(photo.id.clone()));
    }
    Ok(url)
}

/// Target path for `photo_id` inside `dir`
///
/// Anything but ASCII letters, digits, `-` and `_` is replaced with `_`, so
/// the file always lands directly in `dir`.
///
/// # Errors
///
/// Returns `DownloadError::InvalidId` when the id has no letter or digit.
pub fn destination(dir: &Path, photo_id: &str) -> Result<PathBuf, DownloadError> {
    let name: String = photo_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(DownloadError::InvalidId(photo_id.to_string()));
    }
    Ok(dir.join(format!("{name}.jpg")))
}

/// What a finished download produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub photo_id: String,
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

impl DownloadReport {
    /// Size formatted with binary units, e.g. `1.5 MiB`
    #[must_use]
    pub fn human_size(&self) -> String {
        Byte::from_u64(self.bytes)
            .get_appropriate_unit(UnitType::Binary)
            .to_string()
    }
}

/// Streams photo bytes to disk
#[derive(Debug, Clone)]
pub struct PhotoDownloader {
    http: reqwest::Client,
}

impl PhotoDownloader {
    /// # Errors
    ///
    /// Returns `DownloadError::Http` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, DownloadError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pixr/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Save `photo` into `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Fails when the photo has no URL, the request fails or returns a
    /// non-success status, or the file cannot be written.
    pub async fn download(
        &self,
        photo: &Photo,
        size: ImageSize,
        dir: &Path,
    ) -> Result<DownloadReport, DownloadError> {
        let url = source_url(photo, size)?;
        let path = destination(dir, &photo.id)?;
        fs::create_dir_all(dir).await?;

        let bytes = self.download_url(url, &path).await?;
        info!(photo_id = %photo.id, path = %path.display(), bytes, "photo saved");

        Ok(DownloadReport {
            photo_id: photo.id.clone(),
            url: url.to_string(),
            path,
            bytes,
        })
    }

    /// Stream `url` into `path`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// See [`Self::download`].
    pub async fn download_url(&self, url: &str, path: &Path) -> Result<u64, DownloadError> {
        debug!(url, "downloading");
        let mut response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let partial = path.with_extension("jpg.part");
        let mut file = fs::File::create(&partial).await?;
        let mut written: u64 = 0;

        let streamed = async {
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            file.flush().await?;
            Ok::<(), DownloadError>(())
        }
        .await;

        drop(file);
        if let Err(err) = streamed {
            let _ = fs::remove_file(&partial).await;
            return Err(err);
        }

        fs::rename(&partial, path).await?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nContent-Type: image/jpeg\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/photo.jpg")
    }

    fn downloader() -> PhotoDownloader {
        PhotoDownloader::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_source_url_prefers_full() {
        let photo = Photo::new("p1", "https://img/thumb", "Ada").with_full_url("https://img/full");

        assert_eq!(source_url(&photo, ImageSize::Full).unwrap(), "https://img/full");
        assert_eq!(source_url(&photo, ImageSize::Thumbnail).unwrap(), "https://img/thumb");
    }

    #[test]
    fn test_source_url_falls_back_to_thumbnail() {
        let photo = Photo::new("p1", "https://img/thumb", "Ada");
        assert_eq!(source_url(&photo, ImageSize::Full).unwrap(), "https://img/thumb");
    }

    #[test]
    fn test_source_url_missing() {
        let photo = Photo::new("p1", "", "Ada");
        assert!(matches!(
            source_url(&photo, ImageSize::Full),
            Err(DownloadError::MissingUrl(id)) if id == "p1"
        ));
    }

    #[test]
    fn test_destination_sanitizes_id() {
        let dir = Path::new("/tmp/pics");
        assert_eq!(
            destination(dir, "Dwu85P9SOIk-x_1").unwrap(),
            PathBuf::from("/tmp/pics/Dwu85P9SOIk-x_1.jpg")
        );
        assert_eq!(destination(dir, "a/b").unwrap(), PathBuf::from("/tmp/pics/a_b.jpg"));
    }

    #[test]
    fn test_destination_stays_inside_dir() {
        let dir = Path::new("/tmp/pics");
        for id in ["../../etc/passwd", "..\\evil", "/abs/path", "c:photo", "a\0b"] {
            let path = destination(dir, id).unwrap();
            assert_eq!(path.parent(), Some(dir), "{id}");
        }
        assert_eq!(
            destination(dir, "../../etc/passwd").unwrap(),
            PathBuf::from("/tmp/pics/______etc_passwd.jpg")
        );
    }

    #[test]
    fn test_destination_rejects_ids_without_a_name() {
        let dir = Path::new("/tmp/pics");
        for id in ["", "..", "/", "._-"] {
            assert!(matches!(
                destination(dir, id),
                Err(DownloadError::InvalidId(bad)) if bad == id
            ));
        }
    }

    #[test]
    fn test_human_size() {
        let report = DownloadReport {
            photo_id: "p1".into(),
            url: "u".into(),
            path: PathBuf::from("p1.jpg"),
            bytes: 2048,
        };
        assert!(report.human_size().contains("KiB"));
    }

    #[tokio::test]
    async fn test_download_writes_file() {
        let url = serve_once("200 OK", b"jpegbytes").await;
        let dir = TempDir::new().unwrap();
        let photo = Photo::new("p1", "https://unused", "Ada").with_full_url(url);

        let report = downloader()
            .download(&photo, ImageSize::Full, dir.path())
            .await
            .unwrap();

        assert_eq!(report.bytes, 9);
        assert_eq!(report.path, dir.path().join("p1.jpg"));
        assert_eq!(std::fs::read(&report.path).unwrap(), b"jpegbytes");
        assert!(!dir.path().join("p1.jpg.part").exists());
    }

    #[tokio::test]
    async fn test_download_error_status() {
        let url = serve_once("404 Not Found", b"").await;
        let dir = TempDir::new().unwrap();
        let photo = Photo::new("p1", url, "Ada");

        let err = downloader()
            .download(&photo, ImageSize::Thumbnail, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Status { status: 404, .. }));
        assert!(!dir.path().join("p1.jpg").exists());
    }
}
