//! Flat-directory image storage.
//!
//! Files live directly in one directory under generated names
//! (`<unix-millis>-<random u32><original extension>`). No index is kept:
//! listing scans the directory and filters by extension, so a stray
//! non-image file dropped there by hand is invisible to the listing but
//! still reachable through the static `/uploads/*` path.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Extensions the listing endpoint recognizes as images.
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Upload size ceiling: 5 MiB, enforced while receiving the field.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A freshly stored upload, echoed back to the client.
#[derive(Debug, Serialize)]
pub struct StoredImage {
    pub filename: String,
    pub path: String,
    pub size: u64,
    pub mimetype: String,
}

/// One entry in the directory listing.
#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub filename: String,
    pub path: String,
    pub url: String,
}

/// Metadata for a single stored file.
#[derive(Debug, Serialize)]
pub struct ImageDetails {
    pub filename: String,
    pub path: String,
    pub url: String,
    pub size: u64,
    pub created: DateTime<Utc>,
}

/// Handle to the uploads directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    base_url: String,
}

impl ImageStore {
    /// Create a store rooted at `dir`. The directory itself is created
    /// lazily by [`ImageStore::save`].
    #[must_use]
    pub const fn new(dir: PathBuf, base_url: String) -> Self {
        Self { dir, base_url }
    }

    /// Persist one validated upload under a generated name.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the directory cannot be created or the
    /// file cannot be written.
    pub async fn save(
        &self,
        original_name: &str,
        mimetype: &str,
        data: &[u8],
    ) -> Result<StoredImage, std::io::Error> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let filename = generate_filename(original_name);
        tokio::fs::write(self.dir.join(&filename), data).await?;

        Ok(StoredImage {
            path: format!("/uploads/{filename}"),
            size: data.len() as u64,
            mimetype: mimetype.to_owned(),
            filename,
        })
    }

    /// Scan the directory and return every image file in it.
    ///
    /// A missing directory means nothing was uploaded yet and yields an
    /// empty listing rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the directory cannot be read.
    pub async fn list(&self) -> Result<Vec<ImageSummary>, std::io::Error> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut images = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if is_image_filename(&filename) {
                images.push(ImageSummary {
                    path: format!("/uploads/{filename}"),
                    url: format!("{}/uploads/{filename}", self.base_url),
                    filename,
                });
            }
        }

        images.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(images)
    }

    /// Metadata for one stored file, or `None` if it is not on disk.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` for failures other than the file being
    /// absent.
    pub async fn details(&self, filename: &str) -> Result<Option<ImageDetails>, std::io::Error> {
        let metadata = match tokio::fs::metadata(self.dir.join(filename)).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        // Not every filesystem records a birth time; fall back to mtime
        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Ok(Some(ImageDetails {
            filename: filename.to_owned(),
            path: format!("/uploads/{filename}"),
            url: format!("{}/uploads/{filename}", self.base_url),
            size: metadata.len(),
            created: created.into(),
        }))
    }

    /// Remove one stored file. Returns `false` if it was not on disk.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` for failures other than the file being
    /// absent.
    pub async fn delete(&self, filename: &str) -> Result<bool, std::io::Error> {
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Collision-resistant generated name: current time in millis, a random
/// integer, and the original extension (if any).
fn generate_filename(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let noise: u32 = rand::rng().random();

    match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{millis}-{noise}.{ext}"),
        None => format!("{millis}-{noise}"),
    }
}

/// Whether a directory entry looks like an image, by extension.
fn is_image_filename(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Reject filenames that could escape the uploads directory.
#[must_use]
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = generate_filename("holiday photo.PNG");
        assert!(name.ends_with(".PNG"));
        assert!(name.contains('-'));
    }

    #[test]
    fn test_generated_name_without_extension() {
        let name = generate_filename("raw_upload");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generated_names_differ() {
        let a = generate_filename("a.jpg");
        let b = generate_filename("a.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn test_extension_filter() {
        assert!(is_image_filename("1700000000000-42.jpg"));
        assert!(is_image_filename("photo.JPEG"));
        assert!(is_image_filename("anim.gif"));
        assert!(!is_image_filename("notes.txt"));
        assert!(!is_image_filename("no_extension"));
    }

    #[test]
    fn test_safe_filename() {
        assert!(is_safe_filename("1700000000000-42.png"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("../etc/passwd"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename("a\\b.png"));
    }

    #[tokio::test]
    async fn test_save_list_details_delete_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "shoplab-imagestore-test-{}",
            generate_filename("x.png")
        ));
        let store = ImageStore::new(dir.clone(), "http://localhost:5001".to_string());

        // Empty store lists nothing (directory not created yet)
        assert!(store.list().await.unwrap().is_empty());

        let saved = store.save("pic.png", "image/png", b"not-really-a-png").await.unwrap();
        assert!(saved.filename.ends_with(".png"));
        assert_eq!(saved.size, 16);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].filename, saved.filename);

        let details = store.details(&saved.filename).await.unwrap().unwrap();
        assert_eq!(details.size, 16);

        assert!(store.delete(&saved.filename).await.unwrap());
        assert!(!store.delete(&saved.filename).await.unwrap());
        assert!(store.details(&saved.filename).await.unwrap().is_none());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
