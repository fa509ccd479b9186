//! Uploaded resume file model.
//!
//! An [`UploadedFile`] is a single binary artifact together with the media
//! type it declares. The media type is derived from the file extension, the
//! same way a browser file picker labels a selection, and is what the input
//! checks compare against [`PDF_MEDIA_TYPE`].

use crate::domain::error::Result;
use crate::infrastructure::display_name;
use std::path::Path;

/// The only media type accepted for resumes.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Returns the declared media type for a file extension.
///
/// Matching is case-insensitive. Unknown extensions map to
/// `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use resume_analyzer::domain::resume::media_type_for_extension;
///
/// assert_eq!(media_type_for_extension("PDF"), "application/pdf");
/// assert_eq!(media_type_for_extension("txt"), "text/plain");
/// assert_eq!(media_type_for_extension("xyz"), "application/octet-stream");
/// ```
#[must_use]
pub fn media_type_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "pdf" => PDF_MEDIA_TYPE,
        "txt" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// A candidate resume file held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name shown in the form and sent with the upload.
    pub name: String,

    /// Media type the file declares.
    pub media_type: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Creates a file handle from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk and declares its media type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;

        let name = display_name(path);

        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or("application/octet-stream", media_type_for_extension);

        tracing::debug!(
            file_name = %name,
            media_type = media_type,
            size = bytes.len(),
            "file loaded"
        );

        Ok(Self::new(name, media_type, bytes))
    }

    /// Returns `true` if the file declares the PDF media type.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }

    /// Size of the file contents in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
