//! File descriptors handed to the upload controller.
//!
//! The controller never reads file contents. It only needs a display name and
//! a MIME type to gate on, so both the file picker and drag-and-drop paths are
//! normalized into a [`FileHandle`] before they reach it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// MIME types the upload dialog accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Display-level accept filter matching [`ACCEPTED_MIME_TYPES`].
pub const ACCEPT_FILTER: &str = ".png,.jpg,.jpeg,.webp";

/// Extensions offered by the native file picker.
pub const PICKER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Opaque descriptor of a user-chosen file: name and MIME type, no bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    name: String,
    mime_type: String,
    /// Source location when the file came from the local filesystem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

impl FileHandle {
    /// Creates a handle from a display name and MIME type.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            path: None,
        }
    }

    /// Normalizes a file-picker result.
    ///
    /// The MIME type is inferred from the extension.
    ///
    /// # Errors
    /// Fails when the path has no file name or the name is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .context("selected path has no file name")?
            .to_str()
            .with_context(|| format!("file name of {} is not valid UTF-8", path.display()))?
            .to_owned();

        Ok(Self {
            mime_type: mime_type_for_name(&name).to_owned(),
            name,
            path: Some(path.to_path_buf()),
        })
    }

    /// Normalizes a dropped file.
    ///
    /// Platforms frequently report an empty MIME type for drops, in which case
    /// it is inferred from `name` (or from `path` when the name is empty too).
    pub fn from_dropped(name: &str, mime: &str, path: Option<&Path>) -> Self {
        let name = if name.is_empty() {
            path.and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            name.to_owned()
        };

        let mime_type = if mime.trim().is_empty() {
            mime_type_for_name(&name).to_owned()
        } else {
            mime.trim().to_owned()
        };

        Self {
            name,
            mime_type,
            path: path.map(Path::to_path_buf),
        }
    }

    /// Display name of the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type reported or inferred for the file.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Local path, if the file came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if the MIME type is in the accepted set.
    pub fn is_accepted(&self) -> bool {
        is_accepted_mime(&self.mime_type)
    }
}

/// Returns true if `mime` is one of [`ACCEPTED_MIME_TYPES`].
///
/// Comparison ignores ASCII case and any parameters after `;`.
pub fn is_accepted_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}

/// Infers a MIME type from a file name's extension.
pub fn mime_type_for_name(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_mime_types() {
        assert!(is_accepted_mime("image/png"));
        assert!(is_accepted_mime("image/jpeg"));
        assert!(is_accepted_mime("image/webp"));
        assert!(is_accepted_mime("IMAGE/PNG"));
        assert!(is_accepted_mime("image/jpeg; q=0.9"));

        assert!(!is_accepted_mime("image/gif"));
        assert!(!is_accepted_mime("image/jpg"));
        assert!(!is_accepted_mime(""));
        assert!(!is_accepted_mime("application/octet-stream"));
    }

    #[test]
    fn test_mime_inference_from_extension() {
        assert_eq!(mime_type_for_name("avatar.PNG"), "image/png");
        assert_eq!(mime_type_for_name("photo.jpg"), "image/jpeg");
        assert_eq!(mime_type_for_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for_name("banner.webp"), "image/webp");
        assert_eq!(mime_type_for_name("anim.gif"), "image/gif");
        assert_eq!(mime_type_for_name("README"), "application/octet-stream");
    }

    #[test]
    fn test_from_path() {
        let handle = FileHandle::from_path(Path::new("/tmp/pics/me.webp")).unwrap();
        assert_eq!(handle.name(), "me.webp");
        assert_eq!(handle.mime_type(), "image/webp");
        assert_eq!(handle.path(), Some(Path::new("/tmp/pics/me.webp")));
        assert!(handle.is_accepted());
    }

    #[test]
    fn test_from_path_without_file_name() {
        assert!(FileHandle::from_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_from_dropped_prefers_reported_mime() {
        let handle = FileHandle::from_dropped("scan.bin", "image/png", None);
        assert_eq!(handle.mime_type(), "image/png");
    }

    #[test]
    fn test_from_dropped_infers_missing_mime() {
        let handle = FileHandle::from_dropped("", "", Some(Path::new("/home/u/cat.jpeg")));
        assert_eq!(handle.name(), "cat.jpeg");
        assert_eq!(handle.mime_type(), "image/jpeg");

        let gif = FileHandle::from_dropped("a.gif", "  ", None);
        assert_eq!(gif.mime_type(), "image/gif");
        assert!(!gif.is_accepted());
    }

    #[test]
    fn test_accept_filter_matches_picker_extensions() {
        for ext in PICKER_EXTENSIONS {
            assert!(ACCEPT_FILTER.contains(&format!(".{}", ext)));
            assert!(is_accepted_mime(mime_type_for_name(&format!("x.{}", ext))));
        }
    }
}
