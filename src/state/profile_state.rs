//! Worker profile state.
//!
//! Holds what the profile page shows about the signed-in worker, including
//! the photo most recently handed off by the upload dialog.

use workhub::FileHandle;

/// Maximum number of past uploads kept for the history list.
const HISTORY_LIMIT: usize = 10;

/// State of the worker profile page.
///
/// Responsibilities:
/// - Holding display name and headline
/// - Tracking the current profile photo
/// - Keeping a bounded, newest-first upload history
#[derive(Debug, Clone)]
pub struct ProfileState {
    display_name: String,
    headline: String,
    photo: Option<FileHandle>,
    upload_history: Vec<FileHandle>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Creates the profile shown before any photo is uploaded.
    pub fn new() -> Self {
        Self {
            display_name: "Alex Rivera".to_string(),
            headline: "Licensed electrician · 4.9 ★ · 128 jobs".to_string(),
            photo: None,
            upload_history: Vec::new(),
        }
    }

    // ===== Queries =====

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Returns the current profile photo, if any.
    pub fn photo(&self) -> Option<&FileHandle> {
        self.photo.as_ref()
    }

    /// Returns past uploads, newest first.
    pub fn upload_history(&self) -> &[FileHandle] {
        &self.upload_history
    }

    /// Initials shown in place of a missing photo.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    // ===== Mutations =====

    /// Makes `file` the profile photo and records it in the history.
    pub fn apply_upload(&mut self, file: FileHandle) {
        self.upload_history.insert(0, file.clone());
        self.upload_history.truncate(HISTORY_LIMIT);
        self.photo = Some(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = ProfileState::new();
        assert_eq!(profile.initials(), "AR");
    }

    #[test]
    fn test_apply_upload_replaces_photo() {
        let mut profile = ProfileState::new();
        profile.apply_upload(FileHandle::new("a.png", "image/png"));
        profile.apply_upload(FileHandle::new("b.webp", "image/webp"));

        assert_eq!(profile.photo().map(|f| f.name()), Some("b.webp"));
        let names: Vec<_> = profile.upload_history().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["b.webp", "a.png"]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut profile = ProfileState::new();
        for i in 0..(HISTORY_LIMIT + 5) {
            profile.apply_upload(FileHandle::new(format!("{}.png", i), "image/png"));
        }
        assert_eq!(profile.upload_history().len(), HISTORY_LIMIT);
        assert_eq!(profile.upload_history()[0].name(), format!("{}.png", HISTORY_LIMIT + 4));
    }
}
