/// Input state for the "Add New Item" and "Create New Outfit" forms

use std::path::PathBuf;

use super::data::Category;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub photo: Option<PathBuf>,
    pub category: Category,
    /// Set while a photo is being ingested; the Add button is disabled
    pub uploading: bool,
}

/// Snapshot of the form taken when ingestion starts
#[derive(Debug, Clone, PartialEq)]
pub struct PendingItem {
    pub name: String,
    pub category: Category,
    pub photo: PathBuf,
}

impl ItemForm {
    /// Begin a submission. Returns `None` when the name is blank, no
    /// photo is picked, or an upload is already running.
    pub fn begin_submit(&mut self) -> Option<PendingItem> {
        if self.uploading || self.name.trim().is_empty() {
            return None;
        }
        let photo = self.photo.clone()?;

        self.uploading = true;
        Some(PendingItem {
            name: self.name.clone(),
            category: self.category.clone(),
            photo,
        })
    }

    /// Ingestion finished; clear the inputs if the item was added.
    pub fn finish_submit(&mut self, added: bool) {
        self.uploading = false;
        if added {
            self.name.clear();
            self.photo = None;
            self.category = Category::Top;
        }
    }

    pub fn add_label(&self) -> &'static str {
        if self.uploading {
            "Resizing..."
        } else {
            "Add"
        }
    }

    /// File name of the picked photo, for display next to the picker
    pub fn photo_label(&self) -> String {
        self.photo
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "No photo chosen".to_string())
    }
}
