use serde::Serialize;

use crate::models::{Document, Folder};

#[derive(Debug, Clone, Serialize)]
pub struct LibraryIndex {
    pub folders: Vec<Folder>,
    pub documents: Vec<Document>,
}

/// Seeded, read-only document library. There is no upload path; the listing
/// mirrors the seeded catalogue.
pub struct LibraryStore {
    folders: Vec<Folder>,
    documents: Vec<Document>,
}

impl Default for LibraryStore {
    fn default() -> Self {
        let folders = vec![
            folder("Mathematics", 12),
            folder("Physics", 8),
            folder("Chemistry", 15),
            folder("English", 6),
        ];
        let documents = vec![
            document("Advanced Calculus Notes.pdf", "Mathematics", "2025-01-12", true),
            document("Newton's Laws Summary.docx", "Physics", "2025-01-10", false),
            document("Organic Chemistry.pdf", "Chemistry", "2025-01-08", true),
            document("Shakespeare Analysis.pdf", "English", "2025-01-05", false),
        ];

        Self { folders, documents }
    }
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> LibraryIndex {
        LibraryIndex {
            folders: self.folders.clone(),
            documents: self.documents.clone(),
        }
    }

    /// Case-insensitive substring match over document titles.
    pub fn search(&self, query: &str) -> Vec<Document> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.documents.clone();
        }

        self.documents
            .iter()
            .filter(|d| d.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

fn folder(name: &str, file_count: usize) -> Folder {
    Folder {
        name: name.to_string(),
        file_count,
    }
}

fn document(title: &str, folder: &str, date: &str, starred: bool) -> Document {
    Document {
        title: title.to_string(),
        folder: folder.to_string(),
        date: date.to_string(),
        starred,
    }
}
