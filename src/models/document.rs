use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    pub name: String,
    pub file_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub title: String,
    pub folder: String,
    pub date: String,
    pub starred: bool,
}
