use serde::{Deserialize, Serialize};

/// A blog post. Posts are compiled in and read-only: the admin panel has
/// no mutation path for them and they are not part of exported snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form, unlike event categories.
    pub category: String,
}
