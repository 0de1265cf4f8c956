use chrono::Utc;

use crate::environment::types::Post;
use crate::intent::Intent;

/// The post currently being written or edited. Lives only until the edit is
/// submitted or cancelled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PostDraft {
    /// `Some` when editing an existing post
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub author: String,
    pub category: Option<String>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            title: post.title.clone(),
            body: post.body.clone(),
            author: post.author.clone(),
            category: Some(post.category.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Editing only changes title and body. A new post without a category
    /// falls back to `default_category`; with neither there is nothing to
    /// submit.
    pub fn into_intent(self, default_category: Option<&str>) -> Option<Intent> {
        if let Some(id) = self.id {
            return Some(Intent::UpdatePost {
                id,
                title: self.title,
                body: self.body,
            });
        }
        let category = self
            .category
            .or_else(|| default_category.map(str::to_string))?;
        Some(Intent::CreatePost(Post {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            title: self.title,
            body: self.body,
            author: self.author,
            category,
            vote_score: 1,
            comment_count: 0,
            deleted: false,
        }))
    }
}
