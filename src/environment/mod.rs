pub mod error;
#[cfg(any(debug_assertions, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod repository;
pub mod storage;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

pub use error::ApiError;
pub use model::Model;
pub use repository::Repository;

use self::types::{Category, Comment, Post, Vote};

/// The remote service. Every call resolves to the authoritative entity
/// (or list) as returned by the server.
#[async_trait]
pub trait Api: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn add_post(&self, post: &Post) -> Result<Post, ApiError>;
    async fn update_post(&self, id: &str, title: &str, body: &str) -> Result<Post, ApiError>;
    async fn vote_post(&self, id: &str, vote: Vote) -> Result<Post, ApiError>;
    /// Returns the post marked as `deleted`
    async fn delete_post(&self, id: &str) -> Result<Post, ApiError>;
    async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError>;
    async fn add_comment(&self, comment: &Comment) -> Result<Comment, ApiError>;
    async fn update_comment(
        &self,
        id: &str,
        timestamp: i64,
        body: &str,
    ) -> Result<Comment, ApiError>;
    async fn vote_comment(&self, id: &str, vote: Vote) -> Result<Comment, ApiError>;
    /// Returns the comment marked as `deleted`
    async fn delete_comment(&self, id: &str) -> Result<Comment, ApiError>;
}

#[derive(Clone)]
pub struct Environment {
    pub model: Arc<dyn Api>,
    pub repository: Repository,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(model: Arc<dyn Api>, repository: Repository) -> Self {
        Self { model, repository }
    }

    /// Build the `reqwest` backed model from the persisted configuration
    pub fn from_repository(repository: Repository) -> Result<Self, String> {
        let config = repository.config()?;
        let token = repository.token()?;
        let model = Model::new(&config.server_url, token)?;
        Ok(Self::new(Arc::new(model), repository))
    }
}
