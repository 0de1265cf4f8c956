//! Fixtures and an in-memory [`Api`] for tests and local experiments.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Category, Comment, Post, Vote};
use super::Api;

pub fn make_category(name: &str) -> Category {
    Category {
        name: name.to_string(),
        path: name.to_string(),
    }
}

pub fn make_post(id: &str, category: &str) -> Post {
    Post {
        id: id.to_string(),
        timestamp: 1467166872634,
        title: format!("Post {id}"),
        body: "Everyone says so after all.".to_string(),
        author: "thingtwo".to_string(),
        category: category.to_string(),
        vote_score: 1,
        comment_count: 0,
        deleted: false,
    }
}

pub fn make_comment(id: &str, parent_id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        timestamp: 1468166872634,
        body: "Hi there! I am a COMMENT.".to_string(),
        author: "thingone".to_string(),
        vote_score: 1,
        deleted: false,
    }
}

#[derive(Debug, Default)]
struct Data {
    categories: Vec<Category>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    failing: Option<u16>,
    calls: usize,
}

/// Behaves like the readable server: deletes are soft, the comment count
/// of a post follows its comments, unknown ids are a `404`.
#[derive(Debug, Default)]
pub struct MockApi {
    data: Mutex<Data>,
}

impl MockApi {
    pub fn new(categories: Vec<Category>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            data: Mutex::new(Data {
                categories,
                posts,
                comments,
                ..Default::default()
            }),
        }
    }

    /// Every following call fails with the given status until cleared
    pub fn set_failing(&self, status: Option<u16>) {
        self.data().failing = status;
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.data().calls
    }

    /// Change data behind the client's back, as another client would
    pub fn add_comment_elsewhere(&self, comment: Comment) {
        let mut data = self.data();
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == comment.parent_id) {
            post.comment_count += 1;
        }
        data.comments.push(comment);
    }

    fn data(&self) -> MutexGuard<'_, Data> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, call: &'static str) -> Result<MutexGuard<'_, Data>, ApiError> {
        let mut data = self.data();
        data.calls += 1;
        let failing = data.failing;
        if let Some(status) = failing {
            return Err(ApiError::Status { call, status });
        }
        Ok(data)
    }
}

fn not_found(call: &'static str) -> ApiError {
    ApiError::Status { call, status: 404 }
}

fn delta(vote: Vote) -> i64 {
    match vote {
        Vote::UpVote => 1,
        Vote::DownVote => -1,
    }
}

#[async_trait]
impl Api for MockApi {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.begin("categories")?.categories.clone())
    }

    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.begin("posts")?.posts.clone())
    }

    async fn add_post(&self, post: &Post) -> Result<Post, ApiError> {
        let mut data = self.begin("add_post")?;
        data.posts.push(post.clone());
        Ok(post.clone())
    }

    async fn update_post(&self, id: &str, title: &str, body: &str) -> Result<Post, ApiError> {
        let mut data = self.begin("update_post")?;
        let post = data
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("update_post"))?;
        post.title = title.to_string();
        post.body = body.to_string();
        Ok(post.clone())
    }

    async fn vote_post(&self, id: &str, vote: Vote) -> Result<Post, ApiError> {
        let mut data = self.begin("vote_post")?;
        let post = data
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("vote_post"))?;
        post.vote_score += delta(vote);
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> Result<Post, ApiError> {
        let mut data = self.begin("delete_post")?;
        let post = data
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("delete_post"))?;
        post.deleted = true;
        Ok(post.clone())
    }

    async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let data = self.begin("comments")?;
        Ok(data
            .comments
            .iter()
            .filter(|c| c.parent_id == post_id && !c.deleted)
            .cloned()
            .collect())
    }

    async fn add_comment(&self, comment: &Comment) -> Result<Comment, ApiError> {
        let mut data = self.begin("add_comment")?;
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == comment.parent_id) {
            post.comment_count += 1;
        }
        data.comments.push(comment.clone());
        Ok(comment.clone())
    }

    async fn update_comment(
        &self,
        id: &str,
        timestamp: i64,
        body: &str,
    ) -> Result<Comment, ApiError> {
        let mut data = self.begin("update_comment")?;
        let comment = data
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("update_comment"))?;
        comment.timestamp = timestamp;
        comment.body = body.to_string();
        Ok(comment.clone())
    }

    async fn vote_comment(&self, id: &str, vote: Vote) -> Result<Comment, ApiError> {
        let mut data = self.begin("vote_comment")?;
        let comment = data
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("vote_comment"))?;
        comment.vote_score += delta(vote);
        Ok(comment.clone())
    }

    async fn delete_comment(&self, id: &str) -> Result<Comment, ApiError> {
        let mut data = self.begin("delete_comment")?;
        let comment = data
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("delete_comment"))?;
        comment.deleted = true;
        let deleted = comment.clone();
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == deleted.parent_id) {
            post.comment_count -= 1;
        }
        Ok(deleted)
    }
}
