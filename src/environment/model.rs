use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::types::{
    CategoriesEnvelope, Category, Comment, CommentUpdateBody, Post, PostUpdateBody, Vote,
    VoteBody,
};
use super::Api;

/// `reqwest` implementation of [`Api`] against the readable REST server.
#[derive(Clone)]
pub struct Model {
    pub url: Url,
    client: reqwest::Client,
    token: String,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url.as_str()).finish()
    }
}

impl Model {
    pub fn new(url: &str, token: String) -> Result<Self, String> {
        let mut url = Url::parse(url).map_err(|e| format!("Invalid server url {url}: {e:?}"))?;
        // `join` replaces the last segment unless the base ends in a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            url,
            client: reqwest::Client::new(),
            token,
        })
    }

    fn request(
        &self,
        call: &'static str,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self
            .url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl { call, source })?;
        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.token.as_str()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        call: &'static str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Transport { call, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                call,
                status: status.as_u16(),
            });
        }
        let data = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { call, source })?;
        serde_json::from_slice(&data).map_err(|source| ApiError::Decode { call, source })
    }

    async fn get<T: DeserializeOwned>(&self, call: &'static str, path: &str) -> Result<T, ApiError> {
        let builder = self.request(call, Method::GET, path)?;
        self.send(call, builder).await.logged()
    }
}

#[async_trait]
impl Api for Model {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        log::trace!("Categories");
        // the only endpoint that wraps its list in an object
        let envelope: CategoriesEnvelope = self.get("categories", "categories").await?;
        Ok(envelope.categories)
    }

    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        log::trace!("Posts");
        self.get("posts", "posts").await
    }

    async fn add_post(&self, post: &Post) -> Result<Post, ApiError> {
        log::trace!("Add Post {}", post.id);
        let builder = self.request("add_post", Method::POST, "posts")?.json(post);
        self.send("add_post", builder).await.logged()
    }

    async fn update_post(&self, id: &str, title: &str, body: &str) -> Result<Post, ApiError> {
        log::trace!("Update Post {id}");
        let builder = self
            .request("update_post", Method::PUT, &format!("posts/{id}"))?
            .json(&PostUpdateBody { title, body });
        self.send("update_post", builder).await.logged()
    }

    async fn vote_post(&self, id: &str, vote: Vote) -> Result<Post, ApiError> {
        log::trace!("Vote Post {id} {vote:?}");
        let builder = self
            .request("vote_post", Method::POST, &format!("posts/{id}"))?
            .json(&VoteBody {
                option: vote.option(),
            });
        self.send("vote_post", builder).await.logged()
    }

    async fn delete_post(&self, id: &str) -> Result<Post, ApiError> {
        log::trace!("Delete Post {id}");
        let builder = self.request("delete_post", Method::DELETE, &format!("posts/{id}"))?;
        self.send("delete_post", builder).await.logged()
    }

    async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        log::trace!("Comments for {post_id}");
        self.get("comments", &format!("posts/{post_id}/comments"))
            .await
    }

    async fn add_comment(&self, comment: &Comment) -> Result<Comment, ApiError> {
        log::trace!("Add Comment {}", comment.id);
        let builder = self
            .request("add_comment", Method::POST, "comments")?
            .json(comment);
        self.send("add_comment", builder).await.logged()
    }

    async fn update_comment(
        &self,
        id: &str,
        timestamp: i64,
        body: &str,
    ) -> Result<Comment, ApiError> {
        log::trace!("Update Comment {id}");
        let builder = self
            .request("update_comment", Method::PUT, &format!("comments/{id}"))?
            .json(&CommentUpdateBody { timestamp, body });
        self.send("update_comment", builder).await.logged()
    }

    async fn vote_comment(&self, id: &str, vote: Vote) -> Result<Comment, ApiError> {
        log::trace!("Vote Comment {id} {vote:?}");
        let builder = self
            .request("vote_comment", Method::POST, &format!("comments/{id}"))?
            .json(&VoteBody {
                option: vote.option(),
            });
        self.send("vote_comment", builder).await.logged()
    }

    async fn delete_comment(&self, id: &str) -> Result<Comment, ApiError> {
        log::trace!("Delete Comment {id}");
        let builder = self.request("delete_comment", Method::DELETE, &format!("comments/{id}"))?;
        self.send("delete_comment", builder).await.logged()
    }
}

trait ResultExt {
    fn logged(self) -> Self;
}

impl<T> ResultExt for Result<T, ApiError> {
    fn logged(self) -> Self {
        if let Err(ref e) = self {
            log::error!("{e}");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let model = Model::new("http://localhost:3001/api", "token".to_string()).unwrap();
        assert_eq!(model.url.as_str(), "http://localhost:3001/api/");
        assert_eq!(
            model.url.join("posts/abc").unwrap().as_str(),
            "http://localhost:3001/api/posts/abc"
        );
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(Model::new("not a url", "token".to_string()).is_err());
    }
}
