use std::sync::Arc;

use crate::action::{Action, Operation};
use crate::environment::types::{Comment, Post, Vote};
use crate::environment::Api;

/// Intent: a request against the remote service which, once resolved,
/// becomes exactly one [`Action`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Intent {
    FetchCategories,
    FetchPosts,
    CreatePost(Post),
    UpdatePost {
        id: String,
        title: String,
        body: String,
    },
    VotePost {
        id: String,
        vote: Vote,
    },
    DeletePost(String),
    FetchComments(String),
    CreateComment(Comment),
    UpdateComment {
        id: String,
        timestamp: i64,
        body: String,
    },
    VoteComment {
        id: String,
        vote: Vote,
    },
    DeleteComment(String),
}

impl Intent {
    /// Only `id`, `title` and `body` of the post are sent
    pub fn update_post(post: &Post) -> Self {
        Intent::UpdatePost {
            id: post.id.clone(),
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }

    /// Only `id`, `timestamp` and `body` of the comment are sent
    pub fn update_comment(comment: &Comment) -> Self {
        Intent::UpdateComment {
            id: comment.id.clone(),
            timestamp: comment.timestamp,
            body: comment.body.clone(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Intent::FetchCategories => Operation::FetchCategories,
            Intent::FetchPosts => Operation::FetchPosts,
            Intent::CreatePost(_) => Operation::CreatePost,
            Intent::UpdatePost { .. } => Operation::UpdatePost,
            Intent::VotePost { .. } => Operation::VotePost,
            Intent::DeletePost(_) => Operation::DeletePost,
            Intent::FetchComments(_) => Operation::FetchComments,
            Intent::CreateComment(_) => Operation::CreateComment,
            Intent::UpdateComment { .. } => Operation::UpdateComment,
            Intent::VoteComment { .. } => Operation::VoteComment,
            Intent::DeleteComment(_) => Operation::DeleteComment,
        }
    }

    /// Run the request. Success yields the fact carrying the server's
    /// response, failure yields [`Action::OperationFailed`].
    pub async fn resolve(self, api: &dyn Api) -> Action {
        let operation = self.operation();
        log::trace!("{operation}");
        let result = match self {
            Intent::FetchCategories => api.categories().await.map(Action::CategoriesSet),
            Intent::FetchPosts => api.posts().await.map(Action::PostsSet),
            Intent::CreatePost(post) => api.add_post(&post).await.map(Action::PostAdded),
            Intent::UpdatePost { id, title, body } => api
                .update_post(&id, &title, &body)
                .await
                .map(Action::PostUpdated),
            Intent::VotePost { id, vote } => api.vote_post(&id, vote).await.map(Action::PostUpdated),
            Intent::DeletePost(id) => api.delete_post(&id).await.map(Action::PostUpdated),
            Intent::FetchComments(post_id) => {
                let comments = api.comments(&post_id).await;
                comments.map(|comments| Action::CommentsSet { post_id, comments })
            }
            Intent::CreateComment(comment) => api
                .add_comment(&comment)
                .await
                .map(Action::CommentAdded),
            Intent::UpdateComment {
                id,
                timestamp,
                body,
            } => api
                .update_comment(&id, timestamp, &body)
                .await
                .map(Action::CommentUpdated),
            Intent::VoteComment { id, vote } => api
                .vote_comment(&id, vote)
                .await
                .map(Action::CommentUpdated),
            Intent::DeleteComment(id) => api.delete_comment(&id).await.map(Action::CommentDeleted),
        };
        result.unwrap_or_else(|e| Action::OperationFailed {
            operation,
            cause: e.to_string(),
        })
    }
}

/// Runs intents on the tokio runtime and delivers the resulting actions to
/// a [`Store`](crate::Store). All methods are fire-and-forget and must be
/// called from within a runtime.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn Api>,
    sender: flume::Sender<Action>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish()
    }
}

impl Dispatcher {
    pub fn new(api: Arc<dyn Api>, sender: flume::Sender<Action>) -> Self {
        Self { api, sender }
    }

    pub fn dispatch(&self, intent: Intent) {
        let api = self.api.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let action = intent.resolve(api.as_ref()).await;
            if sender.send(action).is_err() {
                log::debug!("Store is gone, dropping action");
            }
        });
    }

    pub fn fetch_categories(&self) {
        self.dispatch(Intent::FetchCategories)
    }

    pub fn fetch_posts(&self) {
        self.dispatch(Intent::FetchPosts)
    }

    pub fn create_post(&self, post: Post) {
        self.dispatch(Intent::CreatePost(post))
    }

    pub fn update_post(&self, post: &Post) {
        self.dispatch(Intent::update_post(post))
    }

    pub fn vote_post(&self, id: impl Into<String>, is_up_vote: bool) {
        self.dispatch(Intent::VotePost {
            id: id.into(),
            vote: Vote::new(is_up_vote),
        })
    }

    pub fn delete_post(&self, id: impl Into<String>) {
        self.dispatch(Intent::DeletePost(id.into()))
    }

    pub fn fetch_comments(&self, post_id: impl Into<String>) {
        self.dispatch(Intent::FetchComments(post_id.into()))
    }

    pub fn create_comment(&self, comment: Comment) {
        self.dispatch(Intent::CreateComment(comment))
    }

    pub fn update_comment(&self, comment: &Comment) {
        self.dispatch(Intent::update_comment(comment))
    }

    pub fn vote_comment(&self, id: impl Into<String>, is_up_vote: bool) {
        self.dispatch(Intent::VoteComment {
            id: id.into(),
            vote: Vote::new(is_up_vote),
        })
    }

    pub fn delete_comment(&self, id: impl Into<String>) {
        self.dispatch(Intent::DeleteComment(id.into()))
    }
}
