use strum_macros::Display;

use crate::environment::types::{Category, Comment, Post};

/// Facts: something already happened on the server. Every action reaches
/// every reducer.
#[derive(Clone, PartialEq, Eq)]
pub enum Action {
    CategoriesSet(Vec<Category>),
    PostsSet(Vec<Post>),
    PostAdded(Post),
    /// Also the result of voting on and deleting a post
    PostUpdated(Post),
    CommentsSet {
        post_id: String,
        comments: Vec<Comment>,
    },
    CommentAdded(Comment),
    /// Also the result of voting on a comment
    CommentUpdated(Comment),
    CommentDeleted(Comment),
    OperationFailed {
        operation: Operation,
        cause: String,
    },
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoriesSet(arg0) => f.debug_tuple("CategoriesSet").field(&arg0.len()).finish(),
            Self::PostsSet(arg0) => f.debug_tuple("PostsSet").field(&arg0.len()).finish(),
            Self::PostAdded(arg0) => f.debug_tuple("PostAdded").field(&arg0.id).finish(),
            Self::PostUpdated(arg0) => f
                .debug_tuple("PostUpdated")
                .field(&arg0.id)
                .field(&arg0.deleted)
                .finish(),
            Self::CommentsSet { post_id, comments } => f
                .debug_struct("CommentsSet")
                .field("post_id", post_id)
                .field("comments", &comments.len())
                .finish(),
            Self::CommentAdded(arg0) => f
                .debug_tuple("CommentAdded")
                .field(&arg0.id)
                .field(&arg0.parent_id)
                .finish(),
            Self::CommentUpdated(arg0) => f.debug_tuple("CommentUpdated").field(&arg0.id).finish(),
            Self::CommentDeleted(arg0) => f
                .debug_tuple("CommentDeleted")
                .field(&arg0.id)
                .field(&arg0.parent_id)
                .finish(),
            Self::OperationFailed { operation, cause } => f
                .debug_struct("OperationFailed")
                .field("operation", operation)
                .field("cause", cause)
                .finish(),
        }
    }
}

/// The intent operations, by name
#[derive(Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Operation {
    FetchCategories,
    FetchPosts,
    CreatePost,
    UpdatePost,
    VotePost,
    DeletePost,
    FetchComments,
    CreateComment,
    UpdateComment,
    VoteComment,
    DeleteComment,
}
