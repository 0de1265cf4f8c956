use std::sync::Arc;

use itertools::Itertools;

use crate::action::Action;
use crate::components::comment::{self, CommentReducer};
use crate::components::post::{self, PostReducer};
use crate::components::Reducer;
use crate::environment::types::{Category, Comment, Post};
use crate::environment::Api;
use crate::intent::Dispatcher;

/// The complete client state: one slice per reducer
#[derive(Clone, Default, Eq, PartialEq)]
pub struct AppState {
    pub post: post::State,
    pub comment: comment::State,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("categories", &self.post.categories.len())
            .field("posts", &self.post.posts.len())
            .field("comments", &self.comment.comments.len())
            .finish()
    }
}

impl AppState {
    /// Every action goes to both slices; each ignores what it doesn't know
    pub fn reduce(self, action: &Action) -> Self {
        Self {
            post: PostReducer::reduce(self.post, action),
            comment: CommentReducer::reduce(self.comment, action),
        }
    }
}

// Queries

impl AppState {
    pub fn categories(&self) -> &im::Vector<Category> {
        &self.post.categories
    }

    /// New posts go here unless the user picked a category
    pub fn default_category(&self) -> Option<&str> {
        self.post.categories.front().map(|c| c.name.as_str())
    }

    pub fn posts(&self) -> &im::Vector<Post> {
        &self.post.posts
    }

    pub fn posts_in_category(&self, category: &str) -> Vec<&Post> {
        self.post
            .posts
            .iter()
            .filter(|post| post.category == category)
            .collect()
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.post.post(id)
    }

    pub fn comments(&self, post_id: &str) -> Vec<&Comment> {
        self.comment
            .comments(post_id)
            .map(|comments| comments.iter().collect())
            .unwrap_or_default()
    }

    /// Highest score first
    pub fn comments_by_score(&self, post_id: &str) -> Vec<&Comment> {
        self.comments(post_id)
            .into_iter()
            .sorted_by(|a, b| b.vote_score.cmp(&a.vote_score))
            .collect()
    }

    /// The incremental `comment_count` of a post drifts when other clients
    /// add or delete comments. If the complete comment list of the post was
    /// fetched, it is counted instead. Comments seen only through
    /// `CommentAdded` don't count as a complete list.
    pub fn reconciled_comment_count(&self, post_id: &str) -> Option<i64> {
        let post = self.post(post_id)?;
        match self.comment.comments(post_id) {
            Some(comments) if self.comment.is_loaded(post_id) => Some(comments.len() as i64),
            _ => Some(post.comment_count),
        }
    }
}

/// Sole owner of the [`AppState`]. Actions come in through [`Store::dispatch`]
/// or, from intents running on the runtime, through the channel behind
/// [`Store::dispatcher`].
pub struct Store {
    state: AppState,
    sender: flume::Sender<Action>,
    receiver: flume::Receiver<Action>,
    subscribers: Vec<flume::Sender<AppState>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("pending", &self.receiver.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            state,
            sender,
            receiver,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self, api: Arc<dyn Api>) -> Dispatcher {
        Dispatcher::new(api, self.sender.clone())
    }

    /// Apply a single action right away
    pub fn dispatch(&mut self, action: Action) {
        log::trace!("{action:?}");
        if let Action::OperationFailed { operation, cause } = &action {
            log::warn!("{operation} failed: {cause}");
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(&action);
        self.notify();
    }

    /// Wait for the next action delivered by a dispatcher and apply it.
    /// The store holds a sender itself, so this only returns once an action
    /// arrived.
    pub async fn next(&mut self) -> Option<Action> {
        let action = self.receiver.recv_async().await.ok()?;
        self.dispatch(action.clone());
        Some(action)
    }

    /// Apply everything delivered so far without waiting
    pub fn drain(&mut self) -> usize {
        let pending: Vec<Action> = self.receiver.try_iter().collect();
        let count = pending.len();
        for action in pending {
            self.dispatch(action);
        }
        count
    }

    /// Receives a snapshot of the state after every applied action
    pub fn subscribe(&mut self) -> flume::Receiver<AppState> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    fn notify(&mut self) {
        let state = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
    }
}
