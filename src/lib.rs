mod action;
mod app;
mod components;
pub mod environment;
mod intent;
mod view_model;

pub use action::{Action, Operation};
pub use app::run;
pub use components::comment::{CommentDraft, CommentReducer};
pub use components::post::{PostDraft, PostReducer};
pub use components::{comment, post, Reducer};
pub use environment::storage::{AppState, Store};
pub use environment::types::{Category, Comment, Config, Post, Vote};
pub use environment::{Api, ApiError, Environment, Model, Repository};
pub use intent::{Dispatcher, Intent};
pub use view_model::{format_timestamp, PostOrder};
