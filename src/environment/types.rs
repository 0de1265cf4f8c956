use serde::{Deserialize, Serialize};

// Repository Types

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

// Entity Types

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Category {
    pub name: String,
    pub path: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Time created, epoch milliseconds
    pub timestamp: i64,
    pub title: String,
    pub body: String,
    pub author: String,
    /// Name of one of the categories provided by the server
    pub category: String,
    #[serde(default = "default_vote_score")]
    pub vote_score: i64,
    /// Derived: maintained by the post reducer, see `components::post`
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub parent_id: String,
    pub timestamp: i64,
    pub body: String,
    pub author: String,
    #[serde(default = "default_vote_score")]
    pub vote_score: i64,
    #[serde(default)]
    pub deleted: bool,
}

fn default_vote_score() -> i64 {
    1
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Vote {
    UpVote,
    DownVote,
}

impl Vote {
    pub fn new(is_up_vote: bool) -> Self {
        if is_up_vote {
            Vote::UpVote
        } else {
            Vote::DownVote
        }
    }

    pub fn option(&self) -> &'static str {
        match self {
            Vote::UpVote => "upVote",
            Vote::DownVote => "downVote",
        }
    }
}

// Request bodies

#[derive(Debug, Serialize)]
pub(crate) struct VoteBody {
    pub option: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostUpdateBody<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentUpdateBody<'a> {
    pub timestamp: i64,
    pub body: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    pub categories: Vec<Category>,
}
