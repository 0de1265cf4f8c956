use std::cmp::Ordering;

use chrono::{Local, TimeZone};
use itertools::Itertools;
use strum_macros::{Display, EnumIter};

use crate::environment::types::Post;

/// Orderings offered for post lists
#[derive(EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum PostOrder {
    #[default]
    #[strum(to_string = "VoteScore (highest first)")]
    VoteScore,
    #[strum(to_string = "Timestamp (highest first)")]
    Timestamp,
    #[strum(to_string = "Category")]
    Category,
}

impl PostOrder {
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            PostOrder::VoteScore => b.vote_score.cmp(&a.vote_score),
            PostOrder::Timestamp => b.timestamp.cmp(&a.timestamp),
            PostOrder::Category => a.category.cmp(&b.category),
        }
    }

    /// Stable: posts comparing equal keep their store order
    pub fn sorted<'a>(&self, posts: impl IntoIterator<Item = &'a Post>) -> Vec<&'a Post> {
        posts
            .into_iter()
            .sorted_by(|a, b| self.compare(a, b))
            .collect()
    }
}

/// Local date of an epoch-milliseconds timestamp, empty if out of range
pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
