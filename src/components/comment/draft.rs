use chrono::Utc;

use crate::environment::types::Comment;
use crate::intent::Intent;

/// The comment currently being written or edited
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentDraft {
    pub id: Option<String>,
    pub parent_id: String,
    pub body: String,
    pub author: String,
}

impl CommentDraft {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            ..Default::default()
        }
    }

    pub fn edit(comment: &Comment) -> Self {
        Self {
            id: Some(comment.id.clone()),
            parent_id: comment.parent_id.clone(),
            body: comment.body.clone(),
            author: comment.author.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// An edit re-stamps the comment with the current time
    pub fn into_intent(self) -> Intent {
        let timestamp = Utc::now().timestamp_millis();
        match self.id {
            Some(id) => Intent::UpdateComment {
                id,
                timestamp,
                body: self.body,
            },
            None => Intent::CreateComment(Comment {
                id: uuid::Uuid::new_v4().to_string(),
                parent_id: self.parent_id,
                timestamp,
                body: self.body,
                author: self.author,
                vote_score: 1,
                deleted: false,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::mock::make_comment;

    #[test]
    fn new_comment_belongs_to_post() {
        let mut draft = CommentDraft::new("p1");
        draft.body = "Nice".to_string();
        assert!(!draft.is_editing());
        let Intent::CreateComment(comment) = draft.into_intent() else {
            panic!("expected a create intent");
        };
        assert_eq!(comment.parent_id, "p1");
        assert_eq!(comment.body, "Nice");
        assert!(!comment.id.is_empty());
    }

    #[test]
    fn edit_keeps_id_and_restamps() {
        let original = make_comment("c1", "p1");
        let Intent::UpdateComment { id, timestamp, .. } = CommentDraft::edit(&original).into_intent()
        else {
            panic!("expected an update intent");
        };
        assert_eq!(id, "c1");
        assert!(timestamp > original.timestamp);
    }
}
