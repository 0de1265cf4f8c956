use crate::action::Action;

use super::State;

pub fn reduce(mut state: State, action: &Action) -> State {
    match action {
        Action::CommentsSet { post_id, comments } => {
            state
                .comments
                .insert(post_id.clone(), comments.iter().cloned().collect());
            state.loaded.insert(post_id.clone());
        }
        Action::CommentAdded(comment) => match state.comments.get_mut(&comment.parent_id) {
            Some(comments) => comments.push_back(comment.clone()),
            None => {
                state
                    .comments
                    .insert(comment.parent_id.clone(), im::vector![comment.clone()]);
            }
        },
        Action::CommentUpdated(comment) => {
            let Some(comments) = state.comments.get_mut(&comment.parent_id) else {
                return state;
            };
            if let Some(index) = comments.iter().position(|c| c.id == comment.id) {
                comments.set(index, comment.clone());
            }
        }
        Action::CommentDeleted(comment) => {
            let Some(comments) = state.comments.get_mut(&comment.parent_id) else {
                return state;
            };
            if let Some(index) = comments.iter().position(|c| c.id == comment.id) {
                comments.remove(index);
            }
        }
        Action::CategoriesSet(_)
        | Action::PostsSet(_)
        | Action::PostAdded(_)
        | Action::PostUpdated(_)
        | Action::OperationFailed { .. } => {}
    }
    state
}
