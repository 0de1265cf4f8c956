use crate::action::Action;

use super::State;

pub fn reduce(mut state: State, action: &Action) -> State {
    match action {
        Action::CategoriesSet(categories) => {
            state.categories = categories.iter().cloned().collect();
        }
        Action::PostsSet(posts) => {
            state.posts = posts.iter().filter(|post| !post.deleted).cloned().collect();
        }
        Action::PostAdded(post) => {
            if post.deleted {
                log::debug!("Ignoring added post {} which is already deleted", post.id);
                return state;
            }
            // the server answer wins over whatever we already hold
            match state.position(&post.id) {
                Some(index) => {
                    state.posts.set(index, post.clone());
                }
                None => state.posts.push_back(post.clone()),
            }
        }
        Action::PostUpdated(post) => {
            let Some(index) = state.position(&post.id) else {
                return state;
            };
            if post.deleted {
                state.posts.remove(index);
            } else {
                state.posts.set(index, post.clone());
            }
        }
        // A bulk load of comments is the truth for the count of that post
        Action::CommentsSet { post_id, comments } => {
            if let Some(post) = state.post_mut(post_id) {
                post.comment_count = comments.len() as i64;
            }
        }
        Action::CommentAdded(comment) => update_comment_count(&mut state, &comment.parent_id, 1),
        Action::CommentDeleted(comment) => {
            update_comment_count(&mut state, &comment.parent_id, -1)
        }
        Action::CommentUpdated(_) | Action::OperationFailed { .. } => {}
    }
    state
}

/// Not clamped: concurrent deletes from other clients can push this below
/// the real number, until the next `CommentsSet` for the post.
fn update_comment_count(state: &mut State, post_id: &str, delta: i64) {
    if let Some(post) = state.post_mut(post_id) {
        post.comment_count += delta;
    }
}
