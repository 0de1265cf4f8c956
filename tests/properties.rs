//! Properties of the post slice over arbitrary sequences of post events.

use std::collections::HashSet;

use proptest::prelude::*;
use readable::environment::mock::{make_comment, make_post};
use readable::{post, Action, PostReducer, Reducer};

fn post_action() -> impl Strategy<Value = Action> {
    (0..5u8, any::<bool>(), any::<bool>(), -3..10i64).prop_map(|(id, added, deleted, score)| {
        let mut post = make_post(&format!("p{id}"), "react");
        post.deleted = deleted;
        post.vote_score = score;
        if added {
            Action::PostAdded(post)
        } else {
            Action::PostUpdated(post)
        }
    })
}

proptest! {
    #[test]
    fn posts_stay_unique_and_live(actions in prop::collection::vec(post_action(), 0..40)) {
        let mut state = post::State::default();
        for action in &actions {
            state = PostReducer::reduce(state, action);
            let mut seen = HashSet::new();
            for post in state.posts.iter() {
                prop_assert!(!post.deleted);
                prop_assert!(seen.insert(post.id.clone()), "duplicate id {}", post.id);
            }
        }
    }

    #[test]
    fn post_updates_are_idempotent(actions in prop::collection::vec(post_action(), 0..20), last in post_action()) {
        let mut state = post::State::default();
        for action in &actions {
            state = PostReducer::reduce(state, action);
        }
        if let Action::PostUpdated(_) = last {
            let once = PostReducer::reduce(state, &last);
            let twice = PostReducer::reduce(once.clone(), &last);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn add_then_delete_comment_is_neutral(count in -5..50i64) {
        let mut post = make_post("p1", "react");
        post.comment_count = count;
        let state = post::State::new(Vec::new(), vec![post]);
        let comment = make_comment("c1", "p1");
        let state = PostReducer::reduce(state, &Action::CommentAdded(comment.clone()));
        let state = PostReducer::reduce(state, &Action::CommentDeleted(comment));
        prop_assert_eq!(state.posts[0].comment_count, count);
    }
}
