mod draft;
mod reducer;
mod state;

pub use draft::CommentDraft;
pub use reducer::reduce;
pub use state::State;

pub struct CommentReducer;

use super::Reducer;

impl Reducer for CommentReducer {
    type State = state::State;

    fn reduce(state: Self::State, action: &crate::action::Action) -> Self::State {
        reducer::reduce(state, action)
    }
}
