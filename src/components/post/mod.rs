mod draft;
mod reducer;
mod state;

pub use draft::PostDraft;
pub use reducer::reduce;
pub use state::State;

pub struct PostReducer;

use super::Reducer;

impl Reducer for PostReducer {
    type State = state::State;

    fn reduce(state: Self::State, action: &crate::action::Action) -> Self::State {
        reducer::reduce(state, action)
    }
}
