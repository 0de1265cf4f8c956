pub mod comment;
pub mod post;

use crate::action::Action;

/// A slice of the state tree and the pure transition that folds actions
/// into it. Actions a reducer does not care about leave the slice as is.
pub trait Reducer {
    type State: Clone + Default;

    fn reduce(state: Self::State, action: &Action) -> Self::State;
}
