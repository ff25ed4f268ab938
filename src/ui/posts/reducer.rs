use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostListIntent;
use crate::ui::posts::state::PostListState;

pub struct PostListReducer;

impl Reducer for PostListReducer {
    type State = PostListState;
    type Intent = PostListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostListIntent::FetchSucceeded { posts } => PostListState::Populated { posts },
            // Failures are dropped: whatever was displayed stays displayed.
            PostListIntent::FetchFailed => state,
        }
    }
}
