//! The post list screen: observable state, its reducer, the view model
//! that fills it, and the view that draws it.

mod card;
mod intent;
mod reducer;
mod state;
mod view;
mod view_model;

pub use card::{wrap_words, PostCard};
pub use intent::PostListIntent;
pub use reducer::PostListReducer;
pub use state::PostListState;
pub use view::{PostListView, HEADING};
pub use view_model::PostListViewModel;
