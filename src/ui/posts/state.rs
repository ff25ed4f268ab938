use crate::model::Post;
use crate::ui::mvi::UiState;

/// Observable state of the post list.
///
/// Moves from `AwaitingFirstResult` to `Populated` on the first successful
/// fetch and never goes back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostListState {
    #[default]
    AwaitingFirstResult,
    Populated {
        posts: Vec<Post>,
    },
}

impl UiState for PostListState {}

impl PostListState {
    pub fn posts(&self) -> &[Post] {
        match self {
            Self::AwaitingFirstResult => &[],
            Self::Populated { posts } => posts,
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated { .. })
    }
}
