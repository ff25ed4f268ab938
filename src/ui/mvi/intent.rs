/// Marker trait for intent objects.
///
/// Intents are produced by background work (fetch results) and are handed
/// to a reducer to compute the next state.
pub trait Intent: Send + 'static {}
