/// Marker trait for UI state objects.
///
/// States are replaced, never patched in place. `PartialEq` lets observers
/// skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
