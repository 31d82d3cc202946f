//! Marker trait for reducer-owned state.

/// States are replaced, never patched: `Clone` to derive a new one,
/// `PartialEq` to detect changes, `Default` for the initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
