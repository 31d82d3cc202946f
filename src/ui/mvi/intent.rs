//! Marker trait for intents.

/// Something that happened: a key press, a model signal, a finished pass.
/// Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
