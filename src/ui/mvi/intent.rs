//! Marker trait for intents.

/// An action fed into a [`Reducer`](super::Reducer).
///
/// Covers both user input (a "+" press, a confirm click) and the
/// completion of effects (a backend clear resolving).
pub trait Intent: Send + 'static {}
