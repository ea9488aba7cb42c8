//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state is the single record a reducer transforms and a view renders —
/// for this app, the counter's value, pending input, alert flag, and last
/// quote. States should be:
/// - Owned and passed by value through the reducer (never ambient globals)
/// - Self-contained (everything the view needs to draw the screen)
/// - Comparable (PartialEq for detecting changes)
/// - `Default` for the application-start record
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
