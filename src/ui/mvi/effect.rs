//! Base trait for effects in MVI architecture.

/// Marker trait for effect objects.
///
/// An effect is a *description* of an asynchronous side effect (a network
/// fetch, a timer) returned by a reducer. The reducer never executes it:
/// the dispatching caller runs the effect, and its outcome comes back as a
/// fresh intent on the same serialized stream.
pub trait Effect: Send + 'static {}
