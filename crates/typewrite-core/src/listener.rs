//! Lifecycle observer for composite animations.

/// Observer notified synchronously of animation lifecycle transitions.
///
/// All hooks default to no-ops so implementors override only what they
/// need. The listener is attached to the composite animation, never to
/// individual word segments.
pub trait AnimationListener: Send + Sync {
    fn on_start(&self) {}
    fn on_end(&self) {}
    fn on_cancel(&self) {}
}
