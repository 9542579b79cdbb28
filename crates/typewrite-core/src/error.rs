//! Error taxonomy for turning a request into an animation.

use thiserror::Error;

/// Errors raised at animation build time. Playback itself is infallible.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    /// The request carries neither a whole-text interpolator nor a
    /// non-empty word-interpolator pool.
    #[error("no interpolator or interpolator list specified")]
    MissingInterpolator,

    /// A per-word curve was requested against an empty pool. The factory's
    /// branch guard normally prevents this.
    #[error("no word interpolator available")]
    EmptyInterpolatorPool,
}
