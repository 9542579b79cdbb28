//! typewrite-core: engine-agnostic typewriter text animation.
//!
//! A [`WriteRequest`] describes what to type and how fast; the factory
//! compiles it into a [`TypeAnimation`] the host frame loop drives by
//! ticking with elapsed milliseconds. All timing decisions (durations,
//! easing choices, inter-word pauses) are made at build time; playback
//! only reveals characters into the caller's [`Writable`] sink.
//!
//! ```
//! use typewrite_core::{write, Playback};
//!
//! let request = write("Hi. Bob ").naturally().during(50);
//! let mut anim = request.into_animation(String::new()).unwrap();
//! anim.start();
//! while anim.playback() == Playback::Running {
//!     anim.tick(16);
//! }
//! assert_eq!(anim.target().as_str(), "Hi. Bob ");
//! ```

pub mod animation;
pub mod error;
pub mod factory;
pub mod interp;
pub mod listener;
pub mod pause;
pub mod plan;
pub mod request;
pub mod writable;

// Re-exports for consumers (adapters)
pub use animation::{Playback, Segment, TypeAnimation};
pub use error::TypeError;
pub use factory::create;
pub use interp::{
    AccelerateDecelerate, CubicBezier, Decelerate, FastOutLinearIn, FastOutSlowIn, Interpolator,
    Linear,
};
pub use listener::AnimationListener;
pub use pause::{NaturalPause, NoPause, PauseStrategy};
pub use plan::{export_plan_json, SegmentSpec, TypePlan};
pub use request::{
    write, WriteRequest, FAST_SPEED, NORMAL_SPEED, SLOW_SPEED, VERY_FAST_SPEED, VERY_SLOW_SPEED,
};
pub use writable::Writable;
