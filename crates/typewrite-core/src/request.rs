//! WriteRequest: immutable blueprint for a typewriter animation.
//!
//! A request is created with [`write`] and refined through chained `with_*`
//! calls. Every mutator returns a brand-new request; the receiver is left
//! observably unchanged, so a request can be kept around as a template.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::animation::TypeAnimation;
use crate::error::TypeError;
use crate::factory;
use crate::interp::{
    AccelerateDecelerate, Decelerate, FastOutLinearIn, FastOutSlowIn, Interpolator, Linear,
};
use crate::listener::AnimationListener;
use crate::pause::{NaturalPause, NoPause, PauseStrategy};
use crate::writable::Writable;

/// Milliseconds per character, slowest preset.
pub const VERY_SLOW_SPEED: u64 = 300;
/// Milliseconds per character.
pub const SLOW_SPEED: u64 = 200;
/// Milliseconds per character, the default.
pub const NORMAL_SPEED: u64 = 100;
/// Milliseconds per character.
pub const FAST_SPEED: u64 = 50;
/// Milliseconds per character, fastest preset.
pub const VERY_FAST_SPEED: u64 = 25;

/// Start a request for `text`.
///
/// Defaults: [`NORMAL_SPEED`], per-word pool of a single [`Linear`] curve,
/// no whole-text curve, no listener, [`NoPause`].
pub fn write(text: impl Into<String>) -> WriteRequest {
    WriteRequest {
        text: text.into(),
        avg_time_per_char: NORMAL_SPEED,
        interpolator: None,
        word_interpolators: vec![Arc::new(Linear)],
        listener: None,
        pause_strategy: Arc::new(NoPause),
    }
}

/// Immutable description of a typewriter animation.
///
/// Exactly one of the whole-text interpolator and the word-interpolator
/// pool drives the build: setting one clears the other.
#[derive(Clone)]
pub struct WriteRequest {
    text: String,
    avg_time_per_char: u64,
    interpolator: Option<Arc<dyn Interpolator>>,
    word_interpolators: Vec<Arc<dyn Interpolator>>,
    listener: Option<Arc<dyn AnimationListener>>,
    pause_strategy: Arc<dyn PauseStrategy>,
}

impl WriteRequest {
    /// Set the time attributed to each character, in milliseconds.
    pub fn during(&self, millis: u64) -> Self {
        let mut next = self.clone();
        next.avg_time_per_char = millis;
        next
    }

    /// Attach a lifecycle observer to the animation that will be built.
    pub fn with_listener(&self, listener: Arc<dyn AnimationListener>) -> Self {
        let mut next = self.clone();
        next.listener = Some(listener);
        next
    }

    /// Animate the whole text as one segment eased by `interpolator`.
    /// Clears the word-interpolator pool.
    pub fn with_interpolator(&self, interpolator: Arc<dyn Interpolator>) -> Self {
        let mut next = self.clone();
        next.interpolator = Some(interpolator);
        next.word_interpolators = Vec::new();
        next
    }

    /// Animate word by word, every word eased by `interpolator`.
    /// Clears the whole-text interpolator.
    pub fn with_word_interpolator(&self, interpolator: Arc<dyn Interpolator>) -> Self {
        self.with_word_interpolators(vec![interpolator])
    }

    /// Animate word by word, each word eased by a curve drawn at random
    /// from `interpolators`. Clears the whole-text interpolator.
    pub fn with_word_interpolators(&self, interpolators: Vec<Arc<dyn Interpolator>>) -> Self {
        let mut next = self.clone();
        next.interpolator = None;
        next.word_interpolators = interpolators;
        next
    }

    /// Replace the pause strategy.
    pub fn with_pause_strategy(&self, pause_strategy: Arc<dyn PauseStrategy>) -> Self {
        let mut next = self.clone();
        next.pause_strategy = pause_strategy;
        next
    }

    /// Type like a person: natural pauses and a varied pool of easing
    /// curves, one drawn at random per word.
    pub fn naturally(&self) -> Self {
        self.with_pause_strategy(Arc::new(NaturalPause))
            .with_word_interpolators(vec![
                Arc::new(AccelerateDecelerate),
                Arc::new(Decelerate),
                Arc::new(FastOutSlowIn),
                Arc::new(FastOutLinearIn),
                Arc::new(Linear),
            ])
    }

    /// Build the animation described by this request, writing into `target`.
    pub fn into_animation<W: Writable>(self, target: W) -> Result<TypeAnimation<W>, TypeError> {
        factory::create(&self, target)
    }

    /// Draw a curve from the word-interpolator pool.
    ///
    /// A pool of one returns its sole entry without consulting the RNG;
    /// an empty pool is an illegal state surfaced as
    /// [`TypeError::EmptyInterpolatorPool`].
    pub fn random_word_interpolator(&self) -> Result<Arc<dyn Interpolator>, TypeError> {
        match self.word_interpolators.len() {
            0 => Err(TypeError::EmptyInterpolatorPool),
            1 => Ok(Arc::clone(&self.word_interpolators[0])),
            n => {
                let idx = rand::rng().random_range(0..n);
                Ok(Arc::clone(&self.word_interpolators[idx]))
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn avg_time_per_char(&self) -> u64 {
        self.avg_time_per_char
    }

    pub fn interpolator(&self) -> Option<&Arc<dyn Interpolator>> {
        self.interpolator.as_ref()
    }

    pub fn word_interpolators(&self) -> &[Arc<dyn Interpolator>] {
        &self.word_interpolators
    }

    pub fn listener(&self) -> Option<&Arc<dyn AnimationListener>> {
        self.listener.as_ref()
    }

    pub fn pause_strategy(&self) -> &Arc<dyn PauseStrategy> {
        &self.pause_strategy
    }
}

impl fmt::Debug for WriteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteRequest")
            .field("text", &self.text)
            .field("avg_time_per_char", &self.avg_time_per_char)
            .field("interpolator", &self.interpolator.as_ref().map(|i| i.label()))
            .field(
                "word_interpolators",
                &self
                    .word_interpolators
                    .iter()
                    .map(|i| i.label())
                    .collect::<Vec<_>>(),
            )
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
