//! Composite tick-driven playback.
//!
//! The factory compiles a request into an ordered list of [`Segment`]s
//! with absolute begin/end times (start delays included). The caller owns
//! the frame loop and drives [`TypeAnimation::tick`] with elapsed
//! milliseconds; each tick reveals characters into the [`Writable`] sink.

use std::fmt;
use std::sync::Arc;

use crate::interp::Interpolator;
use crate::listener::AnimationListener;
use crate::writable::Writable;

/// Playback state of a composite animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// One contiguous run of text revealed under a single easing curve.
pub struct Segment {
    text: String,
    char_len: usize,
    duration_ms: u64,
    start_delay_ms: u64,
    begin_ms: u64,
    end_ms: u64,
    easing: Arc<dyn Interpolator>,
    revealed: usize,
}

impl Segment {
    pub(crate) fn new(
        text: String,
        duration_ms: u64,
        start_delay_ms: u64,
        easing: Arc<dyn Interpolator>,
    ) -> Self {
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            duration_ms,
            start_delay_ms,
            begin_ms: 0,
            end_ms: 0,
            easing,
            revealed: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn start_delay_ms(&self) -> u64 {
        self.start_delay_ms
    }

    /// Absolute time this segment starts revealing, delays included.
    pub fn begin_ms(&self) -> u64 {
        self.begin_ms
    }

    /// Absolute time this segment is fully revealed.
    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    pub fn easing_label(&self) -> &'static str {
        self.easing.label()
    }

    /// Characters appended to the sink so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Characters that should be visible at progress `t` in [0,1].
    ///
    /// The count animates from 1 to `char_len`, so a just-started segment
    /// already shows its first character. Overshooting curves are clamped.
    fn target_count(&self, t: f32) -> usize {
        if self.char_len == 0 {
            return 0;
        }
        let eased = self.easing.interpolate(t.clamp(0.0, 1.0));
        let raw = 1 + (eased * (self.char_len - 1) as f32).floor() as i64;
        raw.clamp(0, self.char_len as i64) as usize
    }

    /// Append the characters between `revealed` and `count`, in order.
    /// Counts never move backwards, so each character lands exactly once.
    fn reveal_to<W: Writable>(&mut self, count: usize, target: &mut W) {
        if count <= self.revealed {
            return;
        }
        let start = byte_index(&self.text, self.revealed);
        let end = byte_index(&self.text, count);
        target.append(&self.text[start..end]);
        self.revealed = count;
    }

    fn reveal_progress<W: Writable>(&mut self, t: f32, target: &mut W) {
        let count = self.target_count(t);
        self.reveal_to(count, target);
    }

    fn finish<W: Writable>(&mut self, target: &mut W) {
        let count = self.char_len;
        self.reveal_to(count, target);
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("text", &self.text)
            .field("duration_ms", &self.duration_ms)
            .field("start_delay_ms", &self.start_delay_ms)
            .field("easing", &self.easing.label())
            .field("revealed", &self.revealed)
            .finish()
    }
}

/// Byte offset of the `chars`-th scalar value; text is sliced on scalar
/// boundaries so multi-byte characters are never split.
fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Composite animation: segments revealed strictly in sequence into the
/// owned sink. Returned armed but not started; the caller calls
/// [`TypeAnimation::start`] and then ticks it from its frame loop.
pub struct TypeAnimation<W: Writable> {
    segments: Vec<Segment>,
    target: W,
    listener: Option<Arc<dyn AnimationListener>>,
    state: Playback,
    elapsed_ms: u64,
    cursor: usize,
    total_duration_ms: u64,
}

impl<W: Writable> TypeAnimation<W> {
    pub(crate) fn new(
        mut segments: Vec<Segment>,
        target: W,
        listener: Option<Arc<dyn AnimationListener>>,
    ) -> Self {
        // Lay segments out on an absolute clock: each begins after the
        // previous one ends plus its own start delay.
        let mut clock = 0u64;
        for seg in &mut segments {
            seg.begin_ms = clock + seg.start_delay_ms;
            seg.end_ms = seg.begin_ms + seg.duration_ms;
            clock = seg.end_ms;
        }
        Self {
            segments,
            target,
            listener,
            state: Playback::Idle,
            elapsed_ms: 0,
            cursor: 0,
            total_duration_ms: clock,
        }
    }

    /// Arm playback and reveal whatever is due at time zero. Fires
    /// `on_start`. A finished or cancelled animation does not restart;
    /// build a new one from the request instead.
    pub fn start(&mut self) {
        if self.state != Playback::Idle {
            return;
        }
        self.state = Playback::Running;
        if let Some(listener) = &self.listener {
            listener.on_start();
        }
        self.drain();
    }

    /// Advance playback by `dt_ms` milliseconds. A large step may complete
    /// several segments at once; every character still lands exactly once,
    /// in order. No-op unless running.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.state != Playback::Running {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        self.drain();
    }

    /// Stop playback where it stands. Fires `on_cancel`; no further
    /// characters are revealed.
    pub fn cancel(&mut self) {
        if self.state != Playback::Running {
            return;
        }
        self.state = Playback::Cancelled;
        if let Some(listener) = &self.listener {
            listener.on_cancel();
        }
    }

    fn drain(&mut self) {
        while let Some(seg) = self.segments.get_mut(self.cursor) {
            if self.elapsed_ms < seg.begin_ms {
                // Still inside the pre-segment pause.
                return;
            }
            if self.elapsed_ms >= seg.end_ms {
                seg.finish(&mut self.target);
                self.cursor += 1;
                continue;
            }
            let t = (self.elapsed_ms - seg.begin_ms) as f32 / seg.duration_ms as f32;
            seg.reveal_progress(t, &mut self.target);
            return;
        }
        self.state = Playback::Finished;
        if let Some(listener) = &self.listener {
            listener.on_end();
        }
    }

    pub fn playback(&self) -> Playback {
        self.state
    }

    /// Declared length of the whole composite: segment durations plus all
    /// inter-segment delays.
    pub fn total_duration(&self) -> u64 {
        self.total_duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut W {
        &mut self.target
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: Writable> fmt::Debug for TypeAnimation<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeAnimation")
            .field("segments", &self.segments)
            .field("state", &self.state)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("total_duration_ms", &self.total_duration_ms)
            .finish()
    }
}
