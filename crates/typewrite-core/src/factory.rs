//! Compile a [`WriteRequest`] into a [`TypeAnimation`].

use std::sync::Arc;

use log::debug;

use crate::animation::{Segment, TypeAnimation};
use crate::error::TypeError;
use crate::interp::Interpolator;
use crate::pause::PauseStrategy;
use crate::request::WriteRequest;
use crate::writable::Writable;

/// Build the animation described by `request`, writing into `target`.
///
/// With a whole-text interpolator the result is a single segment over the
/// full text. Otherwise the text is split into words and each word gets
/// its own segment, eased by a curve drawn from the pool and separated by
/// the pause strategy's delays. A request with neither configuration is
/// rejected with [`TypeError::MissingInterpolator`].
pub fn create<W: Writable>(
    request: &WriteRequest,
    target: W,
) -> Result<TypeAnimation<W>, TypeError> {
    if let Some(curve) = request.interpolator() {
        let chars = request.text().chars().count() as u64;
        let duration = chars * request.avg_time_per_char();
        debug!(
            "whole-text segment: {chars} chars over {duration} ms, eased by {}",
            curve.label()
        );
        let segment = Segment::new(request.text().to_string(), duration, 0, Arc::clone(curve));
        return Ok(TypeAnimation::new(
            vec![segment],
            target,
            request.listener().cloned(),
        ));
    }

    if !request.word_interpolators().is_empty() {
        let segments = word_segments(request)?;
        return Ok(TypeAnimation::new(
            segments,
            target,
            request.listener().cloned(),
        ));
    }

    Err(TypeError::MissingInterpolator)
}

/// Split the request's text into per-word segments.
///
/// A word ends at the first space following a non-space, and keeps that
/// space as its trailing character; longer space runs accumulate into the
/// next word instead of producing empty segments. Characters after the
/// last space never see a boundary and are not animated.
fn word_segments(request: &WriteRequest) -> Result<Vec<Segment>, TypeError> {
    let avg = request.avg_time_per_char();
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut prev = '|';
    let mut pause_after_prev = 0u64;

    for ch in request.text().chars() {
        buffer.push(ch);

        if ch == ' ' && prev != ' ' {
            let duration = buffer.chars().count() as u64 * avg;
            let easing = request.random_word_interpolator()?;
            debug!(
                "word segment {buffer:?}: {duration} ms after a {pause_after_prev} ms pause, eased by {}",
                easing.label()
            );
            segments.push(Segment::new(buffer.clone(), duration, pause_after_prev, easing));

            // The pause earned by this word delays the start of the next
            // one. A `.` or `,` right before the space ends a sentence.
            pause_after_prev = if prev == '.' || prev == ',' {
                request.pause_strategy().pause_after_sentence(avg)
            } else {
                let word = &buffer[..buffer.len() - 1];
                request.pause_strategy().pause_after_word(word, avg)
            };

            buffer.clear();
        }

        prev = ch;
    }

    Ok(segments)
}
