use std::sync::{Arc, Mutex};

use typewrite_core::{create, export_plan_json, write, Linear, PauseStrategy, TypeError, TypePlan};

/// Pause stub with distinguishable word/sentence delays.
struct FixedPause {
    word: u64,
    sentence: u64,
}

impl PauseStrategy for FixedPause {
    fn pause_after_word(&self, _word: &str, _avg_time_per_char: u64) -> u64 {
        self.word
    }

    fn pause_after_sentence(&self, _avg_time_per_char: u64) -> u64 {
        self.sentence
    }
}

/// Records every word it is consulted about.
#[derive(Default)]
struct RecordingPause {
    words: Mutex<Vec<String>>,
}

impl PauseStrategy for RecordingPause {
    fn pause_after_word(&self, word: &str, _avg_time_per_char: u64) -> u64 {
        self.words.lock().unwrap().push(word.to_string());
        0
    }

    fn pause_after_sentence(&self, _avg_time_per_char: u64) -> u64 {
        0
    }
}

/// it should declare duration = chars * avg for the whole-text mode
#[test]
fn whole_text_duration() {
    let req = write("Hi. Bob")
        .during(100)
        .with_interpolator(Arc::new(Linear));
    let anim = create(&req, String::new()).unwrap();
    assert_eq!(anim.segments().len(), 1);
    assert_eq!(anim.segments()[0].text(), "Hi. Bob");
    assert_eq!(anim.total_duration(), 700);
}

/// it should produce one segment per space-terminated word
#[test]
fn one_segment_per_word() {
    let req = write("one two three ").during(10);
    let anim = create(&req, String::new()).unwrap();

    let texts: Vec<_> = anim.segments().iter().map(|s| s.text()).collect();
    assert_eq!(texts, ["one ", "two ", "three "]);

    let durations: Vec<_> = anim.segments().iter().map(|s| s.duration_ms()).collect();
    assert_eq!(durations, [40, 40, 60]);

    // Strictly sequential: each begins at or after the previous end.
    for pair in anim.segments().windows(2) {
        assert!(pair[1].begin_ms() >= pair[0].end_ms());
    }
}

/// it should leave all start delays at zero under the default NoPause
#[test]
fn no_pause_means_zero_delays() {
    let req = write("a b c ").during(10);
    let anim = create(&req, String::new()).unwrap();
    assert!(anim.segments().iter().all(|s| s.start_delay_ms() == 0));
    assert_eq!(anim.total_duration(), 60);
}

/// it should prefer the sentence pause when `.` or `,` precedes the space
#[test]
fn sentence_boundaries_use_sentence_pause() {
    let req = write("Hi. Bob, x y ")
        .during(100)
        .with_pause_strategy(Arc::new(FixedPause {
            word: 7,
            sentence: 1000,
        }));
    let anim = create(&req, String::new()).unwrap();
    let delays: Vec<_> = anim.segments().iter().map(|s| s.start_delay_ms()).collect();
    // "Hi. " and "Bob, " end sentences, so their successors start late;
    // "x " earns only a word pause for "y ".
    assert_eq!(delays, [0, 1000, 1000, 7]);
}

/// it should pass the space-stripped word to the pause strategy
#[test]
fn word_pause_receives_stripped_word() {
    let recorder = Arc::new(RecordingPause::default());
    let strategy: Arc<dyn PauseStrategy> = recorder.clone();
    let req = write("Hi. Bob x ").with_pause_strategy(strategy);
    let _ = create(&req, String::new()).unwrap();

    let words = recorder.words.lock().unwrap();
    assert_eq!(*words, ["Bob", "x"]);
}

/// it should animate "Hi. Bob" as a single "Hi. " segment and drop "Bob"
#[test]
fn trailing_fragment_is_dropped() {
    let req = write("Hi. Bob").during(100);
    let anim = create(&req, String::new()).unwrap();
    assert_eq!(anim.segments().len(), 1);
    assert_eq!(anim.segments()[0].text(), "Hi. ");
    assert_eq!(anim.segments()[0].duration_ms(), 400);
}

/// it should fold space runs into the following word
#[test]
fn space_runs_join_the_next_word() {
    let req = write("a  b ").during(10);
    let anim = create(&req, String::new()).unwrap();
    let texts: Vec<_> = anim.segments().iter().map(|s| s.text()).collect();
    assert_eq!(texts, ["a ", " b "]);
}

/// it should reject a request with no usable easing configuration
#[test]
fn missing_interpolator_is_rejected() {
    let req = write("a b ").with_word_interpolators(Vec::new());
    assert_eq!(
        create(&req, String::new()).err(),
        Some(TypeError::MissingInterpolator)
    );
}

/// it should include inter-word delays in the total duration
#[test]
fn total_duration_includes_delays() {
    let req = write("a b c ")
        .during(100)
        .with_pause_strategy(Arc::new(FixedPause {
            word: 100,
            sentence: 0,
        }));
    let anim = create(&req, String::new()).unwrap();
    assert_eq!(anim.total_duration(), 800);
}

/// it should round-trip the plan through JSON
#[test]
fn plan_roundtrip() {
    let req = write("tick tock ")
        .during(50)
        .with_pause_strategy(Arc::new(FixedPause {
            word: 30,
            sentence: 0,
        }));
    let anim = create(&req, String::new()).unwrap();

    let plan = anim.to_plan();
    assert_eq!(plan.total_duration_ms, anim.total_duration());
    assert_eq!(plan.segments.len(), 2);
    assert_eq!(plan.segments[1].start_delay_ms, 30);
    assert_eq!(plan.segments[0].easing, "linear");

    let json = export_plan_json(&plan);
    let back: TypePlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}
