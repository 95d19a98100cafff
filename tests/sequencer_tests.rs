//! Integration tests for the opening animation sequencer
//!
//! These tests drive the sequencer with explicit clock values, covering:
//! - Exact stage transition boundaries on the standard timeline
//! - The reduced-motion single-timer path
//! - Skip semantics: atomic cancellation and exactly-once completion
//! - Teardown semantics: no emission, stage frozen in place

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use termfolio::capabilities::EnvCapabilities;
use termfolio::sequencer::{
    AnimationStage, OpeningSequencer, SequencerEvent, FINISH_DELAY, FLASH_DELAY,
    REDUCED_MOTION_DELAY, REVEAL_DELAY,
};

fn full_motion() -> EnvCapabilities {
    EnvCapabilities::full_motion()
}

fn reduced_motion() -> EnvCapabilities {
    EnvCapabilities::full_motion().with_reduced_motion()
}

fn started_sequencer(
    caps: &EnvCapabilities,
) -> (OpeningSequencer, Receiver<SequencerEvent>, Instant) {
    let (tx, rx) = mpsc::channel();
    let mut seq = OpeningSequencer::new(tx);
    let base = Instant::now();
    seq.start(caps, base);
    (seq, rx, base)
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn completions(rx: &Receiver<SequencerEvent>) -> usize {
    rx.try_iter()
        .filter(|e| matches!(e, SequencerEvent::Completed))
        .count()
}

// =============================================================================
// Timeline Boundary Tests
// =============================================================================

#[test]
fn test_delays_compose_into_the_documented_milestones() {
    assert_eq!(FLASH_DELAY, Duration::from_millis(1500));
    assert_eq!(FLASH_DELAY + REVEAL_DELAY, Duration::from_millis(2000));
    assert_eq!(
        FLASH_DELAY + REVEAL_DELAY + FINISH_DELAY,
        Duration::from_millis(3500)
    );
    assert_eq!(REDUCED_MOTION_DELAY, Duration::from_millis(800));
}

#[test]
fn test_stage_is_frozen_immediately_after_start() {
    let (seq, rx, _base) = started_sequencer(&full_motion());
    assert_eq!(seq.stage(), AnimationStage::Frozen);
    assert!(seq.is_started());
    assert_eq!(seq.pending_timers(), 1);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_flash_boundary() {
    let (mut seq, _rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 1499));
    assert_eq!(seq.stage(), AnimationStage::Frozen);

    seq.poll(at(base, 1500));
    assert_eq!(seq.stage(), AnimationStage::Flashing);
}

#[test]
fn test_reveal_boundary() {
    let (mut seq, _rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 1999));
    assert_eq!(seq.stage(), AnimationStage::Flashing);

    seq.poll(at(base, 2000));
    assert_eq!(seq.stage(), AnimationStage::Revealing);
}

#[test]
fn test_finish_boundary() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 3499));
    assert_eq!(seq.stage(), AnimationStage::Revealing);
    assert_eq!(completions(&rx), 0);

    seq.poll(at(base, 3500));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 1);
}

#[test]
fn test_full_timeline_milestones() {
    let milestones: &[(u64, AnimationStage)] = &[
        (0, AnimationStage::Frozen),
        (1499, AnimationStage::Frozen),
        (1500, AnimationStage::Flashing),
        (1999, AnimationStage::Flashing),
        (2000, AnimationStage::Revealing),
        (3499, AnimationStage::Revealing),
        (3500, AnimationStage::Finished),
    ];

    let (mut seq, rx, base) = started_sequencer(&full_motion());
    for &(ms, expected) in milestones {
        seq.poll(at(base, ms));
        assert_eq!(seq.stage(), expected, "at {}ms", ms);
    }
    assert_eq!(completions(&rx), 1);
}

#[test]
fn test_single_late_poll_cascades_every_stage() {
    // A long stall between polls must not stretch the timeline: each
    // successor timer is armed from its predecessor's deadline, so one
    // poll far past the end runs the whole chain.
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 5000));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 1);
    assert_eq!(seq.pending_timers(), 0);
}

#[test]
fn test_exactly_one_timer_pending_throughout() {
    let (mut seq, _rx, base) = started_sequencer(&full_motion());

    for ms in [0u64, 1499, 1500, 1999, 2000, 3499] {
        seq.poll(at(base, ms));
        assert_eq!(seq.pending_timers(), 1, "at {}ms", ms);
    }
    seq.poll(at(base, 3500));
    assert_eq!(seq.pending_timers(), 0);
}

#[test]
fn test_poll_before_start_is_inert() {
    let (tx, rx) = mpsc::channel();
    let mut seq = OpeningSequencer::new(tx);

    seq.poll(Instant::now() + Duration::from_secs(10));
    assert_eq!(seq.stage(), AnimationStage::Frozen);
    assert!(!seq.is_started());
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_start_is_one_shot() {
    let (mut seq, _rx, base) = started_sequencer(&full_motion());

    // A second start later must not re-arm or shift the timeline
    seq.start(&full_motion(), at(base, 1000));
    assert_eq!(seq.pending_timers(), 1);

    seq.poll(at(base, 1500));
    assert_eq!(seq.stage(), AnimationStage::Flashing);
}

// =============================================================================
// Reduced Motion Tests
// =============================================================================

#[test]
fn test_reduced_motion_boundary() {
    let (mut seq, rx, base) = started_sequencer(&reduced_motion());
    assert!(seq.reduced_motion());

    seq.poll(at(base, 799));
    assert_eq!(seq.stage(), AnimationStage::Frozen);
    assert_eq!(completions(&rx), 0);

    seq.poll(at(base, 800));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 1);
}

#[test]
fn test_reduced_motion_never_flashes_or_reveals() {
    let (mut seq, _rx, base) = started_sequencer(&reduced_motion());

    for ms in (0..=4000).step_by(100) {
        seq.poll(at(base, ms));
        assert!(
            matches!(
                seq.stage(),
                AnimationStage::Frozen | AnimationStage::Finished
            ),
            "unexpected stage {:?} at {}ms",
            seq.stage(),
            ms
        );
    }
    assert_eq!(seq.stage(), AnimationStage::Finished);
}

#[test]
fn test_reduced_motion_standard_milestones_are_irrelevant() {
    let (mut seq, rx, base) = started_sequencer(&reduced_motion());

    seq.poll(at(base, 1500));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    seq.poll(at(base, 3500));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 1);
}

// =============================================================================
// Skip Tests
// =============================================================================

#[test]
fn test_skip_from_every_stage_completes_exactly_once() {
    for pre_poll_ms in [0u64, 1600, 2100] {
        let (mut seq, rx, base) = started_sequencer(&full_motion());
        if pre_poll_ms > 0 {
            seq.poll(at(base, pre_poll_ms));
        }

        seq.skip();
        assert_eq!(seq.stage(), AnimationStage::Finished, "from {}ms", pre_poll_ms);
        assert_eq!(seq.pending_timers(), 0);
        assert_eq!(completions(&rx), 1, "from {}ms", pre_poll_ms);
    }
}

#[test]
fn test_skip_then_late_poll_does_not_reemit() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 100));
    seq.skip();
    assert_eq!(completions(&rx), 1);

    // Polling far past every original deadline finds nothing to fire
    seq.poll(at(base, 5000));
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_double_skip_completes_once() {
    let (mut seq, rx, _base) = started_sequencer(&full_motion());

    seq.skip();
    seq.skip();
    assert_eq!(completions(&rx), 1);
}

#[test]
fn test_skip_after_natural_finish_is_a_noop() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 3500));
    assert_eq!(completions(&rx), 1);

    seq.skip();
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_skip_works_under_reduced_motion() {
    let (mut seq, rx, _base) = started_sequencer(&reduced_motion());

    seq.skip();
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert_eq!(completions(&rx), 1);
}

#[test]
fn test_skip_survives_a_dropped_receiver() {
    let (mut seq, rx, _base) = started_sequencer(&full_motion());
    drop(rx);

    // Completion cannot be delivered, but the sequencer must not care
    seq.skip();
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert!(seq.has_completed());
}

// =============================================================================
// Teardown Tests
// =============================================================================

#[test]
fn test_teardown_cancels_without_completing() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.teardown();
    assert!(seq.is_torn_down());
    assert_eq!(seq.pending_timers(), 0);

    seq.poll(at(base, 5000));
    assert_eq!(seq.stage(), AnimationStage::Frozen);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_teardown_preserves_the_current_stage() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 1600));
    assert_eq!(seq.stage(), AnimationStage::Flashing);

    seq.teardown();
    assert_eq!(seq.stage(), AnimationStage::Flashing);

    seq.poll(at(base, 5000));
    assert_eq!(seq.stage(), AnimationStage::Flashing);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_teardown_is_idempotent() {
    let (mut seq, rx, _base) = started_sequencer(&full_motion());

    seq.teardown();
    seq.teardown();
    assert!(seq.is_torn_down());
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_teardown_after_finish_keeps_the_completion() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 3500));
    assert_eq!(completions(&rx), 1);

    seq.teardown();
    assert_eq!(seq.stage(), AnimationStage::Finished);
    assert!(seq.has_completed());
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_skip_after_teardown_is_a_noop() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.poll(at(base, 1600));
    seq.teardown();

    seq.skip();
    assert_eq!(seq.stage(), AnimationStage::Flashing);
    assert_eq!(completions(&rx), 0);
}

#[test]
fn test_start_after_teardown_stays_down() {
    let (mut seq, rx, base) = started_sequencer(&full_motion());

    seq.teardown();
    seq.start(&full_motion(), at(base, 100));

    assert_eq!(seq.pending_timers(), 0);
    seq.poll(at(base, 5000));
    assert_eq!(seq.stage(), AnimationStage::Frozen);
    assert_eq!(completions(&rx), 0);
}
