//! Property-Based Tests for termfolio
//!
//! Uses proptest for testing invariants and edge cases:
//! - Animation stage flag exclusivity and ordering
//! - Sequencer behavior under arbitrary operation sequences
//! - Enum string round-trips (parse -> to_string -> parse)
//! - Filter totality over arbitrary queries

use proptest::prelude::*;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use termfolio::capabilities::{parse_motion_override, EnvCapabilities};
use termfolio::sequencer::{AnimationStage, OpeningSequencer, SequencerEvent};

// =============================================================================
// AnimationStage Property Tests
// =============================================================================

/// Strategy for generating valid AnimationStage variants
fn stage_strategy() -> impl Strategy<Value = AnimationStage> {
    prop_oneof![
        Just(AnimationStage::Frozen),
        Just(AnimationStage::Flashing),
        Just(AnimationStage::Revealing),
        Just(AnimationStage::Finished),
    ]
}

proptest! {
    /// Exactly one phase flag is set for any stage
    #[test]
    fn stage_phase_flags_are_exclusive(stage in stage_strategy()) {
        let set = [
            stage.is_pulsing(),
            stage.is_flashing(),
            stage.is_revealing(),
            stage.is_complete(),
        ]
        .iter()
        .filter(|&&flag| flag)
        .count();
        prop_assert_eq!(set, 1);
    }

    /// A hidden opening screen is always a finished one
    #[test]
    fn stage_hide_implies_complete(stage in stage_strategy()) {
        if stage.should_hide() {
            prop_assert!(stage.is_complete());
        }
    }

    /// The background fades exactly while revealing or finished
    #[test]
    fn stage_fade_matches_late_stages(stage in stage_strategy()) {
        let late = stage.is_revealing() || stage.is_complete();
        prop_assert_eq!(stage.should_fade_background(), late);
    }

    /// next() moves exactly one step forward, or nowhere from the end
    #[test]
    fn stage_next_increments_order(stage in stage_strategy()) {
        match stage.next() {
            Some(next) => prop_assert_eq!(next.order(), stage.order() + 1),
            None => prop_assert!(stage.is_terminal()),
        }
    }

    /// Stage descriptions are non-empty lowercase words
    #[test]
    fn stage_description_is_valid(stage in stage_strategy()) {
        let s = stage.description();
        prop_assert!(!s.is_empty());
        prop_assert_eq!(s.to_string(), s.to_lowercase());
    }
}

// =============================================================================
// Sequencer Operation Sequence Tests
// =============================================================================

/// One externally visible operation on a running sequencer
#[derive(Debug, Clone)]
enum SeqOp {
    /// Advance the clock by this many milliseconds, then poll
    Advance(u16),
    Skip,
    Teardown,
}

fn seq_op_strategy() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        (0u16..2000).prop_map(SeqOp::Advance),
        Just(SeqOp::Skip),
        Just(SeqOp::Teardown),
    ]
}

proptest! {
    /// No operation sequence produces a second completion or a backwards
    /// stage transition, and at most one timer is ever pending
    #[test]
    fn sequencer_invariants_hold_under_any_ops(
        ops in prop::collection::vec(seq_op_strategy(), 0..40)
    ) {
        let (tx, rx) = mpsc::channel();
        let mut seq = OpeningSequencer::new(tx);
        let mut now = Instant::now();
        seq.start(&EnvCapabilities::full_motion(), now);

        let mut last_order = seq.stage().order();
        for op in ops {
            match op {
                SeqOp::Advance(ms) => {
                    now += Duration::from_millis(ms as u64);
                    seq.poll(now);
                }
                SeqOp::Skip => seq.skip(),
                SeqOp::Teardown => seq.teardown(),
            }
            let order = seq.stage().order();
            prop_assert!(order >= last_order, "stage went backwards");
            last_order = order;
            prop_assert!(seq.pending_timers() <= 1);
        }

        let completions = rx
            .try_iter()
            .filter(|e| matches!(e, SequencerEvent::Completed))
            .count();
        prop_assert!(completions <= 1);
        prop_assert_eq!(completions == 1, seq.stage().is_complete());
    }

    /// After teardown the stage is frozen in place and nothing more is sent
    #[test]
    fn teardown_freezes_the_sequencer(
        before in prop::collection::vec(seq_op_strategy(), 0..20),
        after in prop::collection::vec(seq_op_strategy(), 0..20),
    ) {
        let (tx, rx) = mpsc::channel();
        let mut seq = OpeningSequencer::new(tx);
        let mut now = Instant::now();
        seq.start(&EnvCapabilities::full_motion(), now);

        for op in before {
            match op {
                SeqOp::Advance(ms) => {
                    now += Duration::from_millis(ms as u64);
                    seq.poll(now);
                }
                SeqOp::Skip => seq.skip(),
                SeqOp::Teardown => seq.teardown(),
            }
        }

        seq.teardown();
        let frozen_stage = seq.stage();
        let _ = rx.try_iter().count();

        for op in after {
            match op {
                SeqOp::Advance(ms) => {
                    now += Duration::from_millis(ms as u64);
                    seq.poll(now);
                }
                SeqOp::Skip => seq.skip(),
                SeqOp::Teardown => seq.teardown(),
            }
        }

        prop_assert_eq!(seq.stage(), frozen_stage);
        prop_assert_eq!(seq.pending_timers(), 0);
        prop_assert_eq!(rx.try_iter().count(), 0, "events after teardown");
    }

    /// Reduced motion never passes through the flash or reveal stages
    #[test]
    fn reduced_motion_skips_intermediate_stages(
        advances in prop::collection::vec(0u16..1500, 0..20)
    ) {
        let (tx, _rx) = mpsc::channel();
        let mut seq = OpeningSequencer::new(tx);
        let caps = EnvCapabilities::full_motion().with_reduced_motion();
        let mut now = Instant::now();
        seq.start(&caps, now);

        for ms in advances {
            now += Duration::from_millis(ms as u64);
            seq.poll(now);
            prop_assert!(matches!(
                seq.stage(),
                AnimationStage::Frozen | AnimationStage::Finished
            ));
        }
    }
}

// =============================================================================
// Enum Round-Trip Property Tests
// =============================================================================

use termfolio::content::ProjectCategory;
use termfolio::theme::ThemeMode;

fn theme_mode_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Dark), Just(ThemeMode::Light)]
}

fn category_strategy() -> impl Strategy<Value = ProjectCategory> {
    prop_oneof![
        Just(ProjectCategory::Web),
        Just(ProjectCategory::Api),
        Just(ProjectCategory::Cli),
        Just(ProjectCategory::Library),
    ]
}

proptest! {
    /// ThemeMode: to_string -> parse round-trip is identity
    #[test]
    fn theme_mode_roundtrip(mode in theme_mode_strategy()) {
        let s = mode.to_string();
        let parsed: ThemeMode = s.parse().expect("Should parse");
        prop_assert_eq!(mode, parsed);
    }

    /// ThemeMode: Display output is non-empty lowercase
    #[test]
    fn theme_mode_display_is_valid(mode in theme_mode_strategy()) {
        let s = mode.to_string();
        prop_assert!(!s.is_empty());
        let lowercase = s.to_lowercase();
        prop_assert_eq!(s, lowercase);
    }

    /// ThemeMode: toggling twice is identity
    #[test]
    fn theme_mode_double_toggle_is_identity(mode in theme_mode_strategy()) {
        prop_assert_eq!(mode.toggled().toggled(), mode);
    }

    /// ProjectCategory: to_string -> parse round-trip is identity
    #[test]
    fn category_roundtrip(category in category_strategy()) {
        let s = category.to_string();
        let parsed: ProjectCategory = s.parse().expect("Should parse");
        prop_assert_eq!(category, parsed);
    }

    /// Arbitrary strings don't crash ProjectCategory parsing
    #[test]
    fn category_parse_doesnt_crash(s in ".*") {
        let _ = s.parse::<ProjectCategory>();
    }
}

// =============================================================================
// State File Property Tests
// =============================================================================

use termfolio::storage::StateFile;

proptest! {
    /// StateFile: JSON round-trip is identity for any field combination
    #[test]
    fn state_file_json_roundtrip(seen in any::<bool>(), mode in theme_mode_strategy()) {
        let state = StateFile {
            seen_intro: seen,
            theme: mode,
        };
        let json = serde_json::to_string(&state).expect("Should serialize");
        let parsed: StateFile = serde_json::from_str(&json).expect("Should deserialize");
        prop_assert_eq!(state, parsed);
    }
}

// =============================================================================
// Content Filter Property Tests
// =============================================================================

use termfolio::content::{self, Project};

proptest! {
    /// Arbitrary queries never panic and always yield a subset of the catalogue
    #[test]
    fn filter_results_are_a_subset(s in ".*") {
        let results = content::filter_projects(None, &s);
        prop_assert!(results.len() <= content::PROJECTS.len());
        for project in results {
            prop_assert!(content::PROJECTS
                .iter()
                .any(|p: &Project| p.slug == project.slug));
        }
    }

    /// Adding a category filter never grows the result set
    #[test]
    fn category_filter_only_narrows(s in ".*", category in category_strategy()) {
        let unfiltered = content::filter_projects(None, &s).len();
        let filtered = content::filter_projects(Some(category), &s).len();
        prop_assert!(filtered <= unfiltered);
    }

    /// The empty query matches every project
    #[test]
    fn whitespace_query_matches_everything(spaces in " {0,8}") {
        let results = content::filter_projects(None, &spaces);
        prop_assert_eq!(results.len(), content::PROJECTS.len());
    }
}

// =============================================================================
// Motion Override Parsing Property Tests
// =============================================================================

proptest! {
    /// Arbitrary strings don't crash the env override parser
    #[test]
    fn motion_override_parse_doesnt_crash(s in ".*") {
        let _ = parse_motion_override(&s);
    }

    /// Surrounding whitespace never changes the parse result
    #[test]
    fn motion_override_ignores_whitespace(s in "[a-zA-Z0-9]{0,6}") {
        let padded = format!("  {}\t", s);
        prop_assert_eq!(parse_motion_override(&padded), parse_motion_override(&s));
    }

    /// Recognized truthy spellings all parse to the reduced preference
    #[test]
    fn motion_override_truthy_values(raw in prop_oneof![
        Just("1"),
        Just("true"),
        Just("yes"),
        Just("on"),
        Just("TRUE"),
        Just("Yes"),
    ]) {
        let parsed = parse_motion_override(raw);
        prop_assert!(parsed.map(|p| p.is_reduced()).unwrap_or(false));
    }
}
