//! Opening animation state machine
//!
//! Drives the staged opening screen shown before the portfolio becomes
//! interactive. The sequencer owns no threads and never sleeps: the host
//! event loop calls [`OpeningSequencer::poll`] with the current instant and
//! the sequencer fires whichever timers have come due.
//!
//! # Design Principles
//! - **Forward-only**: stages advance `Frozen -> Flashing -> Revealing ->
//!   Finished` and never move backwards
//! - **Chained deadlines**: each follow-up timer is armed relative to the
//!   instant its predecessor was scheduled to fire, so the absolute
//!   milestones stay at 1500ms, 2000ms and 3500ms even when polls run late
//! - **Exactly-once completion**: the completion event is sent a single time
//!   per run, whether the run finished naturally or was skipped
//! - **Reduced motion**: the preference is read once at start; a reduced run
//!   is a single 800ms timer straight to `Finished` and the intermediate
//!   stages are never observable
//!
//! Stage flow (full-motion run):
//! ```text
//!          +1500ms          +500ms           +1500ms
//! Frozen ----------> Flashing ----------> Revealing ----------> Finished
//!   |                                                              ^
//!   |        reduced motion: one 800ms timer                      |
//!   +--------------------------------------------------------------+
//!             skip: cancel all timers, jump straight there
//! ```

use std::fmt;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::capabilities::EnvCapabilities;
use crate::timer::TimerSet;

/// Delay from start until the flash stage begins.
pub const FLASH_DELAY: Duration = Duration::from_millis(1500);
/// Delay from the flash stage until the reveal stage begins.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
/// Delay from the reveal stage until the sequence finishes.
pub const FINISH_DELAY: Duration = Duration::from_millis(1500);
/// Total duration of a reduced-motion run.
pub const REDUCED_MOTION_DELAY: Duration = Duration::from_millis(800);

/// Stages of the opening animation.
///
/// Each stage maps to a distinct visual treatment of the opening screen;
/// the derived predicates below are what the renderer keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationStage {
    /// Name sits frozen with a pulse hint; nothing has moved yet
    Frozen = 0,
    /// Brief high-contrast flash of the name
    Flashing = 1,
    /// Tagline and backdrop reveal while the background fades
    Revealing = 2,
    /// Sequence over; the portfolio underneath owns the screen
    Finished = 3,
}

impl AnimationStage {
    /// Numeric order of this stage in the sequence.
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Whether this stage ends the sequence.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, AnimationStage::Finished)
    }

    /// The stage that naturally follows this one, if any.
    #[inline]
    pub const fn next(self) -> Option<AnimationStage> {
        match self {
            AnimationStage::Frozen => Some(AnimationStage::Flashing),
            AnimationStage::Flashing => Some(AnimationStage::Revealing),
            AnimationStage::Revealing => Some(AnimationStage::Finished),
            AnimationStage::Finished => None,
        }
    }

    /// Human-readable description of this stage.
    #[inline]
    pub const fn description(self) -> &'static str {
        match self {
            AnimationStage::Frozen => "frozen",
            AnimationStage::Flashing => "flashing",
            AnimationStage::Revealing => "revealing",
            AnimationStage::Finished => "finished",
        }
    }

    /// All stages in sequence order.
    #[inline]
    pub const fn all_stages() -> [AnimationStage; 4] {
        [
            AnimationStage::Frozen,
            AnimationStage::Flashing,
            AnimationStage::Revealing,
            AnimationStage::Finished,
        ]
    }

    /// Whether the frozen-name pulse hint should show.
    #[inline]
    pub const fn is_pulsing(self) -> bool {
        matches!(self, AnimationStage::Frozen)
    }

    /// Whether the name flash treatment should show.
    #[inline]
    pub const fn is_flashing(self) -> bool {
        matches!(self, AnimationStage::Flashing)
    }

    /// Whether the tagline reveal treatment should show.
    #[inline]
    pub const fn is_revealing(self) -> bool {
        matches!(self, AnimationStage::Revealing)
    }

    /// Whether the sequence has completed.
    #[inline]
    pub const fn is_complete(self) -> bool {
        self.is_terminal()
    }

    /// Whether the backdrop should render faded.
    ///
    /// Fading starts with the reveal and persists through completion.
    #[inline]
    pub const fn should_fade_background(self) -> bool {
        matches!(self, AnimationStage::Revealing | AnimationStage::Finished)
    }

    /// Whether the opening overlay should no longer be drawn at all.
    #[inline]
    pub const fn should_hide(self) -> bool {
        matches!(self, AnimationStage::Finished)
    }
}

impl fmt::Display for AnimationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// What a due timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageTimer {
    /// Enter `Flashing`, then arm the reveal timer
    Flash,
    /// Enter `Revealing`, then arm the finish timer
    Reveal,
    /// Enter `Finished` (also the lone reduced-motion timer)
    Finish,
}

/// Messages the sequencer sends back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The opening sequence reached `Finished`. Sent exactly once per run.
    Completed,
}

/// State machine for the opening animation.
///
/// Construct one with the sending half of a channel, call
/// [`OpeningSequencer::start`] when the opening screen mounts, then
/// [`OpeningSequencer::poll`] on every pass of the event loop. The host
/// receives [`SequencerEvent::Completed`] on the channel exactly once.
///
/// ```
/// use std::sync::mpsc;
/// use std::time::{Duration, Instant};
/// use termfolio::capabilities::EnvCapabilities;
/// use termfolio::sequencer::{AnimationStage, OpeningSequencer, SequencerEvent};
///
/// let (tx, rx) = mpsc::channel();
/// let mut seq = OpeningSequencer::new(tx);
/// let t0 = Instant::now();
/// seq.start(&EnvCapabilities::full_motion(), t0);
/// seq.poll(t0 + Duration::from_millis(3500));
/// assert_eq!(seq.stage(), AnimationStage::Finished);
/// assert_eq!(rx.try_recv(), Ok(SequencerEvent::Completed));
/// ```
#[derive(Debug)]
pub struct OpeningSequencer {
    /// Current animation stage
    stage: AnimationStage,
    /// Pending one-shot timers (at most one at any instant)
    timers: TimerSet<StageTimer>,
    /// Snapshot of the motion preference taken when `start` ran
    reduced_motion: bool,
    /// Whether `start` has run
    started: bool,
    /// Whether `teardown` has run; a torn-down sequencer ignores everything
    torn_down: bool,
    /// Whether the completion event has been sent
    completion_sent: bool,
    /// Channel back to the host event loop
    events: Sender<SequencerEvent>,
}

impl OpeningSequencer {
    /// Create a sequencer in the `Frozen` stage with no timers armed.
    pub fn new(events: Sender<SequencerEvent>) -> Self {
        Self {
            stage: AnimationStage::Frozen,
            timers: TimerSet::new(),
            reduced_motion: false,
            started: false,
            torn_down: false,
            completion_sent: false,
            events,
        }
    }

    /// Begin the sequence, arming the first timer relative to `now`.
    ///
    /// The motion preference is sampled here, once; changing the
    /// environment mid-run has no effect on a run already started.
    /// Calling `start` again, or after `skip` or `teardown`, is a no-op.
    pub fn start(&mut self, caps: &EnvCapabilities, now: Instant) {
        if self.started || self.torn_down || self.stage.is_terminal() {
            return;
        }
        self.started = true;
        self.reduced_motion = caps.reduced_motion();
        if self.reduced_motion {
            self.timers.arm(StageTimer::Finish, now + REDUCED_MOTION_DELAY);
            debug!("opening sequence started (reduced motion, single timer)");
        } else {
            self.timers.arm(StageTimer::Flash, now + FLASH_DELAY);
            debug!("opening sequence started");
        }
    }

    /// Fire every timer that has come due by `now`.
    ///
    /// A poll that arrives long after several deadlines drains them in
    /// order, so one late poll still walks the stages one at a time and
    /// lands on the same final state an on-time caller would see.
    pub fn poll(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        while let Some((tag, deadline)) = self.timers.pop_due(now) {
            self.fire(tag, deadline);
        }
    }

    /// Jump straight to `Finished`, cancelling all pending timers.
    ///
    /// Safe to call at any point in the sequence and idempotent: once the
    /// sequence has finished, further skips change nothing and the
    /// completion event is never re-sent.
    pub fn skip(&mut self) {
        if self.torn_down || self.stage.is_terminal() {
            return;
        }
        let cancelled = self.timers.cancel_all();
        debug!("opening sequence skipped ({cancelled} timer(s) cancelled)");
        self.enter(AnimationStage::Finished);
    }

    /// Shut the sequencer down without finishing the sequence.
    ///
    /// Cancels all pending timers and freezes the current stage. No
    /// completion event is sent, and later polls or skips do nothing.
    /// Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let cancelled = self.timers.cancel_all();
        debug!(
            "sequencer torn down at stage {} ({cancelled} timer(s) cancelled)",
            self.stage
        );
    }

    fn fire(&mut self, tag: StageTimer, deadline: Instant) {
        if self.stage.is_terminal() {
            return;
        }
        match tag {
            StageTimer::Flash => {
                self.enter(AnimationStage::Flashing);
                self.timers.arm(StageTimer::Reveal, deadline + REVEAL_DELAY);
            }
            StageTimer::Reveal => {
                self.enter(AnimationStage::Revealing);
                self.timers.arm(StageTimer::Finish, deadline + FINISH_DELAY);
            }
            StageTimer::Finish => {
                self.enter(AnimationStage::Finished);
            }
        }
    }

    fn enter(&mut self, target: AnimationStage) {
        // Forward-only; a stale transition can never rewind the sequence
        if target.order() <= self.stage.order() {
            return;
        }
        debug!("animation stage transition: {} -> {}", self.stage, target);
        self.stage = target;
        if target.is_terminal() {
            self.send_completion();
        }
    }

    fn send_completion(&mut self) {
        if self.completion_sent {
            return;
        }
        self.completion_sent = true;
        info!("opening sequence complete");
        // The receiver may already be gone during shutdown
        let _ = self.events.send(SequencerEvent::Completed);
    }

    /// Current animation stage.
    #[inline]
    pub fn stage(&self) -> AnimationStage {
        self.stage
    }

    /// Whether `start` has been called.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether `teardown` has been called.
    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the completion event has been sent.
    #[inline]
    pub fn has_completed(&self) -> bool {
        self.completion_sent
    }

    /// The motion preference snapshot taken at `start`.
    #[inline]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Number of timers currently armed.
    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
