//! Request-coalescing state machine
//!
//! The machine reconciles rapid, possibly overlapping criteria changes
//! against a single outstanding fetch. It is a pure `transition(event) ->
//! effect` function over explicit state, independent of any async runtime or
//! UI re-render mechanism; the controller drives it and interprets the
//! effects.
//!
//! Invariants:
//! - at most one fetch is outstanding at any time;
//! - the displayed collection, once all work settles, reflects the most
//!   recently requested criteria;
//! - a result computed for superseded criteria is discarded, never shown as
//!   final.

use crate::core::criteria::FilterCriteria;
use crate::core::listing::Listing;

/// Whether a fetch is currently outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Refreshing,
}

/// An input to the machine
#[derive(Debug, Clone)]
pub enum Event {
    /// A filter control changed; the view should come to reflect `criteria`
    Requested(FilterCriteria),
    /// The outstanding fetch resolved with `items` for `for_criteria`
    Completed {
        for_criteria: FilterCriteria,
        items: Vec<Listing>,
    },
    /// The outstanding fetch failed; `displayed` is left untouched
    Failed { for_criteria: FilterCriteria },
}

/// What the driver must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Begin a fetch with these criteria. Never emitted while another fetch
    /// is still outstanding.
    StartFetch(FilterCriteria),
}

/// The machine's explicit state
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    pub phase: Phase,
    /// The most recently requested criteria. May be ahead of what the
    /// in-flight fetch was started with.
    pub latest_requested: FilterCriteria,
    /// Last successfully resolved collection
    pub displayed: Vec<Listing>,
}

impl MachineState {
    /// Seed the machine with an already-resolved collection, so mounting
    /// with server-supplied listings does not trigger a fetch.
    pub fn seeded(criteria: FilterCriteria, displayed: Vec<Listing>) -> Self {
        Self {
            phase: Phase::Idle,
            latest_requested: criteria,
            displayed,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == Phase::Refreshing
    }

    /// Apply one event, returning the effect the driver must carry out
    pub fn transition(&mut self, event: Event) -> Effect {
        match (self.phase, event) {
            (Phase::Idle, Event::Requested(criteria)) => {
                self.latest_requested = criteria.clone();
                self.phase = Phase::Refreshing;
                Effect::StartFetch(criteria)
            }
            // The in-flight fetch is not cancelled; its completion will
            // notice the criteria moved and re-issue.
            (Phase::Refreshing, Event::Requested(criteria)) => {
                self.latest_requested = criteria;
                Effect::None
            }
            (Phase::Refreshing, Event::Completed { for_criteria, items }) => {
                if for_criteria == self.latest_requested {
                    self.displayed = items;
                    self.phase = Phase::Idle;
                    Effect::None
                } else {
                    // Stale result: discard and immediately chase the
                    // current criteria.
                    Effect::StartFetch(self.latest_requested.clone())
                }
            }
            (Phase::Refreshing, Event::Failed { .. }) => {
                self.phase = Phase::Idle;
                Effect::None
            }
            // Completions can only arrive while Refreshing; anything else
            // is a late echo and is ignored.
            (Phase::Idle, Event::Completed { .. }) | (Phase::Idle, Event::Failed { .. }) => {
                Effect::None
            }
        }
    }
}
