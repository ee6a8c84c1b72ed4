//! Debounced input for bubbletea-rs applications.
//!
//! A debouncer holds a settled value and, while the user is still typing, a
//! pending one. Every [`Model::set`] returns a tick command that fires after
//! the delay; only the tick carrying the most recent tag commits the pending
//! value. Ticks from superseded inputs arrive with an older tag and are
//! dropped, so a burst of N inputs produces exactly one commit, equal to the
//! last input.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_datagrid::debounce::{DebounceMsg, Model};
//! use bubbletea_rs::Msg;
//! use std::time::Duration;
//!
//! let mut search = Model::new(String::new(), Duration::from_millis(500));
//! let _cmd = search.set("al".to_string());
//! let _cmd = search.set("ali".to_string());
//!
//! // The runtime delivers the ticks later; only the latest one commits.
//! let stale: Msg = Box::new(DebounceMsg { id: search.id(), tag: search.tag() - 1 });
//! assert!(!search.update(&stale));
//! let live: Msg = Box::new(DebounceMsg { id: search.id(), tag: search.tag() });
//! assert!(search.update(&live));
//! assert_eq!(search.value(), "ali");
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Delay applied to filter inputs unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent when a debounce delay elapses.
///
/// Only the debouncer with the matching `id` reacts, and only if `tag` is
/// still its current tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMsg {
    /// The debouncer this tick belongs to.
    pub id: i64,
    /// The input generation this tick was scheduled for.
    pub tag: i64,
}

/// A value that settles only after its input has been stable for a delay.
#[derive(Debug, Clone)]
pub struct Model<T> {
    id: i64,
    tag: i64,
    delay: Duration,
    value: T,
    pending: Option<T>,
}

impl<T: Clone + PartialEq> Model<T> {
    /// Creates a debouncer with the given settled value and delay.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            delay,
            value: initial,
            pending: None,
        }
    }

    /// Unique id of this debouncer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Tag of the most recently scheduled tick.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// The delay between the last input and the commit.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The settled value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The latest input that has not settled yet.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns true while an input is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new input and returns the command that will settle it.
    ///
    /// Any tick scheduled by an earlier call becomes stale.
    pub fn set(&mut self, input: T) -> Cmd {
        self.pending = Some(input);
        self.tag += 1;
        self.tick()
    }

    /// The message the live tick will deliver, if an input is pending.
    pub fn pending_msg(&self) -> Option<DebounceMsg> {
        self.pending.as_ref().map(|_| DebounceMsg {
            id: self.id,
            tag: self.tag,
        })
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Handles a message, committing the pending input if it is this
    /// debouncer's live tick.
    ///
    /// Returns true if the settled value changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(tick) = msg.downcast_ref::<DebounceMsg>() else {
            return false;
        };
        if tick.id != self.id {
            return false;
        }
        if tick.tag != self.tag {
            log::trace!("debounce {}: dropping stale tick {} (live {})", self.id, tick.tag, self.tag);
            return false;
        }
        self.commit()
    }

    /// Commits the pending input immediately. Returns true if the settled value changed.
    pub fn flush(&mut self) -> bool {
        // Outstanding ticks must not commit a second time.
        self.tag += 1;
        self.commit()
    }

    fn commit(&mut self) -> bool {
        let Some(next) = self.pending.take() else {
            return false;
        };
        if next == self.value {
            return false;
        }
        log::debug!("debounce {}: settled after {:?}", self.id, self.delay);
        self.value = next;
        true
    }

    /// Drops any pending input and invalidates outstanding ticks.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.tag += 1;
    }

    /// Replaces the settled value directly, cancelling pending input.
    pub fn reset(&mut self, value: T) {
        self.cancel();
        self.value = value;
    }
}
