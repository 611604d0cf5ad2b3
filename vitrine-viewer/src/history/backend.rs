//! Navigation history backend seam
//!
//! The backend owns the process-wide history stack and URL fragment.
//! Frame payloads round-trip through JSON values the way `history.state`
//! survives a structured clone, so malformed or foreign payloads degrade
//! to "nothing open" instead of failing.

use std::collections::VecDeque;

use serde_json::Value;
use vitrine_model::NavigationEntry;

/// Mutating surface of the navigation history.
///
/// `back`/`forward` are requests: the state change arrives later as a
/// navigation notification delivered by the host, never synchronously.
pub trait HistoryBackend {
    /// Append a frame carrying `entry`, dropping any forward frames.
    fn push(&mut self, entry: &NavigationEntry);
    /// Overwrite the current frame with `entry` without changing depth.
    fn replace(&mut self, entry: &NavigationEntry);
    /// Request one step back in the stack.
    fn back(&mut self);
    /// Request one step forward (browser forward button).
    fn forward(&mut self);
    /// Current URL fragment, without the leading `#`.
    fn fragment(&self) -> Option<String>;
}

#[derive(Debug, Clone)]
struct Frame {
    state: Value,
    fragment: Option<String>,
}

impl Frame {
    fn base(fragment: Option<String>) -> Self {
        Self {
            state: Value::Null,
            fragment,
        }
    }

    fn carrying(entry: &NavigationEntry) -> Self {
        Self {
            state: serde_json::to_value(entry).unwrap_or(Value::Null),
            fragment: entry.variation.as_ref().map(|id| id.as_str().to_owned()),
        }
    }

    /// Decode the frame payload. Null, missing, or malformed state all
    /// read as "no entry", matching how a browser hands back `null` for
    /// the base frame.
    fn entry(&self) -> Option<NavigationEntry> {
        match &self.state {
            Value::Null => None,
            state => serde_json::from_value(state.clone()).ok(),
        }
    }
}

/// In-process history: a frame stack with a cursor and a queue of
/// pending navigation notifications the host drains after each `back`
/// or `forward`. Serves headless hosts and tests alike.
#[derive(Debug)]
pub struct MemoryHistory {
    frames: Vec<Frame>,
    cursor: usize,
    pending: VecDeque<Option<NavigationEntry>>,
    pushes: usize,
    exits: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// Fresh history: one base frame, no fragment.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::base(None)],
            cursor: 0,
            pending: VecDeque::new(),
            pushes: 0,
            exits: 0,
        }
    }

    /// Fresh history loaded at `#fragment`.
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            frames: vec![Frame::base(Some(fragment.to_owned()))],
            cursor: 0,
            pending: VecDeque::new(),
            pushes: 0,
            exits: 0,
        }
    }

    /// Next queued navigation notification, oldest first. The inner
    /// `Option` is the frame payload: `None` for a base frame.
    pub fn pop_notification(&mut self) -> Option<Option<NavigationEntry>> {
        self.pending.pop_front()
    }

    /// Number of frames on the stack (not the cursor position).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Total push operations performed over the backend's lifetime.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    /// Back-steps taken at the base frame. In a browser each of these
    /// would leave the page instead of popping within this context.
    pub fn exit_requests(&self) -> usize {
        self.exits
    }

    /// Payload of the frame the cursor is on.
    pub fn current_entry(&self) -> Option<NavigationEntry> {
        self.frames[self.cursor].entry()
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, entry: &NavigationEntry) {
        self.frames.truncate(self.cursor + 1);
        self.frames.push(Frame::carrying(entry));
        self.cursor = self.frames.len() - 1;
        self.pushes += 1;
    }

    fn replace(&mut self, entry: &NavigationEntry) {
        self.frames[self.cursor] = Frame::carrying(entry);
    }

    fn back(&mut self) {
        if self.cursor == 0 {
            // Leaving the page is the host's concern; nothing to pop.
            self.exits += 1;
            log::debug!("back requested at base of history stack");
            return;
        }
        self.cursor -= 1;
        self.pending.push_back(self.frames[self.cursor].entry());
    }

    fn forward(&mut self) {
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
            self.pending.push_back(self.frames[self.cursor].entry());
        } else {
            log::debug!("forward requested at top of history stack");
        }
    }

    fn fragment(&self) -> Option<String> {
        self.frames[self.cursor].fragment.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::VariationId;

    fn open(raw: &str) -> NavigationEntry {
        NavigationEntry::open(VariationId::parse(raw).unwrap())
    }

    #[test]
    fn push_then_back_round_trips_the_entry() {
        let mut history = MemoryHistory::new();
        history.push(&open("v2"));
        assert_eq!(history.depth(), 2);
        assert_eq!(history.fragment().as_deref(), Some("v2"));

        history.back();
        assert_eq!(history.pop_notification(), Some(None));
        assert_eq!(history.fragment(), None);
    }

    #[test]
    fn replace_keeps_stack_depth() {
        let mut history = MemoryHistory::with_fragment("v5");
        history.replace(&open("v5"));
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current_entry(), Some(open("v5")));
        assert_eq!(history.fragment().as_deref(), Some("v5"));
    }

    #[test]
    fn push_truncates_forward_frames() {
        let mut history = MemoryHistory::new();
        history.push(&open("v2"));
        history.push(&open("v3"));
        history.back();
        history.pop_notification();
        history.push(&open("v4"));
        assert_eq!(history.depth(), 3);
        history.forward();
        assert_eq!(history.pop_notification(), None);
        assert_eq!(history.current_entry(), Some(open("v4")));
    }

    #[test]
    fn back_at_base_reads_as_a_page_exit() {
        let mut history = MemoryHistory::new();
        history.back();
        assert_eq!(history.pop_notification(), None);
        assert_eq!(history.depth(), 1);
        assert_eq!(history.exit_requests(), 1);
    }

    #[test]
    fn forward_retraverses_a_popped_frame() {
        let mut history = MemoryHistory::new();
        history.push(&open("v2"));
        history.back();
        history.pop_notification();
        history.forward();
        assert_eq!(history.pop_notification(), Some(Some(open("v2"))));
    }
}
