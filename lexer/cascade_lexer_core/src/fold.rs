//! Per-line fold level tracking.
//!
//! Fold depth advances on `{`, `[`, `(` and block-comment open, retreats on
//! their closers, and is committed once per line. A line is a fold header
//! when it opens more than it closes — its committed level is below the
//! level the next line starts at.

/// Baseline fold level. Committed levels never go below this, so a document
/// that closes more blocks than it opened still produces valid levels.
pub const FOLD_BASE: u16 = 0x400;

/// Fold record committed for one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldLevel {
    /// Depth at the start of this line.
    pub level: u16,
    /// Depth the next line starts at.
    pub next: u16,
    /// This line opens a foldable region (`level < next`).
    pub header: bool,
}

impl Default for FoldLevel {
    fn default() -> Self {
        Self {
            level: FOLD_BASE,
            next: FOLD_BASE,
            header: false,
        }
    }
}

/// Running fold state for a scan.
///
/// `next` may dip below [`FOLD_BASE`] transiently inside a line (stray
/// closers); the commit clamps it back, so committed records are always
/// within range.
#[derive(Clone, Copy, Debug)]
pub struct FoldTracker {
    current: i32,
    next: i32,
}

impl Default for FoldTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldTracker {
    /// Tracker for a scan starting at the top of the document.
    pub fn new() -> Self {
        Self {
            current: i32::from(FOLD_BASE),
            next: i32::from(FOLD_BASE),
        }
    }

    /// Tracker resuming below a line whose committed record said the next
    /// line starts at `level`.
    pub fn resume(level: u16) -> Self {
        let level = i32::from(level.max(FOLD_BASE));
        Self {
            current: level,
            next: level,
        }
    }

    /// A block/bracket/comment region opened.
    #[inline]
    pub fn open(&mut self) {
        self.next += 1;
    }

    /// A block/bracket/comment region closed.
    #[inline]
    pub fn close(&mut self) {
        self.next -= 1;
    }

    /// Commit the record for the line just finished and roll the running
    /// depth forward.
    pub fn commit_line(&mut self) -> FoldLevel {
        self.next = self.next.max(i32::from(FOLD_BASE));
        let level = clamp_level(self.current);
        let next = clamp_level(self.next);
        let record = FoldLevel {
            level,
            next,
            header: level < next,
        };
        self.current = self.next;
        record
    }
}

fn clamp_level(level: i32) -> u16 {
    u16::try_from(level.max(i32::from(FOLD_BASE))).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_line_commits_base() {
        let mut tracker = FoldTracker::new();
        assert_eq!(tracker.commit_line(), FoldLevel::default());
    }

    #[test]
    fn opening_line_is_a_header() {
        let mut tracker = FoldTracker::new();
        tracker.open();
        let record = tracker.commit_line();
        assert_eq!(record.level, FOLD_BASE);
        assert_eq!(record.next, FOLD_BASE + 1);
        assert!(record.header);
    }

    #[test]
    fn closing_line_is_not_a_header() {
        let mut tracker = FoldTracker::new();
        tracker.open();
        tracker.commit_line();
        tracker.close();
        let record = tracker.commit_line();
        assert_eq!(record.level, FOLD_BASE + 1);
        assert_eq!(record.next, FOLD_BASE);
        assert!(!record.header);
    }

    #[test]
    fn open_and_close_on_one_line_is_flat() {
        let mut tracker = FoldTracker::new();
        tracker.open();
        tracker.close();
        let record = tracker.commit_line();
        assert_eq!(record, FoldLevel::default());
    }

    #[test]
    fn stray_closers_clamp_at_base() {
        let mut tracker = FoldTracker::new();
        tracker.close();
        tracker.close();
        let record = tracker.commit_line();
        assert_eq!(record.next, FOLD_BASE);
        // the clamp persists into the next line
        let record = tracker.commit_line();
        assert_eq!(record.level, FOLD_BASE);
    }

    #[test]
    fn close_then_open_inside_a_line_cancels() {
        // depth dips below base mid-line, recovers before the commit
        let mut tracker = FoldTracker::new();
        tracker.close();
        tracker.open();
        let record = tracker.commit_line();
        assert_eq!(record, FoldLevel::default());
    }

    #[test]
    fn resume_clamps_to_base() {
        let tracker = FoldTracker::resume(0);
        let mut tracker = tracker;
        assert_eq!(tracker.commit_line().level, FOLD_BASE);
    }

    #[test]
    fn resume_continues_depth() {
        let mut tracker = FoldTracker::resume(FOLD_BASE + 3);
        tracker.close();
        let record = tracker.commit_line();
        assert_eq!(record.level, FOLD_BASE + 3);
        assert_eq!(record.next, FOLD_BASE + 2);
        assert!(!record.header);
    }
}
