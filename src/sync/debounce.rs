//! Debounce core for the window-position save.
//!
//! Every window-move event supersedes the previously scheduled save; the
//! save only happens once the 500 ms quiet period elapses without another
//! move. The platform layer owns the actual timer; this core owns the
//! supersede/cancel logic so it can be tested without a run loop.
//!
//! Each `note_move` returns a generation token. The delayed task captures
//! its token and calls `try_commit` when it fires: only the token from the
//! most recent move wins, so a stale timer that slipped past cancellation
//! is still a no-op.

/// Generation-token debouncer for the pending position write.
#[derive(Debug, Default)]
pub struct PositionDebouncer {
    generation: u64,
    pending: Option<(f64, f64)>,
}

impl PositionDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move and supersede any pending save. Returns the token the
    /// newly scheduled delayed task must present to commit.
    pub fn note_move(&mut self, x: f64, y: f64) -> u64 {
        self.generation += 1;
        self.pending = Some((x, y));
        self.generation
    }

    /// Attempt to commit the save belonging to `token`. Yields the position
    /// to persist only if the token is still current and a save is pending;
    /// superseded or already-committed tokens yield `None`.
    pub fn try_commit(&mut self, token: u64) -> Option<(f64, f64)> {
        if token == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending save without persisting (teardown path).
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// True while a save is scheduled but not yet committed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_move_commits_once() {
        let mut d = PositionDebouncer::new();
        let t = d.note_move(10.0, 20.0);
        assert_eq!(d.try_commit(t), Some((10.0, 20.0)));
        // Firing again (timer misbehavior) must not double-write.
        assert_eq!(d.try_commit(t), None);
    }

    #[test]
    fn burst_of_moves_commits_only_the_last_position() {
        let mut d = PositionDebouncer::new();
        let mut last = 0;
        for i in 0..10 {
            last = d.note_move(f64::from(i), f64::from(i) * 2.0);
        }
        // Earlier tokens were superseded.
        assert_eq!(d.try_commit(last - 1), None);
        assert_eq!(d.try_commit(last), Some((9.0, 18.0)));
        assert!(!d.has_pending());
    }

    #[test]
    fn stale_token_never_commits_even_after_new_commit() {
        let mut d = PositionDebouncer::new();
        let t1 = d.note_move(1.0, 1.0);
        let t2 = d.note_move(2.0, 2.0);
        assert_eq!(d.try_commit(t2), Some((2.0, 2.0)));
        assert_eq!(d.try_commit(t1), None);
    }

    #[test]
    fn cancel_discards_pending_save() {
        let mut d = PositionDebouncer::new();
        let t = d.note_move(5.0, 5.0);
        d.cancel();
        assert_eq!(d.try_commit(t), None);
        assert!(!d.has_pending());
    }

    #[test]
    fn move_after_commit_starts_a_fresh_cycle() {
        let mut d = PositionDebouncer::new();
        let t1 = d.note_move(1.0, 1.0);
        assert!(d.try_commit(t1).is_some());
        let t2 = d.note_move(3.0, 4.0);
        assert_eq!(d.try_commit(t2), Some((3.0, 4.0)));
    }
}
