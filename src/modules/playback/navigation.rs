use crate::core::events::CloseReason;
use serde::{Deserialize, Serialize};

/// Directional intent, from a tap, a key, or timer completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Open(usize),
    Closed,
}

/// Result of applying an [`Intent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to a different slide
    Moved { from: usize, to: usize },
    /// Intent had no effect (retreat on the first slide, or already closed)
    Stayed,
    /// Reached the terminal state
    Closed(CloseReason),
}

/// Index state machine over a sequence of `len` slides.
///
/// `Closed` is terminal: every intent applied afterwards is `Stayed`.
#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    state: NavState,
}

impl Navigator {
    /// Opens at the first slide; an empty sequence starts closed.
    pub fn new(len: usize) -> Self {
        let state = if len == 0 {
            NavState::Closed
        } else {
            NavState::Open(0)
        };

        Self { len, state }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_closed(&self) -> bool {
        self.state == NavState::Closed
    }

    /// Current index while open
    pub fn index(&self) -> Option<usize> {
        match self.state {
            NavState::Open(idx) => Some(idx),
            NavState::Closed => None,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Transition {
        let NavState::Open(idx) = self.state else {
            return Transition::Stayed;
        };

        match intent {
            Intent::Advance => {
                let next = idx + 1;
                if next < self.len {
                    self.state = NavState::Open(next);
                    Transition::Moved { from: idx, to: next }
                } else {
                    self.state = NavState::Closed;
                    Transition::Closed(CloseReason::Completed)
                }
            }
            Intent::Retreat => {
                if idx > 0 {
                    self.state = NavState::Open(idx - 1);
                    Transition::Moved { from: idx, to: idx - 1 }
                } else {
                    Transition::Stayed
                }
            }
            Intent::Close => {
                self.state = NavState::Closed;
                Transition::Closed(CloseReason::Dismissed)
            }
        }
    }
}

/// Horizontal split of the viewing surface into back / neutral / forward regions.
///
/// Fractions are of the surface width; the neutral middle is whatever remains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TapZones {
    pub back: f64,
    pub forward: f64,
}

impl Default for TapZones {
    fn default() -> Self {
        Self {
            back: 0.35,
            forward: 0.35,
        }
    }
}

impl TapZones {
    /// Map a tap to an intent.
    ///
    /// # Returns
    /// * `Some(Intent::Retreat)` - tap in the left zone
    /// * `Some(Intent::Advance)` - tap in the right zone
    /// * `None` - neutral middle, or a degenerate surface/coordinate
    pub fn classify(&self, x: f64, width: f64) -> Option<Intent> {
        if !width.is_finite() || width <= 0.0 || !x.is_finite() {
            return None;
        }

        let fraction = (x / width).clamp(0.0, 1.0);

        if fraction < self.back {
            Some(Intent::Retreat)
        } else if fraction > 1.0 - self.forward {
            Some(Intent::Advance)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn new_opens_at_first_slide() {
        let nav = Navigator::new(3);
        assert_eq!(nav.state(), NavState::Open(0));
        assert_eq!(nav.index(), Some(0));
    }

    #[test]
    fn empty_sequence_starts_closed() {
        let nav = Navigator::new(0);
        assert!(nav.is_closed());
        assert_eq!(nav.index(), None);
    }

    // ── Advance ───────────────────────────────────────────────────────────────

    #[test]
    fn advance_moves_forward_until_last_then_closes() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.apply(Intent::Advance), Transition::Moved { from: 0, to: 1 });
        assert_eq!(nav.apply(Intent::Advance), Transition::Moved { from: 1, to: 2 });
        assert_eq!(
            nav.apply(Intent::Advance),
            Transition::Closed(CloseReason::Completed)
        );
        assert!(nav.is_closed());
    }

    #[test]
    fn closes_after_exactly_remaining_advances_from_any_index() {
        const LEN: usize = 6;
        for start in 0..LEN {
            let mut nav = Navigator::new(LEN);
            for _ in 0..start {
                nav.apply(Intent::Advance);
            }
            assert_eq!(nav.index(), Some(start));

            let mut advances = 0;
            while !nav.is_closed() {
                nav.apply(Intent::Advance);
                advances += 1;
                assert!(advances <= LEN, "navigator never closed");
            }
            assert_eq!(advances, LEN - start, "from index {start}");
        }
    }

    #[test]
    fn single_slide_closes_on_first_advance() {
        let mut nav = Navigator::new(1);
        assert_eq!(
            nav.apply(Intent::Advance),
            Transition::Closed(CloseReason::Completed)
        );
    }

    // ── Retreat ───────────────────────────────────────────────────────────────

    #[test]
    fn retreat_at_first_slide_is_noop() {
        let mut nav = Navigator::new(3);
        assert_eq!(nav.apply(Intent::Retreat), Transition::Stayed);
        assert_eq!(nav.state(), NavState::Open(0), "must stay open at index 0");
    }

    #[test]
    fn retreat_moves_back_one() {
        let mut nav = Navigator::new(3);
        nav.apply(Intent::Advance);
        nav.apply(Intent::Advance);
        assert_eq!(nav.apply(Intent::Retreat), Transition::Moved { from: 2, to: 1 });
    }

    // ── Close ─────────────────────────────────────────────────────────────────

    #[test]
    fn close_from_any_index_is_dismissal() {
        let mut nav = Navigator::new(4);
        nav.apply(Intent::Advance);
        assert_eq!(
            nav.apply(Intent::Close),
            Transition::Closed(CloseReason::Dismissed)
        );
    }

    #[test]
    fn closed_is_terminal() {
        let mut nav = Navigator::new(2);
        nav.apply(Intent::Close);
        for intent in [Intent::Advance, Intent::Retreat, Intent::Close] {
            assert_eq!(nav.apply(intent), Transition::Stayed);
            assert!(nav.is_closed());
        }
    }

    // ── TapZones ──────────────────────────────────────────────────────────────

    #[test]
    fn tap_zone_mapping_matches_regions() {
        let zones = TapZones::default();
        assert_eq!(zones.classify(10.0, 100.0), Some(Intent::Retreat));
        assert_eq!(zones.classify(90.0, 100.0), Some(Intent::Advance));
        assert_eq!(zones.classify(50.0, 100.0), None);
    }

    #[test]
    fn tap_zone_boundaries() {
        let zones = TapZones::default();
        assert_eq!(zones.classify(34.0, 100.0), Some(Intent::Retreat));
        assert_eq!(zones.classify(36.0, 100.0), None);
        assert_eq!(zones.classify(64.0, 100.0), None);
        assert_eq!(zones.classify(66.0, 100.0), Some(Intent::Advance));
    }

    #[test]
    fn tap_outside_surface_is_clamped() {
        let zones = TapZones::default();
        assert_eq!(zones.classify(-20.0, 100.0), Some(Intent::Retreat));
        assert_eq!(zones.classify(400.0, 100.0), Some(Intent::Advance));
    }

    #[test]
    fn degenerate_surface_is_neutral() {
        let zones = TapZones::default();
        assert_eq!(zones.classify(10.0, 0.0), None);
        assert_eq!(zones.classify(10.0, -5.0), None);
        assert_eq!(zones.classify(f64::NAN, 100.0), None);
        assert_eq!(zones.classify(10.0, f64::INFINITY), None);
    }
}
