use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVisibility {
    Visible,
    Hidden,
}

impl NavbarVisibility {
    pub fn is_visible(self) -> bool {
        matches!(self, NavbarVisibility::Visible)
    }
}

pub enum ScrollAction {
    Moved(f64),
}

/// Hides the navbar while the page scrolls down and shows it again on any
/// other movement. Only the last observed offset is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    pub last_offset: f64,
    pub visibility: NavbarVisibility,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            visibility: NavbarVisibility::Visible,
        }
    }
}

impl ScrollTracker {
    pub fn observe(&mut self, offset: f64) -> NavbarVisibility {
        self.visibility = if offset > self.last_offset {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Visible
        };
        self.last_offset = offset;
        self.visibility
    }
}

impl Reducible for ScrollTracker {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ScrollAction::Moved(offset) => {
                let mut next = (*self).clone();
                next.observe(offset);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(offsets: &[f64]) -> Vec<NavbarVisibility> {
        let mut tracker = ScrollTracker::default();
        offsets.iter().map(|&offset| tracker.observe(offset)).collect()
    }

    #[test]
    fn starts_visible_at_top() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.visibility, NavbarVisibility::Visible);
        assert_eq!(tracker.last_offset, 0.0);
    }

    #[test]
    fn hides_only_when_offset_strictly_increases() {
        use NavbarVisibility::{Hidden, Visible};

        let offsets = [10.0, 250.0, 250.0, 120.0, 121.0, 0.0, 0.0];
        assert_eq!(
            replay(&offsets),
            vec![Hidden, Hidden, Visible, Visible, Hidden, Visible, Visible]
        );
    }

    #[test]
    fn matches_pairwise_delta_for_arbitrary_sequence() {
        let offsets = [3.5, 1.0, 900.0, 899.5, 899.5, 1200.25, 40.0, 41.0];
        let observed = replay(&offsets);

        let mut previous = 0.0;
        for (offset, visibility) in offsets.iter().zip(observed) {
            assert_eq!(visibility.is_visible(), *offset <= previous);
            previous = *offset;
        }
    }

    #[test]
    fn reducer_remembers_last_offset() {
        let tracker = Rc::new(ScrollTracker::default());
        let tracker = tracker.reduce(ScrollAction::Moved(480.0));
        assert_eq!(tracker.visibility, NavbarVisibility::Hidden);
        assert_eq!(tracker.last_offset, 480.0);

        let tracker = tracker.reduce(ScrollAction::Moved(200.0));
        assert_eq!(tracker.visibility, NavbarVisibility::Visible);
        assert_eq!(tracker.last_offset, 200.0);
    }
}
