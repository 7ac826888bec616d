use crate::drum::DrumAction;

/// One live contact: the source handle the input layer issued for it and the
/// action being held on its behalf.
#[derive(Clone, Copy, Debug)]
struct TouchSlot {
    source: u64,
    action: DrumAction,
}

/// Arena of touch slots, one per concurrent contact, keyed by the stable
/// integer handle the input layer issues (winit touch id, or the reserved
/// mouse handle). Invariant: at most one slot per source.
///
/// Concurrent contacts stay in single digits, so a linear scan over a small
/// vec beats hashing here.
#[derive(Default)]
pub struct TouchTracker {
    slots: Vec<Option<TouchSlot>>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `source` as holding `action`. Returns `false` without touching
    /// any state if the source is already tracked; a duplicate press must not
    /// overwrite the held action or re-dispatch.
    pub fn press(&mut self, source: u64, action: DrumAction) -> bool {
        if self.held(source).is_some() {
            return false;
        }

        let slot = TouchSlot { source, action };
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(free) => *free = Some(slot),
            None => self.slots.push(Some(slot)),
        }
        true
    }

    /// Removes `source` and returns the action it was holding. Unknown
    /// sources return `None`; spurious up-events are not an error.
    pub fn release(&mut self, source: u64) -> Option<DrumAction> {
        self.slots
            .iter_mut()
            .find(|s| s.is_some_and(|slot| slot.source == source))
            .and_then(|s| s.take())
            .map(|slot| slot.action)
    }

    pub fn held(&self, source: u64) -> Option<DrumAction> {
        self.slots
            .iter()
            .flatten()
            .find(|slot| slot.source == source)
            .map(|slot| slot.action)
    }

    /// Drains every live slot, returning the held (source, action) pairs.
    pub fn release_all(&mut self) -> Vec<(u64, DrumAction)> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.take())
            .map(|slot| (slot.source, slot.action))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_pairs_up() {
        let mut tracker = TouchTracker::new();
        assert!(tracker.press(1, DrumAction::LeftRim));
        assert_eq!(tracker.held(1), Some(DrumAction::LeftRim));
        assert_eq!(tracker.release(1), Some(DrumAction::LeftRim));
        assert_eq!(tracker.held(1), None);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn duplicate_press_is_ignored() {
        let mut tracker = TouchTracker::new();
        assert!(tracker.press(7, DrumAction::LeftCentre));
        assert!(!tracker.press(7, DrumAction::RightRim));
        // The first action survives the redundant press.
        assert_eq!(tracker.held(7), Some(DrumAction::LeftCentre));
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn release_of_unknown_source_is_a_no_op() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.release(42), None);
        tracker.press(1, DrumAction::RightCentre);
        assert_eq!(tracker.release(42), None);
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn slots_are_reused_after_release() {
        let mut tracker = TouchTracker::new();
        tracker.press(1, DrumAction::LeftRim);
        tracker.press(2, DrumAction::RightRim);
        tracker.release(1);
        tracker.press(3, DrumAction::LeftCentre);
        // Slot from source 1 was recycled rather than growing the arena.
        assert_eq!(tracker.slots.len(), 2);
        assert_eq!(tracker.held(2), Some(DrumAction::RightRim));
        assert_eq!(tracker.held(3), Some(DrumAction::LeftCentre));
    }

    #[test]
    fn concurrent_sources_are_independent() {
        let mut tracker = TouchTracker::new();
        tracker.press(1, DrumAction::LeftRim);
        tracker.press(2, DrumAction::RightRim);
        assert_eq!(tracker.release(2), Some(DrumAction::RightRim));
        assert_eq!(tracker.release(1), Some(DrumAction::LeftRim));
    }

    #[test]
    fn release_all_drains_everything() {
        let mut tracker = TouchTracker::new();
        tracker.press(1, DrumAction::LeftRim);
        tracker.press(2, DrumAction::LeftCentre);
        let mut drained = tracker.release_all();
        drained.sort_by_key(|&(source, _)| source);
        assert_eq!(drained, vec![(1, DrumAction::LeftRim), (2, DrumAction::LeftCentre)]);
        assert_eq!(tracker.active_count(), 0);
    }
}
