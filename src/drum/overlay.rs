use crate::drum::layout::OverlayLayout;
use crate::drum::tracker::TouchTracker;
use crate::drum::zone::{action_for_zone, TouchControlScheme};
use crate::drum::{ActionSink, DrumAction};
use cgmath::Point2;
use log::debug;

/// The drum touch input area: classifies contact points into zones, remaps
/// them through the configured control scheme, and keeps one held action per
/// contact so releases pair with their presses under multi-touch.
///
/// All collaborators are passed in at construction: the zone geometry, the
/// scheme (read once per session), and the keybinding sink that receives the
/// logical press/release events.
pub struct DrumTouchArea<S: ActionSink> {
    layout: OverlayLayout,
    scheme: TouchControlScheme,
    tracker: TouchTracker,
    sink: S,
    visible: bool,
}

impl<S: ActionSink> DrumTouchArea<S> {
    pub fn new(layout: OverlayLayout, scheme: TouchControlScheme, sink: S) -> Self {
        Self {
            layout,
            scheme,
            tracker: TouchTracker::new(),
            sink,
            visible: false,
        }
    }

    /// A contact went down at `point`. Resolves the action and, if this
    /// source is not already held, triggers exactly one `pressed` dispatch.
    /// A duplicate press for a live source changes nothing and dispatches
    /// nothing. Returns the resolved action either way.
    pub fn touch_down(&mut self, source: u64, point: Point2<f32>) -> DrumAction {
        self.show();

        let zone = self.layout.zone_at(point);
        let action = action_for_zone(zone, self.scheme);

        if self.tracker.press(source, action) {
            debug!("touch {source}: {zone:?} -> {action:?} pressed");
            self.sink.pressed(action);
        }
        action
    }

    /// A contact went up. Unknown sources (spurious hardware up-events) are
    /// a benign no-op: nothing is dispatched and `None` is returned.
    pub fn touch_up(&mut self, source: u64) -> Option<DrumAction> {
        let action = self.tracker.release(source)?;
        debug!("touch {source}: {action:?} released");
        self.sink.released(action);
        Some(action)
    }

    /// Releases every held contact, dispatching a `released` for each. Used
    /// when the host cancels touches (device loss, window focus loss).
    pub fn cancel_all(&mut self) {
        for (source, action) in self.tracker.release_all() {
            debug!("touch {source}: {action:?} released (cancelled)");
            self.sink.released(action);
        }
    }

    /// Keyboard activity hides the overlay; held touches stay held.
    pub fn key_down(&mut self) {
        self.visible = false;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    /// Window resizes replace the geometry. Contacts held across the resize
    /// keep the action they resolved to at press time.
    pub fn set_layout(&mut self, layout: OverlayLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn active_touches(&self) -> usize {
        self.tracker.active_count()
    }
}
