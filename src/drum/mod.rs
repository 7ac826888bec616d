pub mod layout;
pub mod overlay;
pub mod tracker;
pub mod zone;

/// A logical drum hit as delivered to the keybinding sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DrumAction {
    LeftRim = 0,
    LeftCentre = 1,
    RightCentre = 2,
    RightRim = 3,
}

impl DrumAction {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Receiver for logical press/release action events. The overlay calls this
/// exactly once per per-source transition.
pub trait ActionSink {
    fn pressed(&mut self, action: DrumAction);
    fn released(&mut self, action: DrumAction);
}
