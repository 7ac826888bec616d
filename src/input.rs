use crate::drum::DrumAction;
use winit::keyboard::KeyCode;

/// Default desktop bindings: D F J K across the drum, matching the KDDK
/// physical layout. Keyboard input bypasses the touch overlay and the
/// control scheme; schemes only remap where a *touch* lands.
#[inline(always)]
pub fn action_from_keycode(code: KeyCode) -> Option<DrumAction> {
    match code {
        KeyCode::KeyD => Some(DrumAction::LeftRim),
        KeyCode::KeyF => Some(DrumAction::LeftCentre),
        KeyCode::KeyJ => Some(DrumAction::RightCentre),
        KeyCode::KeyK => Some(DrumAction::RightRim),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_row_maps_across_the_drum() {
        assert_eq!(action_from_keycode(KeyCode::KeyD), Some(DrumAction::LeftRim));
        assert_eq!(action_from_keycode(KeyCode::KeyF), Some(DrumAction::LeftCentre));
        assert_eq!(action_from_keycode(KeyCode::KeyJ), Some(DrumAction::RightCentre));
        assert_eq!(action_from_keycode(KeyCode::KeyK), Some(DrumAction::RightRim));
    }

    #[test]
    fn unbound_keys_are_none() {
        assert_eq!(action_from_keycode(KeyCode::Space), None);
        assert_eq!(action_from_keycode(KeyCode::KeyA), None);
    }
}
