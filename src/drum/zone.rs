use crate::drum::DrumAction;

/// One of the four geometric zones a contact point can land in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DrumZone {
    LeftRim = 0,
    LeftCentre = 1,
    RightCentre = 2,
    RightRim = 3,
}

pub const ALL_ZONES: [DrumZone; 4] = [
    DrumZone::LeftRim,
    DrumZone::LeftCentre,
    DrumZone::RightCentre,
    DrumZone::RightRim,
];

/// Permutation applied between the zone a touch lands in and the action that
/// gets dispatched, modeling alternate physical drum layouts (K = kat/rim,
/// D = don/centre, read left to right across the four zones).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchControlScheme {
    #[default]
    Kddk,
    Ddkk,
    Kkdd,
}

impl TouchControlScheme {
    pub const ALL: [TouchControlScheme; 3] = [
        TouchControlScheme::Kddk,
        TouchControlScheme::Ddkk,
        TouchControlScheme::Kkdd,
    ];

    /// Name used in settings.ini and the options screen.
    pub const fn as_str(self) -> &'static str {
        match self {
            TouchControlScheme::Kddk => "KDDK",
            TouchControlScheme::Ddkk => "DDKK",
            TouchControlScheme::Kkdd => "KKDD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KDDK" => Some(TouchControlScheme::Kddk),
            "DDKK" => Some(TouchControlScheme::Ddkk),
            "KKDD" => Some(TouchControlScheme::Kkdd),
            _ => None,
        }
    }
}

/// Maps the zone a contact landed in to the action dispatched under the given
/// scheme. Within each scheme this is a bijection over the four actions.
pub fn action_for_zone(zone: DrumZone, scheme: TouchControlScheme) -> DrumAction {
    match scheme {
        TouchControlScheme::Kddk => match zone {
            DrumZone::LeftRim => DrumAction::LeftRim,
            DrumZone::LeftCentre => DrumAction::LeftCentre,
            DrumZone::RightCentre => DrumAction::RightCentre,
            DrumZone::RightRim => DrumAction::RightRim,
        },
        TouchControlScheme::Ddkk => match zone {
            DrumZone::LeftRim => DrumAction::LeftCentre,
            DrumZone::LeftCentre => DrumAction::RightCentre,
            DrumZone::RightCentre => DrumAction::LeftRim,
            DrumZone::RightRim => DrumAction::RightRim,
        },
        TouchControlScheme::Kkdd => match zone {
            DrumZone::LeftRim => DrumAction::LeftRim,
            DrumZone::LeftCentre => DrumAction::RightRim,
            DrumZone::RightCentre => DrumAction::LeftCentre,
            DrumZone::RightRim => DrumAction::RightCentre,
        },
    }
}
