//! Difficulty profiles
//!
//! One profile is picked at startup from the device class and never changes
//! afterwards. Touch devices get a wider gap, slower pipes and floatier
//! physics.


/// Coarse device class chosen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Phones and tablets
    Compact,
    #[default]
    Standard,
}

impl DeviceClass {
    pub fn from_compact_flag(compact: bool) -> Self {
        if compact {
            DeviceClass::Compact
        } else {
            DeviceClass::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Compact => "compact",
            DeviceClass::Standard => "standard",
        }
    }
}

/// Tunable gameplay constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Vertical size of every obstacle gap
    pub gap_height: f32,
    /// Obstacle movement per tick (negative = leftward)
    pub horizontal_speed: f32,
    /// Velocity added to the mover every tick
    pub gravity: f32,
    /// Upward speed set by a flap
    pub jump_impulse: f32,
}

impl DifficultyProfile {
    pub const COMPACT: Self = Self {
        gap_height: 170.0,
        horizontal_speed: -2.5,
        gravity: 0.20,
        jump_impulse: 4.2,
    };

    pub const STANDARD: Self = Self {
        gap_height: 150.0,
        horizontal_speed: -3.0,
        gravity: 0.25,
        jump_impulse: 4.5,
    };

    pub fn for_device(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Compact => Self::COMPACT,
            DeviceClass::Standard => Self::STANDARD,
        }
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}
