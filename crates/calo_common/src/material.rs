use core::fmt;

/// Material of an ECAL channel.
///
/// Not stored in the channel id. It is derived from the (layer, slice) pair;
/// pairs without an assigned material map to `None`. The numeric values are
/// the type codes used by simulation output.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialType {
    /// No material assigned to this (layer, slice) pair.
    #[default]
    None = 0,
    /// Silicon photodiode readout.
    Photodiode = 1,
    /// Scintillating crystal.
    Crystal = 2,
    /// Air gap.
    Air = 3,
    /// Optical resin or cookie between crystal and photodiode.
    ResinCookie = 4,
}

impl MaterialType {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Photodiode),
            2 => Some(Self::Crystal),
            3 => Some(Self::Air),
            4 => Some(Self::ResinCookie),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Photodiode => "photodiode",
            Self::Crystal => "crystal",
            Self::Air => "air",
            Self::ResinCookie => "resin/cookie",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Medium of a fiber channel, from the `iair` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiberMedium {
    /// `iair == 0`.
    Solid,
    /// `iair` is 1 or 2. The raw value distinguishes the two hole kinds.
    AirHole,
}

impl FiberMedium {
    /// Classifies a raw `iair` value. Unassigned values (3-7) give `None`.
    pub const fn from_raw(iair: u8) -> Option<Self> {
        match iair {
            0 => Some(Self::Solid),
            1 | 2 => Some(Self::AirHole),
            _ => None,
        }
    }
}

impl fmt::Display for FiberMedium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => f.write_str("solid"),
            Self::AirHole => f.write_str("air"),
        }
    }
}

/// Material of a fiber channel, from the `itype` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiberMaterial {
    Generic,
    Scintillator,
    Quartz,
    /// `itype` is 3 or 4.
    Photodetector,
}

impl FiberMaterial {
    /// Classifies a raw `itype` value. Unassigned values (5-7) give `None`.
    pub const fn from_raw(itype: u8) -> Option<Self> {
        match itype {
            0 => Some(Self::Generic),
            1 => Some(Self::Scintillator),
            2 => Some(Self::Quartz),
            3 | 4 => Some(Self::Photodetector),
            _ => None,
        }
    }
}

impl fmt::Display for FiberMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("generic"),
            Self::Scintillator => f.write_str("scintillator"),
            Self::Quartz => f.write_str("quartz"),
            Self::Photodetector => f.write_str("photodetector"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_codes_round_trip() {
        for code in 0..=4u8 {
            let material = MaterialType::from_code(code).unwrap();
            assert_eq!(material.code(), code);
        }
        assert_eq!(MaterialType::from_code(5), None);
        assert_eq!(MaterialType::default(), MaterialType::None);
    }

    #[test]
    fn fiber_enumerants() {
        assert_eq!(FiberMedium::from_raw(0), Some(FiberMedium::Solid));
        assert_eq!(FiberMedium::from_raw(2), Some(FiberMedium::AirHole));
        assert_eq!(FiberMedium::from_raw(3), None);
        assert_eq!(FiberMaterial::from_raw(2), Some(FiberMaterial::Quartz));
        assert_eq!(FiberMaterial::from_raw(4), Some(FiberMaterial::Photodetector));
        assert_eq!(FiberMaterial::from_raw(5), None);
        assert_eq!(FiberMaterial::from_raw(7), None);
    }
}
