use crate::CaloError;
use crate::bit_utils::BitPack;
use crate::ecal::EcalChannel;
use crate::fiber::FiberChannel;
use crate::sampling::SamplingChannel;
use calo_common::layout::{self, Field};
use core::fmt;
use core::str::FromStr;

/// A decoded channel type bound to one bit layout.
pub trait ChannelDecoder: Sized + Copy + fmt::Display {
    /// Subsystem whose layout this type decodes.
    const DETECTOR: Detector;

    /// First reserved bit of the layout.
    const RESERVED_SHIFT: u32;

    fn decode(id: u64) -> Self;

    /// Bits of `id` that the layout reserves. Never consulted by `decode`.
    fn reserved_bits(id: u64) -> u64 {
        BitPack::above(id, Self::RESERVED_SHIFT)
    }
}

/// Detector subsystem selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    Ecal,
    Fiber,
    Sampling,
}

impl Detector {
    pub const ALL: [Detector; 3] = [Detector::Ecal, Detector::Fiber, Detector::Sampling];

    pub const fn name(self) -> &'static str {
        match self {
            Detector::Ecal => "ecal",
            Detector::Fiber => "fiber",
            Detector::Sampling => "sampling",
        }
    }

    pub const fn reserved_shift(self) -> u32 {
        match self {
            Detector::Ecal => EcalChannel::RESERVED_SHIFT,
            Detector::Fiber => FiberChannel::RESERVED_SHIFT,
            Detector::Sampling => SamplingChannel::RESERVED_SHIFT,
        }
    }

    /// Named fields of this detector's layout, lowest bits first.
    pub const fn fields(self) -> &'static [(&'static str, Field)] {
        match self {
            Detector::Ecal => &layout::ecal::FIELDS,
            Detector::Fiber => &layout::fiber::FIELDS,
            Detector::Sampling => &layout::sampling::FIELDS,
        }
    }

    /// Decodes `id` with this detector's layout.
    #[inline]
    pub fn decode(self, id: u64) -> Channel {
        match self {
            Detector::Ecal => Channel::Ecal(EcalChannel::decode(id)),
            Detector::Fiber => Channel::Fiber(FiberChannel::decode(id)),
            Detector::Sampling => Channel::Sampling(SamplingChannel::decode(id)),
        }
    }
}

impl FromStr for Detector {
    type Err = CaloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ecal") {
            Ok(Detector::Ecal)
        } else if s.eq_ignore_ascii_case("fiber") {
            Ok(Detector::Fiber)
        } else if s.eq_ignore_ascii_case("sampling") || s.eq_ignore_ascii_case("scal") {
            Ok(Detector::Sampling)
        } else {
            Err(CaloError::UnknownDetector)
        }
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel id decoded with any of the supported layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Ecal(EcalChannel),
    Fiber(FiberChannel),
    Sampling(SamplingChannel),
}

impl Channel {
    pub const fn detector(&self) -> Detector {
        match self {
            Channel::Ecal(_) => Detector::Ecal,
            Channel::Fiber(_) => Detector::Fiber,
            Channel::Sampling(_) => Detector::Sampling,
        }
    }

    /// The detector index field, common to every layout.
    pub const fn idet(&self) -> u8 {
        match self {
            Channel::Ecal(ch) => ch.idet,
            Channel::Fiber(ch) => ch.idet,
            Channel::Sampling(ch) => ch.idet,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Ecal(ch) => fmt::Display::fmt(ch, f),
            Channel::Fiber(ch) => fmt::Display::fmt(ch, f),
            Channel::Sampling(ch) => fmt::Display::fmt(ch, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calo_common::material::MaterialType;

    #[test]
    fn parses_detector_names() {
        assert_eq!("ecal".parse::<Detector>(), Ok(Detector::Ecal));
        assert_eq!("ECAL".parse::<Detector>(), Ok(Detector::Ecal));
        assert_eq!(" Fiber ".parse::<Detector>(), Ok(Detector::Fiber));
        assert_eq!("scal".parse::<Detector>(), Ok(Detector::Sampling));
        assert_eq!("sampling".parse::<Detector>(), Ok(Detector::Sampling));
        assert_eq!("hcal".parse::<Detector>(), Err(CaloError::UnknownDetector));
    }

    #[test]
    fn names_round_trip() {
        for detector in Detector::ALL {
            assert_eq!(detector.name().parse::<Detector>(), Ok(detector));
        }
    }

    #[test]
    fn dispatch_matches_direct_decoders() {
        let id = 0x0012_3456_789A_BCDE;
        assert_eq!(Detector::Ecal.decode(id), Channel::Ecal(crate::ecal::decode(id)));
        assert_eq!(Detector::Fiber.decode(id), Channel::Fiber(crate::fiber::decode(id)));
        assert_eq!(
            Detector::Sampling.decode(id),
            Channel::Sampling(crate::sampling::decode(id))
        );
        for detector in Detector::ALL {
            assert_eq!(detector.decode(id).detector(), detector);
        }
        assert_eq!(EcalChannel::DETECTOR, Detector::Ecal);
        assert_eq!(FiberChannel::DETECTOR, Detector::Fiber);
        assert_eq!(SamplingChannel::DETECTOR, Detector::Sampling);
    }

    #[test]
    fn reserved_shift_per_detector() {
        assert_eq!(Detector::Ecal.reserved_shift(), 26);
        assert_eq!(Detector::Fiber.reserved_shift(), 38);
        assert_eq!(Detector::Sampling.reserved_shift(), 45);
        assert_eq!(EcalChannel::reserved_bits(u64::MAX), u64::MAX << 26);
        assert_eq!(SamplingChannel::reserved_bits((1 << 45) - 1), 0);
    }

    #[test]
    fn fields_end_at_reserved_shift() {
        for detector in Detector::ALL {
            let fields = detector.fields();
            assert_eq!(fields[0].0, "idet");
            let top = fields.iter().map(|(_, f)| f.end()).max();
            assert_eq!(top, Some(detector.reserved_shift()));
        }
    }

    #[test]
    fn idet_is_common() {
        assert_eq!(Detector::Ecal.decode(0b101).idet(), 5);
        assert_eq!(Detector::Fiber.decode(0xFF).idet(), 0xFF);
        assert_eq!(Detector::Sampling.decode(0xFF).idet(), 7);
    }

    #[test]
    fn ecal_channel_through_dispatch() {
        let id = (1 << 20) | (4 << 17);
        match Detector::Ecal.decode(id) {
            Channel::Ecal(ch) => assert_eq!(ch.material, MaterialType::Photodiode),
            other => panic!("unexpected channel {other:?}"),
        }
    }
}
