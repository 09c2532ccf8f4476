//! The fixed set of 14 Kerala districts.
//!
//! Districts serve double duty: a location tag on destination records and
//! a selector for weather lookups. The enumeration order is the canonical
//! presentation order (north-to-south administrative listing) and never
//! changes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::Coordinates;

/// One of the 14 administrative districts of Kerala.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum District {
    Thiruvananthapuram,
    Kollam,
    Pathanamthitta,
    Alappuzha,
    Kottayam,
    Idukki,
    Ernakulam,
    Thrissur,
    Palakkad,
    Malappuram,
    Kozhikode,
    Wayanad,
    Kannur,
    Kasaragod,
}

impl District {
    /// All districts in their fixed presentation order.
    pub const ALL: &[Self] = &[
        Self::Thiruvananthapuram,
        Self::Kollam,
        Self::Pathanamthitta,
        Self::Alappuzha,
        Self::Kottayam,
        Self::Idukki,
        Self::Ernakulam,
        Self::Thrissur,
        Self::Palakkad,
        Self::Malappuram,
        Self::Kozhikode,
        Self::Wayanad,
        Self::Kannur,
        Self::Kasaragod,
    ];

    /// Centroid coordinates of the district headquarters.
    ///
    /// Used both for weather lookups and for distance synthesis when a
    /// destination record carries no surveyed coordinates.
    #[must_use]
    pub const fn coordinates(self) -> Coordinates {
        match self {
            Self::Thiruvananthapuram => Coordinates::new(8.5241, 76.9366),
            Self::Kollam => Coordinates::new(8.8932, 76.6141),
            Self::Pathanamthitta => Coordinates::new(9.2648, 76.7870),
            Self::Alappuzha => Coordinates::new(9.4981, 76.3388),
            Self::Kottayam => Coordinates::new(9.5916, 76.5222),
            Self::Idukki => Coordinates::new(9.8543, 76.8726),
            Self::Ernakulam => Coordinates::new(9.9312, 76.2673),
            Self::Thrissur => Coordinates::new(10.5276, 76.2144),
            Self::Palakkad => Coordinates::new(10.7867, 76.6548),
            Self::Malappuram => Coordinates::new(11.0510, 76.0711),
            Self::Kozhikode => Coordinates::new(11.2588, 75.7804),
            Self::Wayanad => Coordinates::new(11.6054, 76.0876),
            Self::Kannur => Coordinates::new(11.8745, 75.3704),
            Self::Kasaragod => Coordinates::new(12.4996, 74.9869),
        }
    }
}
