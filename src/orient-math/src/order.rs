//! Axis sequence conventions for Euler angles.

use std::{fmt, str::FromStr};

use crate::EulerError;

/// The sequence of axes in which Euler angles are applied.
///
/// An order `ABC` describes the rotation `R_A · R_B · R_C`,
/// so with column vectors the rotation about `C` is applied
/// first and the rotation about `A` last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum AngleOrder {
    XYZ,
    YXZ,
    ZXY,
    #[default]
    ZYX,
    YZX,
    XZY,
}

impl AngleOrder {
    /// All supported orders, in the order the panel lists them.
    pub const ALL: [Self; 6] = [
        Self::XYZ,
        Self::YXZ,
        Self::ZXY,
        Self::ZYX,
        Self::YZX,
        Self::XZY,
    ];

    /// Gets the tag string of this order.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XYZ => "XYZ",
            Self::YXZ => "YXZ",
            Self::ZXY => "ZXY",
            Self::ZYX => "ZYX",
            Self::YZX => "YZX",
            Self::XZY => "XZY",
        }
    }
}

impl fmt::Display for AngleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleOrder {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| EulerError::UnrecognizedAngleOrder(s.to_owned()))
    }
}

impl TryFrom<String> for AngleOrder {
    type Error = EulerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AngleOrder> for &'static str {
    fn from(order: AngleOrder) -> Self {
        order.as_str()
    }
}
