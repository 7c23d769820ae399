//! Implementation of Euler angles.

use orient_utils::{float::approx_eq, tracing::trace};

use crate::{
    scalar::{clamp, mod360, round_up},
    AngleOrder, DQuat, EulerError, Point3, RotationMatrix,
};

/// A rotation expressed as three angles in degrees.
///
/// `yaw` is the angle about the X axis, `pitch` the angle
/// about Y and `roll` the angle about Z. The [`AngleOrder`]
/// used to produce or consume the angles decides in which
/// sequence they are applied.
///
/// When converted into a [`Point3`], `x` holds the yaw,
/// `y` the pitch and `z` the roll. Inspector panels rely on
/// this mapping, so it must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Euler {
    /// Creates a new Euler value given the axis angles in
    /// degrees.
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Decomposes a rotation into Euler angles for `order`.
    ///
    /// When the rotation is gimbal locked for `order`, one
    /// of the two non-primary angles is fixed to exactly `0`
    /// and the other one absorbs their combined rotation.
    pub fn from_rotation<R: Into<RotationMatrix>>(rotation: R, order: AngleOrder) -> Self {
        let m = rotation.into();
        let asin = |entry: f64| clamp(entry, -1.0, 1.0).asin();

        let locked = m.is_gimbal_locked(order);
        if locked {
            trace!(%order, entry = m.primary_entry(order), "Gimbal lock, zeroing one angle");
        }

        let (yaw, pitch, roll) = match order {
            AngleOrder::XYZ => {
                let pitch = asin(m.m13);
                if locked {
                    (m.m32.atan2(m.m22), pitch, 0.0)
                } else {
                    ((-m.m23).atan2(m.m33), pitch, (-m.m12).atan2(m.m11))
                }
            }

            AngleOrder::YXZ => {
                let yaw = asin(-m.m23);
                if locked {
                    (yaw, (-m.m31).atan2(m.m11), 0.0)
                } else {
                    (yaw, m.m13.atan2(m.m33), m.m21.atan2(m.m22))
                }
            }

            AngleOrder::ZXY => {
                let yaw = asin(m.m32);
                if locked {
                    (yaw, 0.0, m.m21.atan2(m.m11))
                } else {
                    (yaw, (-m.m31).atan2(m.m33), (-m.m12).atan2(m.m22))
                }
            }

            AngleOrder::ZYX => {
                let pitch = asin(-m.m31);
                if locked {
                    (0.0, pitch, (-m.m12).atan2(m.m22))
                } else {
                    (m.m32.atan2(m.m33), pitch, m.m21.atan2(m.m11))
                }
            }

            AngleOrder::YZX => {
                let roll = asin(m.m21);
                if locked {
                    (0.0, m.m13.atan2(m.m33), roll)
                } else {
                    ((-m.m23).atan2(m.m22), (-m.m31).atan2(m.m11), roll)
                }
            }

            AngleOrder::XZY => {
                let roll = asin(-m.m12);
                if locked {
                    ((-m.m23).atan2(m.m33), 0.0, roll)
                } else {
                    (m.m32.atan2(m.m22), m.m13.atan2(m.m11), roll)
                }
            }
        };

        Self::new(yaw.to_degrees(), pitch.to_degrees(), roll.to_degrees())
    }

    /// Composes the angles into a quaternion, applying them
    /// in the sequence given by `order`.
    ///
    /// This is the inverse of [`Euler::from_rotation`] for
    /// rotations that are not gimbal locked.
    pub fn to_quat(&self, order: AngleOrder) -> DQuat {
        let x = DQuat::from_rotation_x(self.yaw.to_radians());
        let y = DQuat::from_rotation_y(self.pitch.to_radians());
        let z = DQuat::from_rotation_z(self.roll.to_radians());

        match order {
            AngleOrder::XYZ => x * y * z,
            AngleOrder::YXZ => y * x * z,
            AngleOrder::ZXY => z * x * y,
            AngleOrder::ZYX => z * y * x,
            AngleOrder::YZX => y * z * x,
            AngleOrder::XZY => x * z * y,
        }
    }

    /// Wraps every angle into `0.0..360.0`.
    pub fn normalized(&self) -> Self {
        Self::new(mod360(self.yaw), mod360(self.pitch), mod360(self.roll))
    }

    /// Rounds every angle to two decimal places for display.
    pub fn rounded(&self) -> Self {
        Self::new(round_up(self.yaw), round_up(self.pitch), round_up(self.roll))
    }

    /// Checks whether all angles approximately match those
    /// of `other`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.yaw, other.yaw)
            && approx_eq(self.pitch, other.pitch)
            && approx_eq(self.roll, other.roll)
    }
}

impl From<Euler> for Point3<f64> {
    fn from(e: Euler) -> Self {
        Point3::new(e.yaw, e.pitch, e.roll)
    }
}

impl From<Point3<f64>> for Euler {
    fn from(p: Point3<f64>) -> Self {
        Euler::new(p.x, p.y, p.z)
    }
}

/// Decomposes a rotation into Euler angles for `order`.
///
/// See [`Euler::from_rotation`] for details.
#[inline]
pub fn euler_angles<R: Into<RotationMatrix>>(rotation: R, order: AngleOrder) -> Euler {
    Euler::from_rotation(rotation, order)
}

/// Decomposes a rotation given an angle order by its tag,
/// defaulting to [`AngleOrder::ZYX`] when none is given.
///
/// The angles are returned as a [`Point3`] holding yaw,
/// pitch and roll in `x`, `y` and `z` respectively.
///
/// Fails with [`EulerError::UnrecognizedAngleOrder`] when
/// `order` names none of the supported sequences.
pub fn euler_angles_by_tag<R: Into<RotationMatrix>>(
    rotation: R,
    order: Option<&str>,
) -> Result<Point3<f64>, EulerError> {
    let order = order
        .map(str::parse::<AngleOrder>)
        .transpose()?
        .unwrap_or_default();
    Ok(euler_angles(rotation, order).into())
}
