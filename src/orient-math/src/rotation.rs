//! The rotation block of quaternion-derived matrices.

use crate::{AngleOrder, DMat3, DMat4, DQuat, Mat3, Mat4, Quat};

/// Magnitude of the primary matrix entry from which on a
/// rotation is treated as gimbal locked.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.9999999;

/// The upper-left 3x3 block of a rotation matrix.
///
/// Entries are named `m{row}{column}`, one-based. They are
/// read from the column-major flattened 4x4 matrix, so
/// `m12` is index 4 and `m21` is index 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

impl RotationMatrix {
    /// Reads the rotation block out of a column-major 4x4
    /// matrix in its flattened form.
    pub fn from_cols_array_4x4(m: &[f64; 16]) -> Self {
        Self {
            m11: m[0],
            m12: m[4],
            m13: m[8],
            m21: m[1],
            m22: m[5],
            m23: m[9],
            m31: m[2],
            m32: m[6],
            m33: m[10],
        }
    }

    /// Gets the entry whose arcsine yields the primary angle
    /// of `order`, without any sign adjustment.
    pub fn primary_entry(&self, order: AngleOrder) -> f64 {
        match order {
            AngleOrder::XYZ => self.m13,
            AngleOrder::YXZ => self.m23,
            AngleOrder::ZXY => self.m32,
            AngleOrder::ZYX => self.m31,
            AngleOrder::YZX => self.m21,
            AngleOrder::XZY => self.m12,
        }
    }

    /// Checks whether the two outer axes of `order` are
    /// (nearly) aligned for this rotation, which leaves only
    /// their combined angle determined.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_gimbal_locked(&self, order: AngleOrder) -> bool {
        // A NaN entry fails the comparison and counts as locked.
        !(self.primary_entry(order).abs() < GIMBAL_LOCK_THRESHOLD)
    }
}

impl From<Mat4> for RotationMatrix {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array_4x4(&m.to_cols_array().map(f64::from))
    }
}

impl From<DMat4> for RotationMatrix {
    fn from(m: DMat4) -> Self {
        Self::from_cols_array_4x4(&m.to_cols_array())
    }
}

impl From<Mat3> for RotationMatrix {
    fn from(m: Mat3) -> Self {
        Self::from(Mat4::from_mat3(m))
    }
}

impl From<DMat3> for RotationMatrix {
    fn from(m: DMat3) -> Self {
        Self::from(DMat4::from_mat3(m))
    }
}

impl From<Quat> for RotationMatrix {
    fn from(q: Quat) -> Self {
        Self::from(Mat4::from_quat(q))
    }
}

impl From<DQuat> for RotationMatrix {
    fn from(q: DQuat) -> Self {
        Self::from(DMat4::from_quat(q))
    }
}
