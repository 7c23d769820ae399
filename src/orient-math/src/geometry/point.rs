use crate::{DVec3, Vec3};

/// A point in three-dimensional space represented by its
/// coordinates.
///
/// Editor panels also use this type as a generic carrier
/// for three axis values, most notably Euler angles. See
/// [`Euler`](crate::Euler) for how the fields map there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<T> {
    /// The x coordinate.
    pub x: T,
    /// The y coordinate.
    pub y: T,
    /// The z coordinate.
    pub z: T,
}

impl<T> Point3<T> {
    /// Creates a new point given its coordinates.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Point3<T> {
    /// Gets the coordinates as an `[x, y, z]` array.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for Point3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f32>> for Vec3 {
    fn from(p: Point3<f32>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Point3<f64> {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f64>> for DVec3 {
    fn from(p: Point3<f64>) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}
