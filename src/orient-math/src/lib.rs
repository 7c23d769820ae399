//! Linear algebra helpers for 3D inspector panels.
//!
//! While this crate re-exports the types of the [`glam`]
//! crate, which provides the quaternion and matrix math,
//! it mainly adds Euler angle decomposition of rotations
//! and a few scalar helpers used when presenting them.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[doc(inline)]
pub use glam::*;

mod error;
pub use error::EulerError;

mod euler;
pub use euler::{euler_angles, euler_angles_by_tag, Euler};

mod geometry;
pub use geometry::Point3;

mod order;
pub use order::AngleOrder;

mod rotation;
pub use rotation::{RotationMatrix, GIMBAL_LOCK_THRESHOLD};

pub mod scalar;
