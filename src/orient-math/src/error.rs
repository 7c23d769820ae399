use thiserror::Error;

/// Errors that may occur while decomposing rotations into
/// Euler angles.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EulerError {
    /// The supplied angle order tag does not name one of
    /// the six supported axis sequences.
    #[error("AngleOrder not recognized - {0}")]
    UnrecognizedAngleOrder(String),
}
