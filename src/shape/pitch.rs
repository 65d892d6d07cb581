use crate::math::{Real, Vector};
use crate::transformation::voxelization::VoxelizationError;

/// The edge length of a voxel cell.
///
/// The pitch is either the same along every axis, or given independently for
/// each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Pitch {
    /// The same edge length along all three axes.
    Uniform(Real),
    /// One edge length per axis.
    PerAxis(Vector<Real>),
}

impl Pitch {
    /// The pitch broadcast as one edge length per axis.
    #[inline]
    pub fn to_vector(&self) -> Vector<Real> {
        match self {
            Self::Uniform(pitch) => Vector::repeat(*pitch),
            Self::PerAxis(pitch) => *pitch,
        }
    }

    /// The per-axis edge lengths, after checking they are all finite and positive.
    pub fn validated(&self) -> Result<Vector<Real>, VoxelizationError> {
        let pitch = self.to_vector();

        if pitch.iter().all(|p| p.is_finite() && *p > 0.0) {
            Ok(pitch)
        } else {
            Err(VoxelizationError::InvalidPitch)
        }
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::Uniform(1.0)
    }
}

impl From<Real> for Pitch {
    fn from(pitch: Real) -> Self {
        Self::Uniform(pitch)
    }
}

impl From<Vector<Real>> for Pitch {
    fn from(pitch: Vector<Real>) -> Self {
        Self::PerAxis(pitch)
    }
}

impl From<[Real; 3]> for Pitch {
    fn from(pitch: [Real; 3]) -> Self {
        Self::PerAxis(pitch.into())
    }
}
