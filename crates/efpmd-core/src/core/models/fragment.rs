use super::options::CoordType;
use nalgebra::{Matrix3, Point3, Vector3};

/// Capacity of the geometry buffer, large enough for the widest block.
pub const MAX_COORD_VALUES: usize = 12;

/// Number of velocity components (linear then angular).
pub const VELOCITY_VALUES: usize = 6;

/// Typed view over the meaningful part of a fragment's geometry buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentGeometry {
    XyzAbc {
        center: Point3<f64>,
        /// Euler angles `a`, `b`, `c` in radians.
        euler: Vector3<f64>,
    },
    Points([Point3<f64>; 3]),
    RotMat {
        center: Point3<f64>,
        rotation: Matrix3<f64>,
    },
}

/// One rigid fragment read from a `fragment` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Library name of the fragment, lowercased like the rest of the input.
    pub name: String,
    /// Convention the geometry block was written in.
    pub coord_type: CoordType,
    /// Geometry values; only the first `coord_type.value_count()` are set.
    pub coords: [f64; MAX_COORD_VALUES],
    /// Zero unless the block carried a `velocity` line.
    pub velocity: [f64; VELOCITY_VALUES],
}

impl Fragment {
    /// An unnamed fragment with zeroed geometry and velocity.
    pub fn new(coord_type: CoordType) -> Self {
        Self {
            name: String::new(),
            coord_type,
            coords: [0.0; MAX_COORD_VALUES],
            velocity: [0.0; VELOCITY_VALUES],
        }
    }

    /// The geometry values the block actually supplied.
    pub fn coords(&self) -> &[f64] {
        &self.coords[..self.coord_type.value_count()]
    }

    pub fn geometry(&self) -> FragmentGeometry {
        let c = &self.coords;
        match self.coord_type {
            CoordType::XyzAbc => FragmentGeometry::XyzAbc {
                center: Point3::new(c[0], c[1], c[2]),
                euler: Vector3::new(c[3], c[4], c[5]),
            },
            CoordType::Points => FragmentGeometry::Points([
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
                Point3::new(c[6], c[7], c[8]),
            ]),
            CoordType::RotMat => FragmentGeometry::RotMat {
                center: Point3::new(c[0], c[1], c[2]),
                rotation: Matrix3::from_row_slice(&c[3..12]),
            },
        }
    }

    /// Linear and angular velocity.
    pub fn velocity(&self) -> (Vector3<f64>, Vector3<f64>) {
        let v = &self.velocity;
        (
            Vector3::new(v[0], v[1], v[2]),
            Vector3::new(v[3], v[4], v[5]),
        )
    }

    /// Multiplies the length-valued geometry entries by `factor`.
    pub(crate) fn scale_lengths(&mut self, factor: f64) {
        let n = self.coord_type.length_count();
        for value in &mut self.coords[..n] {
            *value *= factor;
        }
    }
}
