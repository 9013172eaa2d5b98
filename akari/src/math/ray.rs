use super::{point::Point3, vector::Vec3};

/// A ray with its transport state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// The origin of the ray.
    pub o: Point3,
    /// The direction of the ray. Assumed to be unit length.
    pub d: Vec3,
    /// The number of bounces taken to reach this ray.
    pub depth: u32,
    /// Time of the ray, reserved for motion blur.
    pub time: f64,
}

impl Ray {
    /// Creates a new primary `Ray` at depth 0.
    pub fn new(o: Point3, d: Vec3) -> Self {
        Self {
            o,
            d,
            depth: 0,
            time: 0.0,
        }
    }

    /// Returns the point at distance `t` along this `Ray`.
    #[inline]
    pub fn point(&self, t: f64) -> Point3 {
        self.o + self.d * t
    }

    /// Creates a continuation `Ray` from `o` toward `d` one bounce deeper.
    ///
    /// This is how the transport recursion advances.
    pub fn reflect(&self, o: Point3, d: Vec3) -> Self {
        Self {
            o,
            d,
            depth: self.depth + 1,
            time: self.time,
        }
    }
}
