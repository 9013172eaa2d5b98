use super::{point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional axis-aligned bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3 {
    /// The minimum extent of the bounds.
    pub p_min: Point3,
    /// The maximum extent of the bounds.
    pub p_max: Point3,
}

impl Bounds3 {
    /// Creates a new `Bounds3` spanning `p0` and `p1`.
    pub fn new(p0: Point3, p1: Point3) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Creates a new empty `Bounds3` that unions can grow from.
    pub fn default() -> Self {
        Self {
            p_min: Point3::from(f64::INFINITY),
            p_max: Point3::from(f64::NEG_INFINITY),
        }
    }

    /// Returns the union of this `Bounds3` and a [Point3].
    pub fn union_p(&self, p: Point3) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the union of this `Bounds3` and another `Bounds3`.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Checks if `p` is inside this `Bounds3`.
    pub fn contains(&self, p: Point3) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Checks if this `Bounds3` and another `Bounds3` overlap.
    pub fn overlaps(&self, other: Self) -> bool {
        self.p_min.x <= other.p_max.x
            && self.p_max.x >= other.p_min.x
            && self.p_min.y <= other.p_max.y
            && self.p_max.y >= other.p_min.y
            && self.p_min.z <= other.p_max.z
            && self.p_max.z >= other.p_min.z
    }

    /// Returns the point inside this `Bounds3` closest to `p`.
    pub fn closest_point(&self, p: Point3) -> Point3 {
        Point3::new(
            p.x.clamp(self.p_min.x, self.p_max.x),
            p.y.clamp(self.p_min.y, self.p_max.y),
            p.z.clamp(self.p_min.z, self.p_max.z),
        )
    }

    /// Returns the diagonal of this `Bounds3`.
    #[inline]
    pub fn diagonal(&self) -> Vec3 {
        self.p_max - self.p_min
    }

    /// Calculates the surface area of this `Bounds3`.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        let d = self.diagonal();
        2.0 * (d.x * d.y + d.z * d.y + d.x * d.z)
    }

    /// Calculates the volume of this `Bounds3`.
    #[inline]
    pub fn volume(&self) -> f64 {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Returns this `Bounds3`'s bounding sphere.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = (self.p_min + self.p_max) / 2.0;
        BoundingSphere {
            center,
            radius: center.dist(self.p_max),
        }
    }
}

/// A bounding sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point3,
    /// The radius of the sphere.
    pub radius: f64,
}

impl BoundingSphere {
    /// Creates a new `BoundingSphere`.
    pub fn new(center: Point3, radius: f64) -> Self {
        debug_assert!(radius >= 0.0);
        Self { center, radius }
    }

    /// Checks if `p` is inside this `BoundingSphere`.
    pub fn contains(&self, p: Point3) -> bool {
        self.center.dist_sqr(p) <= self.radius * self.radius
    }

    /// Checks if this `BoundingSphere` and another `BoundingSphere` overlap.
    pub fn overlaps(&self, other: Self) -> bool {
        let r = self.radius + other.radius;
        self.center.dist_sqr(other.center) <= r * r
    }

    /// Returns the point inside this `BoundingSphere` closest to `p`.
    pub fn closest_point(&self, p: Point3) -> Point3 {
        let to_p = p - self.center;
        let d = to_p.len();
        if d <= self.radius {
            p
        } else {
            self.center + to_p * (self.radius / d)
        }
    }

    /// Returns the smallest `BoundingSphere` enclosing this one and `other`.
    pub fn union(&self, other: Self) -> Self {
        let d = self.center.dist(other.center);
        if d + other.radius <= self.radius {
            return *self;
        }
        if d + self.radius <= other.radius {
            return other;
        }
        let radius = (d + self.radius + other.radius) / 2.0;
        let center = if d > 0.0 {
            self.center + (other.center - self.center) * ((radius - self.radius) / d)
        } else {
            self.center
        };
        Self { center, radius }
    }

    /// Calculates the surface area of this `BoundingSphere`.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        4.0 * std::f64::consts::PI * self.radius * self.radius
    }

    /// Calculates the volume of this `BoundingSphere`.
    #[inline]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }

    /// Returns the axis-aligned [Bounds3] enclosing this `BoundingSphere`.
    pub fn bounds(&self) -> Bounds3 {
        let r = Vec3::new(self.radius, self.radius, self.radius);
        Bounds3::new(self.center - r, self.center + r)
    }
}

/// A closed set of bounding volume kinds.
///
/// Pair intersection is an exhaustive match so an unsupported pairing cannot
/// be expressed, let alone silently return false.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundingVolume {
    Aabb(Bounds3),
    Sphere(BoundingSphere),
}

impl BoundingVolume {
    /// Checks if `p` is inside this `BoundingVolume`.
    pub fn contains(&self, p: Point3) -> bool {
        match self {
            Self::Aabb(b) => b.contains(p),
            Self::Sphere(s) => s.contains(p),
        }
    }

    /// Checks if this `BoundingVolume` and another `BoundingVolume` overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Aabb(a), Self::Aabb(b)) => a.overlaps(*b),
            (Self::Sphere(a), Self::Sphere(b)) => a.overlaps(*b),
            (Self::Aabb(b), Self::Sphere(s)) | (Self::Sphere(s), Self::Aabb(b)) => {
                // The sphere overlaps the box iff the box point closest to its
                // center is within its radius
                s.contains(b.closest_point(s.center))
            }
        }
    }

    /// Returns the union of this `BoundingVolume` and another, in the kind of `self`.
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Aabb(a), Self::Aabb(b)) => Self::Aabb(a.union_b(*b)),
            (Self::Aabb(a), Self::Sphere(s)) => Self::Aabb(a.union_b(s.bounds())),
            (Self::Sphere(a), Self::Sphere(b)) => Self::Sphere(a.union(*b)),
            (Self::Sphere(a), Self::Aabb(b)) => Self::Sphere(a.union(b.bounding_sphere())),
        }
    }

    /// Calculates the surface area of this `BoundingVolume`.
    pub fn surface_area(&self) -> f64 {
        match self {
            Self::Aabb(b) => b.surface_area(),
            Self::Sphere(s) => s.surface_area(),
        }
    }

    /// Calculates the volume of this `BoundingVolume`.
    pub fn volume(&self) -> f64 {
        match self {
            Self::Aabb(b) => b.volume(),
            Self::Sphere(s) => s.volume(),
        }
    }
}
