#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    use akari::{
        materials::{Diffuse, Material},
        math::{Point3, Ray, Spectrum, Vec3},
        shapes::{Shape, Sphere, Triangle, HIT_EPSILON},
        textures::{ConstantTexture, Texture},
    };

    fn white_diffuse() -> (Arc<dyn Material>, Arc<dyn Texture>) {
        (
            Arc::new(Diffuse::default()),
            Arc::new(ConstantTexture::new(Spectrum::ones())),
        )
    }

    fn unit_sphere() -> Sphere {
        let (material, texture) = white_diffuse();
        Sphere::new(Point3::zeros(), 1.0, material, texture)
    }

    #[test]
    fn sphere_near_hit() {
        let s = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(s.intersect(&r).unwrap(), 9.0, epsilon = 1e-12);

        // Approaching from the other side is symmetric
        let r = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(s.intersect(&r).unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn sphere_far_hit_from_inside() {
        let s = unit_sphere();
        // Near root is behind the origin, the far one wins
        let r = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(s.intersect(&r).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sphere_far_hit_from_surface() {
        let s = unit_sphere();
        // Near root sits inside the epsilon band, the far one wins
        let r = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(s.intersect(&r).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn sphere_miss() {
        let s = unit_sphere();
        let r = Ray::new(Point3::new(5.0, 5.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&r).is_none());

        // Sphere entirely behind the origin
        let r = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&r).is_none());
    }

    #[test]
    fn sphere_interaction_normals() {
        let s = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let t = s.intersect(&r).unwrap();
        let si = s.interaction(&r, t);

        assert_abs_diff_eq!(si.p, Point3::new(0.0, 0.0, -1.0), epsilon = 1e-9);
        // Raw normal points out of the sphere, already opposing the ray here
        assert_abs_diff_eq!(si.n.z, -1.0, epsilon = 1e-9);
        assert_eq!(si.n, si.ns);
        assert_eq!(si.wo, Vec3::new(0.0, 0.0, -1.0));

        // From inside, the oriented normal flips against the ray
        let r = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let t = s.intersect(&r).unwrap();
        let si = s.interaction(&r, t);
        assert_abs_diff_eq!(si.n.z, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(si.ns.z, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn sphere_uv() {
        let s = unit_sphere();

        // North pole maps to v = 0, south pole to v = 1
        let r = Ray::new(Point3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let si = s.interaction(&r, s.intersect(&r).unwrap());
        assert_abs_diff_eq!(si.uv.1, 0.0, epsilon = 1e-9);

        let r = Ray::new(Point3::new(0.0, -10.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let si = s.interaction(&r, s.intersect(&r).unwrap());
        assert_abs_diff_eq!(si.uv.1, 1.0, epsilon = 1e-9);

        // A point on the +x equator sits mid-latitude
        let r = Ray::new(Point3::new(10.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let si = s.interaction(&r, s.intersect(&r).unwrap());
        assert_abs_diff_eq!(si.uv.0, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(si.uv.1, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn sphere_world_bound() {
        let (material, texture) = white_diffuse();
        let s = Sphere::new(Point3::new(1.0, 2.0, 3.0), 2.0, material, texture);
        let b = s.world_bound();
        assert_eq!(b.p_min, Point3::new(-1.0, 0.0, 1.0));
        assert_eq!(b.p_max, Point3::new(3.0, 4.0, 5.0));
    }

    fn xy_triangle() -> Triangle {
        let (material, texture) = white_diffuse();
        Triangle::new(
            Point3::zeros(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            material,
            texture,
        )
    }

    #[test]
    fn triangle_hit() {
        let tri = xy_triangle();
        let r = Ray::new(Point3::new(0.25, 0.25, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(tri.intersect(&r).unwrap(), 5.0, epsilon = 1e-12);

        // Backface hits count too
        let r = Ray::new(Point3::new(0.25, 0.25, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(tri.intersect(&r).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_miss() {
        let tri = xy_triangle();

        // Outside the barycentric range
        let r = Ray::new(Point3::new(0.75, 0.75, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&r).is_none());

        // Parallel to the plane
        let r = Ray::new(Point3::new(0.25, 0.25, -5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(tri.intersect(&r).is_none());

        // Triangle behind the origin
        let r = Ray::new(Point3::new(0.25, 0.25, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&r).is_none());
    }

    #[test]
    fn triangle_interaction() {
        let tri = xy_triangle();
        let r = Ray::new(Point3::new(0.25, 0.5, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let t = tri.intersect(&r).unwrap();
        let si = tri.interaction(&r, t);

        assert_abs_diff_eq!(si.p, Point3::new(0.25, 0.5, 0.0), epsilon = 1e-9);
        // Barycentric parameterization at the hit
        assert_abs_diff_eq!(si.uv.0, 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(si.uv.1, 0.5, epsilon = 1e-9);
        // CCW winding gives a +z geometric normal, oriented against the ray
        assert_abs_diff_eq!(si.n.z, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(si.ns.z, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn triangle_world_bound() {
        let b = xy_triangle().world_bound();
        assert_eq!(b.p_min, Point3::zeros());
        assert_eq!(b.p_max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn epsilon_band_rejects_grazing_roots() {
        let s = unit_sphere();

        // A near root inside the band is self-intersection noise; the far
        // root must win instead
        let o = Point3::new(0.0, 0.0, -1.0 - HIT_EPSILON / 2.0);
        let r = Ray::new(o, Vec3::new(0.0, 0.0, 1.0));
        let t = s.intersect(&r).unwrap();
        assert_abs_diff_eq!(t, 2.0 + HIT_EPSILON / 2.0, epsilon = 1e-9);
    }
}
