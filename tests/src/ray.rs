#[cfg(test)]
mod tests {
    use akari::math::{Point3, Ray, Vec3};

    #[test]
    fn new() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.o, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(r.d, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.depth, 0);
        assert_eq!(r.time, 0.0);
    }

    #[test]
    fn point() {
        let r = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.point(0.0), r.o);
        assert_eq!(r.point(9.0), Point3::new(0.0, 0.0, -1.0));
        assert_eq!(r.point(11.0), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn reflect_advances_depth() {
        let r = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let o = Point3::new(0.0, 0.0, 5.0);
        let d = Vec3::new(0.0, 1.0, 0.0);

        let c = r.reflect(o, d);
        assert_eq!(c.o, o);
        assert_eq!(c.d, d);
        assert_eq!(c.depth, 1);
        assert_eq!(c.time, r.time);

        assert_eq!(c.reflect(o, d).depth, 2);
    }
}
