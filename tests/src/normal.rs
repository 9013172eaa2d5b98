#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use akari::math::{Normal, Vec3};

    #[test]
    fn new() {
        let n = Normal::new(1.0, 2.0, 3.0);
        assert_eq!(n.x, 1.0);
        assert_eq!(n.y, 2.0);
        assert_eq!(n.z, 3.0);
    }

    #[test]
    fn dot() {
        assert_eq!(
            Normal::new(1.0, 2.0, 3.0).dot_v(Vec3::new(4.0, 5.0, 6.0)),
            32.0
        );
        assert_eq!(
            Normal::new(1.0, 2.0, 3.0).dot(Normal::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn normalized() {
        let n = Normal::new(0.0, 3.0, 4.0).normalized();
        assert_abs_diff_eq!(n.len(), 1.0);
        assert_abs_diff_eq!(n, Normal::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn faceforward() {
        let n = Normal::new(0.0, 0.0, 1.0);

        // Already opposes the direction, stays put
        assert_eq!(n.faceforward(Vec3::new(0.0, 0.0, 1.0)), n);
        // Points along it, flips
        assert_eq!(n.faceforward(Vec3::new(0.0, 0.0, -1.0)), -n);
        // Orthogonal counts as facing
        assert_eq!(n.faceforward(Vec3::new(1.0, 0.0, 0.0)), n);
    }

    #[test]
    fn ops() {
        let n = Normal::new(1.0, 2.0, 3.0);
        assert_eq!(-n, Normal::new(-1.0, -2.0, -3.0));
        assert_eq!(n + n, Normal::new(2.0, 4.0, 6.0));
        assert_eq!(n * 2.0, Normal::new(2.0, 4.0, 6.0));

        let mut m = n;
        m *= -1.0;
        assert_eq!(m, -n);
    }

    #[test]
    fn conversions() {
        assert_eq!(
            Normal::from(Vec3::new(1.0, 2.0, 3.0)),
            Normal::new(1.0, 2.0, 3.0)
        );
    }
}
