#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use akari::{
        camera::{Camera, CameraParameters, FoV},
        film::FilmSettings,
        math::{Point3, Vec3},
    };

    fn square_film() -> FilmSettings {
        FilmSettings {
            width: 4,
            height: 4,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(
            CameraParameters {
                position: Point3::zeros(),
                target: Point3::new(0.0, 0.0, 10.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov: FoV::X(90.0),
            },
            square_film(),
        );

        let ray = camera.ray(2.0, 2.0);
        assert_abs_diff_eq!(ray.o, Point3::zeros(), epsilon = 1e-12);
        assert_abs_diff_eq!(ray.d, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-9);
        assert_eq!(ray.depth, 0);
    }

    #[test]
    fn rays_are_normalized_and_diverge() {
        let camera = Camera::new(
            CameraParameters {
                position: Point3::new(1.0, 2.0, 3.0),
                target: Point3::new(1.0, 2.0, 13.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov: FoV::X(90.0),
            },
            square_film(),
        );

        let center = camera.ray(2.0, 2.0);
        let corner = camera.ray(0.0, 0.0);
        let other_corner = camera.ray(4.0, 4.0);

        assert_abs_diff_eq!(center.d.len(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corner.d.len(), 1.0, epsilon = 1e-12);

        assert!(center.d.dot(corner.d) < 1.0 - 1e-6);
        // Opposite corners mirror around the center
        assert_abs_diff_eq!(
            (corner.d + other_corner.d).normalized(),
            center.d,
            epsilon = 1e-9
        );

        // All rays start at the camera position
        assert_abs_diff_eq!(corner.o, Point3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn fov_x_spans_the_film_width() {
        let camera = Camera::new(
            CameraParameters {
                position: Point3::zeros(),
                target: Point3::new(0.0, 0.0, 10.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov: FoV::X(90.0),
            },
            square_film(),
        );

        // Film edge centers sit half the fov off axis
        let left = camera.ray(0.0, 2.0);
        let right = camera.ray(4.0, 2.0);
        let full_angle = left.d.dot(right.d).acos().to_degrees();
        assert_abs_diff_eq!(full_angle, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn raster_y_is_up() {
        let camera = Camera::new(
            CameraParameters {
                position: Point3::zeros(),
                target: Point3::new(0.0, 0.0, 10.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov: FoV::Y(60.0),
            },
            square_film(),
        );

        // Larger film y leans toward world up
        let low = camera.ray(2.0, 0.5);
        let high = camera.ray(2.0, 3.5);
        assert!(high.d.y > low.d.y);
    }

    #[test]
    fn degenerate_parameters_fall_back_silently() {
        // Position on top of the target collapses look_at to identity
        let camera = Camera::new(
            CameraParameters {
                position: Point3::zeros(),
                target: Point3::zeros(),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov: FoV::X(90.0),
            },
            square_film(),
        );

        let ray = camera.ray(2.0, 2.0);
        assert!(!ray.d.has_nans());
        assert_abs_diff_eq!(ray.d.len(), 1.0, epsilon = 1e-12);
    }
}
