use crate::{
    film::FilmSettings,
    math::{
        transforms::{look_at, scale, translation},
        Point3, Ray, Transform, Vec3,
    },
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Camera_Models.html

/// Camera field of view along one image axis, in degrees.
#[derive(Copy, Clone, Debug)]
pub enum FoV {
    X(f64),
    Y(f64),
}

/// The values that specify a camera pose.
#[derive(Copy, Clone, Debug)]
pub struct CameraParameters {
    pub position: Point3,
    pub target: Point3,
    pub up: Vec3,
    pub fov: FoV,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::zeros(),
            target: Point3::new(0.0, 0.0, 1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: FoV::X(90.0),
        }
    }
}

/// A simple pinhole camera.
#[derive(Clone)]
pub struct Camera {
    camera_to_world: Transform,
    raster_to_camera: Transform,
}

impl Camera {
    /// Creates a new `Camera` projecting onto a film of the given resolution.
    pub fn new(params: CameraParameters, film_settings: FilmSettings) -> Self {
        let camera_to_world = look_at(params.position, params.target, params.up).inverted();

        // Standard perspective projection; near and far only matter for depth
        // which ray generation never reads back
        let near = 1e-2;
        let far = 1000.0;
        let fov_angle = match params.fov {
            FoV::X(v) | FoV::Y(v) => v,
        };
        let inv_tan = 1.0 / (fov_angle.to_radians() / 2.0).tan();
        let camera_to_screen = &scale(inv_tan, inv_tan, 1.0)
            * &Transform::new([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, far / (far - near), -(far * near) / (far - near)],
                [0.0, 0.0, 1.0, 0.0],
            ]);

        // The screen window spans [-1, 1] along the FoV axis and is scaled by
        // the aspect ratio on the other
        let film_x = f64::from(film_settings.width);
        let film_y = f64::from(film_settings.height);
        let (screen_min, screen_max) = match params.fov {
            FoV::X(_) => {
                let ar = film_x / film_y;
                ((-1.0, -1.0 / ar), (1.0, 1.0 / ar))
            }
            FoV::Y(_) => {
                let ar = film_y / film_x;
                ((-1.0 / ar, -1.0), (1.0 / ar, 1.0))
            }
        };

        // Raster space keeps y up; the film's vertical flip turns it into the
        // usual top-down buffer at publication time
        let screen_to_raster = &scale(film_x, film_y, 1.0)
            * &(&scale(
                1.0 / (screen_max.0 - screen_min.0),
                1.0 / (screen_max.1 - screen_min.1),
                1.0,
            ) * &translation(Vec3::new(-screen_min.0, -screen_min.1, 0.0)));

        let raster_to_camera = &camera_to_screen.inverted() * &screen_to_raster.inverted();

        Self {
            camera_to_world,
            raster_to_camera,
        }
    }

    /// Creates a new primary [Ray] through the film position `(x, y)`.
    pub fn ray(&self, x: f64, y: f64) -> Ray {
        let p_film = Point3::new(x, y, 0.0);
        let p_camera = &self.raster_to_camera * p_film;
        let r = Ray::new(Point3::zeros(), Vec3::from(p_camera).normalized());
        &self.camera_to_world * r
    }
}
