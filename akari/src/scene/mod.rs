use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    camera::{CameraParameters, FoV},
    materials::{Dielectric, Diffuse, Material, Solid, Specular},
    math::{Bounds3, Point3, Ray, Spectrum, Vec3},
    shapes::{Shape, Sphere, Triangle},
    textures::{ConstantTexture, Texture},
};

/// Transport controls pushed in from the external configuration layer.
///
/// The scene never reads configuration itself; a new value of this struct is
/// applied between renders through [`Scene::apply_settings`].
#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
pub struct TransportSettings {
    /// Short-circuit transport to plain texture color for interactive feedback.
    pub real_time: bool,
    /// Skip the 1/p reweighting of roulette survivors. Biased but cheaper.
    pub skip_roulette: bool,
    /// Bounce count under which roulette never terminates a path.
    pub min_depth: u32,
    /// Hard recursion cap on top of the statistical termination.
    pub max_depth: u32,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            real_time: false,
            skip_roulette: false,
            min_depth: 5,
            max_depth: 64,
        }
    }
}

/// A shape container with the recursive radiance integrator.
pub struct Scene {
    shapes: Vec<Arc<dyn Shape>>,
    transport: TransportSettings,
}

impl Scene {
    /// Creates a new empty `Scene`.
    pub fn new(transport: TransportSettings) -> Self {
        Self {
            shapes: Vec::new(),
            transport,
        }
    }

    /// Appends `shape` to this `Scene`.
    ///
    /// Not safe concurrently with active rendering; pause, reconfigure, resume.
    pub fn add_shape(&mut self, shape: Arc<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// Removes `shape` from this `Scene` by identity.
    ///
    /// Returns `true` if the shape was present. Not safe concurrently with
    /// active rendering.
    pub fn remove_shape(&mut self, shape: &Arc<dyn Shape>) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| !Arc::ptr_eq(s, shape));
        self.shapes.len() != before
    }

    /// Returns the shapes in this `Scene`.
    pub fn shapes(&self) -> &[Arc<dyn Shape>] {
        &self.shapes
    }

    /// Returns the active transport controls.
    pub fn transport(&self) -> &TransportSettings {
        &self.transport
    }

    /// Applies transport controls pushed from the configuration layer.
    ///
    /// Not safe concurrently with active rendering.
    pub fn apply_settings(&mut self, settings: TransportSettings) {
        self.transport = settings;
    }

    /// Returns the axis-aligned bound of all shapes in this `Scene`.
    pub fn world_bound(&self) -> Bounds3 {
        self.shapes
            .iter()
            .fold(Bounds3::default(), |b, s| b.union_b(s.world_bound()))
    }

    /// Finds the closest shape `ray` hits, if any.
    ///
    /// Linear scan over the shape list starting from the infinite sentinel;
    /// candidates can only ever lower the winning distance.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, &Arc<dyn Shape>)> {
        let mut closest = f64::INFINITY;
        let mut winner = None;
        for shape in &self.shapes {
            if let Some(t) = shape.intersect(ray) {
                if t < closest {
                    closest = t;
                    winner = Some(shape);
                }
            }
        }
        winner.map(|shape| (closest, shape))
    }

    /// Estimates the radiance arriving along `ray`.
    ///
    /// Recurses through the winning shape's material; termination comes from
    /// Russian roulette past the configured minimum depth plus the hard cap.
    pub fn radiance(&self, ray: &Ray, rng: &mut Pcg32) -> Spectrum {
        let Some((t, shape)) = self.intersect(ray) else {
            return Spectrum::zeros();
        };
        let si = shape.interaction(ray, t);

        if self.transport.real_time {
            return si.color;
        }

        let material = shape.material();
        let emission = material.emission();

        if ray.depth >= self.transport.max_depth {
            // Roulette alone can't bound pathological paths
            return emission;
        }

        let mut color = si.color;
        if ray.depth > self.transport.min_depth {
            let p = color.max_component();
            if rng.gen::<f64>() >= p {
                return emission;
            }
            if !self.transport.skip_roulette {
                color /= p;
            }
        }

        emission + color * material.radiance(self, ray, &si, rng)
    }

    /// Constructs the Cornell box: diffuse sphere walls, a mirror sphere, a
    /// glass sphere, a flat-shaded triangle wedge and a spherical area light.
    pub fn cornell_box(transport: TransportSettings) -> (Self, CameraParameters) {
        const WALL: f64 = 1e5;

        let grey = Arc::new(ConstantTexture::new(Spectrum::new(0.75, 0.75, 0.75)));
        let red = Arc::new(ConstantTexture::new(Spectrum::new(0.75, 0.25, 0.25)));
        let blue = Arc::new(ConstantTexture::new(Spectrum::new(0.25, 0.25, 0.75)));
        let mirror = Arc::new(ConstantTexture::new(Spectrum::ones() * 0.999));
        let glass = Arc::new(ConstantTexture::new(Spectrum::ones() * 0.999));
        let black = Arc::new(ConstantTexture::new(Spectrum::zeros()));
        let teal = Arc::new(ConstantTexture::new(Spectrum::new(0.3, 0.8, 0.7)));

        let diffuse = Arc::new(Diffuse::default());
        let light = Arc::new(Diffuse::new(Spectrum::new(12.0, 12.0, 12.0)));

        let mut scene = Self::new(transport);

        // Walls
        let walls: [(Point3, &Arc<ConstantTexture>); 6] = [
            (Point3::new(WALL + 1.0, 40.8, 81.6), &red),
            (Point3::new(-WALL + 99.0, 40.8, 81.6), &blue),
            (Point3::new(50.0, 40.8, WALL), &grey),
            (Point3::new(50.0, 40.8, -WALL + 170.0), &black),
            (Point3::new(50.0, WALL, 81.6), &grey),
            (Point3::new(50.0, -WALL + 81.6, 81.6), &grey),
        ];
        for (center, texture) in walls {
            scene.add_shape(Arc::new(Sphere::new(
                center,
                WALL,
                Arc::clone(&diffuse) as Arc<dyn Material>,
                Arc::clone(texture) as Arc<dyn Texture>,
            )));
        }

        // Mirror ball
        scene.add_shape(Arc::new(Sphere::new(
            Point3::new(27.0, 16.5, 47.0),
            16.5,
            Arc::new(Specular::default()),
            mirror,
        )));

        // Glass ball
        scene.add_shape(Arc::new(Sphere::new(
            Point3::new(73.0, 16.5, 78.0),
            16.5,
            Arc::new(Dielectric::new(Spectrum::zeros(), 1.5)),
            glass,
        )));

        // Flat-shaded wedge
        scene.add_shape(Arc::new(Triangle::new(
            Point3::new(15.0, 0.0, 90.0),
            Point3::new(45.0, 0.0, 110.0),
            Point3::new(30.0, 35.0, 100.0),
            Arc::new(Solid::default()),
            teal,
        )));

        // Light
        scene.add_shape(Arc::new(Sphere::new(
            Point3::new(50.0, 681.33, 81.6),
            600.0,
            light,
            black,
        )));

        let camera = CameraParameters {
            position: Point3::new(50.0, 52.0, 295.6),
            target: Point3::new(50.0, 47.74, 195.6),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: FoV::X(54.4),
        };

        (scene, camera)
    }
}
