#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand_pcg::Pcg32;
    use std::sync::Arc;

    use akari::{
        materials::{Diffuse, Solid, Specular},
        math::{Point3, Ray, Spectrum, Vec3},
        scene::{Scene, TransportSettings},
        shapes::{Shape, Sphere},
        textures::ConstantTexture,
    };

    fn rng() -> Pcg32 {
        Pcg32::new(0x0123_4567_89AB_CDEF, 7)
    }

    fn sphere(center: Point3, radius: f64, color: Spectrum, emission: Spectrum) -> Arc<dyn Shape> {
        Arc::new(Sphere::new(
            center,
            radius,
            Arc::new(Diffuse::new(emission)),
            Arc::new(ConstantTexture::new(color)),
        ))
    }

    #[test]
    fn add_and_remove_by_identity() {
        let mut scene = Scene::new(TransportSettings::default());

        let a = sphere(Point3::zeros(), 1.0, Spectrum::ones(), Spectrum::zeros());
        // Same geometry, different identity
        let b = sphere(Point3::zeros(), 1.0, Spectrum::ones(), Spectrum::zeros());

        scene.add_shape(Arc::clone(&a));
        scene.add_shape(Arc::clone(&b));
        assert_eq!(scene.shapes().len(), 2);

        assert!(scene.remove_shape(&a));
        assert_eq!(scene.shapes().len(), 1);
        assert!(Arc::ptr_eq(&scene.shapes()[0], &b));

        // Removing again is a no-op
        assert!(!scene.remove_shape(&a));
        assert!(scene.remove_shape(&b));
        assert!(scene.shapes().is_empty());
    }

    #[test]
    fn intersect_picks_closest() {
        let mut scene = Scene::new(TransportSettings::default());
        let far = sphere(
            Point3::new(0.0, 0.0, 10.0),
            1.0,
            Spectrum::ones(),
            Spectrum::zeros(),
        );
        let near = sphere(
            Point3::new(0.0, 0.0, 5.0),
            1.0,
            Spectrum::ones(),
            Spectrum::zeros(),
        );
        scene.add_shape(Arc::clone(&far));
        scene.add_shape(Arc::clone(&near));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let (t, shape) = scene.intersect(&ray).unwrap();
        assert_abs_diff_eq!(t, 4.0, epsilon = 1e-12);
        assert!(Arc::ptr_eq(shape, &near));
    }

    #[test]
    fn miss_is_black() {
        let scene = Scene::new(TransportSettings::default());
        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        assert!(scene.radiance(&ray, &mut rng()).is_black());
    }

    #[test]
    fn direct_hit_includes_emission() {
        let emission = Spectrum::new(1.0, 2.0, 3.0);
        let mut scene = Scene::new(TransportSettings::default());
        scene.add_shape(sphere(
            Point3::new(0.0, 0.0, 5.0),
            1.0,
            Spectrum::zeros(),
            emission,
        ));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        // Black surface color kills the recursive term, emission remains
        assert_eq!(scene.radiance(&ray, &mut rng()), emission);
    }

    #[test]
    fn preview_mode_returns_texture_color() {
        let color = Spectrum::new(0.1, 0.6, 0.3);
        let transport = TransportSettings {
            real_time: true,
            ..TransportSettings::default()
        };
        let mut scene = Scene::new(transport);
        scene.add_shape(sphere(
            Point3::new(0.0, 0.0, 5.0),
            1.0,
            color,
            Spectrum::new(9.0, 9.0, 9.0),
        ));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        // Emission and transport are skipped entirely
        assert_eq!(scene.radiance(&ray, &mut rng()), color);
    }

    #[test]
    fn roulette_terminates_black_paths_with_emission() {
        let emission = Spectrum::new(0.5, 0.5, 0.5);
        let mut scene = Scene::new(TransportSettings {
            min_depth: 2,
            ..TransportSettings::default()
        });
        scene.add_shape(sphere(
            Point3::new(0.0, 0.0, 5.0),
            1.0,
            Spectrum::zeros(),
            emission,
        ));

        // Deep enough that the roulette runs; a black surface never survives
        let mut ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        for _ in 0..3 {
            ray = ray.reflect(ray.o, ray.d);
        }
        assert_eq!(ray.depth, 3);
        assert_eq!(scene.radiance(&ray, &mut rng()), emission);
    }

    #[test]
    fn hard_depth_cap_bounds_mirror_boxes() {
        // Two specular spheres facing each other would recurse forever on
        // statistical termination alone since their color is full white
        let mirror = |center| -> Arc<dyn Shape> {
            Arc::new(Sphere::new(
                center,
                1.0,
                Arc::new(Specular::default()),
                Arc::new(ConstantTexture::new(Spectrum::ones())),
            ))
        };

        let mut scene = Scene::new(TransportSettings {
            skip_roulette: true,
            ..TransportSettings::default()
        });
        scene.add_shape(mirror(Point3::new(0.0, 0.0, 5.0)));
        scene.add_shape(mirror(Point3::new(0.0, 0.0, -5.0)));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        // Terminates and nothing emits
        assert!(scene.radiance(&ray, &mut rng()).is_black());
    }

    #[test]
    fn settings_push_updates_transport() {
        let mut scene = Scene::new(TransportSettings::default());
        assert!(!scene.transport().real_time);

        let pushed = TransportSettings {
            real_time: true,
            skip_roulette: true,
            min_depth: 9,
            max_depth: 32,
        };
        scene.apply_settings(pushed);
        assert!(scene.transport().real_time);
        assert!(scene.transport().skip_roulette);
        assert_eq!(scene.transport().min_depth, 9);
        assert_eq!(scene.transport().max_depth, 32);
    }

    #[test]
    fn world_bound_covers_all_shapes() {
        let mut scene = Scene::new(TransportSettings::default());
        scene.add_shape(sphere(
            Point3::new(-5.0, 0.0, 0.0),
            1.0,
            Spectrum::ones(),
            Spectrum::zeros(),
        ));
        scene.add_shape(sphere(
            Point3::new(0.0, 7.0, 0.0),
            2.0,
            Spectrum::ones(),
            Spectrum::zeros(),
        ));

        let b = scene.world_bound();
        assert_eq!(b.p_min, Point3::new(-6.0, -2.0, -2.0));
        assert_eq!(b.p_max, Point3::new(2.0, 9.0, 2.0));
    }

    #[test]
    fn cornell_box_smoke() {
        let (scene, camera) = Scene::cornell_box(TransportSettings::default());

        // Six walls, three props and a light
        assert_eq!(scene.shapes().len(), 10);

        // The camera looks into the box
        let ray = Ray::new(camera.position, (camera.target - camera.position).normalized());
        assert!(scene.intersect(&ray).is_some());

        // A pass of radiance estimates stays finite
        let mut rng = rng();
        for _ in 0..16 {
            let estimate = scene.radiance(&ray, &mut rng);
            assert!(!estimate.has_nans());
        }
    }

    #[test]
    fn solid_shapes_shade_without_recursion() {
        let color = Spectrum::new(0.2, 0.4, 0.6);
        let mut scene = Scene::new(TransportSettings::default());
        scene.add_shape(Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, 5.0),
            1.0,
            Arc::new(Solid::default()),
            Arc::new(ConstantTexture::new(color)),
        )));

        let ray = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        // The integrator folds the texture color in on top of the material's
        // own texture-color return
        assert_abs_diff_eq!(scene.radiance(&ray, &mut rng()), color * color);
    }
}
