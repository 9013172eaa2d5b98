use std::time::Instant;

use akari::{
    math::{Matrix4x4, Ray},
    scene::{Scene, TransportSettings},
};
use rand_pcg::Pcg32;

const INVERT_ITERATIONS: usize = 5_000_000;
const RADIANCE_ITERATIONS: usize = 100_000;

fn bench_invert(m: &Matrix4x4) {
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..INVERT_ITERATIONS {
        m = m.inverted();
        if m.m[0][0].is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_invert = (elapsed_ns as f64) * 1e-3 / (INVERT_ITERATIONS as f64);
    println!(
        "Invert   took {:4.1} ms total, {:0.4} us per invert",
        elapsed_ms, us_per_invert
    );
}

fn bench_mul(m: &Matrix4x4) {
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..INVERT_ITERATIONS {
        m = &m * &m;
        if m.m[0][0] == 0.0 {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_mul = (elapsed_ns as f64) * 1e-3 / (INVERT_ITERATIONS as f64);
    println!(
        "Mul      took {:4.1} ms total, {:0.4} us per mul",
        elapsed_ms, us_per_mul
    );
}

fn bench_radiance() {
    let (scene, camera_params) = Scene::cornell_box(TransportSettings::default());
    let dir = (camera_params.target - camera_params.position).normalized();
    let ray = Ray::new(camera_params.position, dir);
    let mut rng = Pcg32::new(0xBEEF_CAFE, 0);

    let start = Instant::now();
    let mut acc = 0.0;
    for _ in 0..RADIANCE_ITERATIONS {
        acc += scene.radiance(&ray, &mut rng).luminance();
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_path = (elapsed_ns as f64) * 1e-3 / (RADIANCE_ITERATIONS as f64);
    println!(
        "Radiance took {:4.1} ms total, {:0.4} us per path (mean luma {:0.4})",
        elapsed_ms,
        us_per_path,
        acc / (RADIANCE_ITERATIONS as f64)
    );
}

fn main() {
    let s = Matrix4x4::new([
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 3.0, 0.0, 0.0],
        [0.0, 0.0, 4.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let r = Matrix4x4::new([
        [-0.6024969, 0.6975837, -0.3877816, 0.0],
        [-0.1818856, -0.5930915, -0.7843214, 0.0],
        [-0.7771198, -0.4020193, 0.4842162, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let t = Matrix4x4::new([
        [1.0, 0.0, 0.0, 2.0],
        [0.0, 1.0, 0.0, 3.0],
        [0.0, 0.0, 1.0, 4.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    println!("Identity");
    bench_invert(&Matrix4x4::identity());

    println!("S");
    bench_invert(&s);

    println!("SR");
    let sr = &r * &s;
    bench_invert(&sr);

    println!("SRT");
    let srt = &t * &(&r * &s);
    bench_invert(&srt);

    println!("Mul");
    bench_mul(&srt);

    println!("Cornell");
    bench_radiance();
}
