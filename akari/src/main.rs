use log::info;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use akari::{
    camera::Camera,
    expect,
    film::{film_partitions, Film, FilmSettings},
    renderer::{default_worker_count, PixelCallback, RenderStatus, Renderer},
    scene::{Scene, TransportSettings},
};

/// Driver configuration, read from an optional YAML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
struct DriverSettings {
    film: FilmSettings,
    transport: TransportSettings,
    passes: u64,
    workers: Option<usize>,
    output: PathBuf,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            film: FilmSettings::default(),
            transport: TransportSettings::default(),
            passes: 16,
            workers: None,
            output: PathBuf::from("akari.exr"),
        }
    }
}

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("akari.log")?)
        .apply()?;
    Ok(())
}

fn load_settings() -> DriverSettings {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "akari.yaml".into());
    match std::fs::read_to_string(&path) {
        Ok(text) => expect!(serde_yaml::from_str(&text), "Failed to parse settings"),
        Err(_) => {
            info!("No settings file at '{}', using defaults", path);
            DriverSettings::default()
        }
    }
}

fn write_exr(film: &Film, path: &Path) {
    let width = film.width() as usize;
    let height = film.height() as usize;
    let pixels = film.snapshot();

    fn channel(v: u32) -> f32 {
        ((v & 0xFF) as f32) / 255.0
    }

    expect!(
        exr::prelude::write_rgb_file(path, width, height, |x, y| {
            let p = pixels[y * width + x];
            (channel(p >> 16), channel(p >> 8), channel(p))
        }),
        "Error writing EXR"
    );
    info!("EXR written to '{}'", path.display());
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    }

    let settings = load_settings();

    // The configuration layer pushes transport controls into the scene; the
    // scene never reads configuration itself
    let (mut scene, camera_params) = Scene::cornell_box(TransportSettings::default());
    scene.apply_settings(settings.transport);

    let film = Film::new(settings.film);
    let camera = Arc::new(Camera::new(camera_params, settings.film));

    // Partition count must divide the pixel count evenly
    let requested = settings.workers.unwrap_or_else(default_worker_count);
    let worker_count = (1..=requested)
        .rev()
        .find(|c| film.pixel_count() % c == 0)
        .unwrap_or(1);
    let partitions = film_partitions(&film, worker_count);

    let rendered_pixels = Arc::new(AtomicUsize::new(0));
    let on_pixel = {
        let counter = Arc::clone(&rendered_pixels);
        Some(Arc::new(move |_index: usize| {
            counter.fetch_add(1, Ordering::Relaxed);
        }) as PixelCallback)
    };

    info!(
        "Rendering {}x{} for {} passes on {} workers",
        settings.film.width, settings.film.height, settings.passes, worker_count
    );
    let mut renderer = Renderer::launch(Arc::new(scene), camera, partitions, on_pixel);

    loop {
        std::thread::sleep(Duration::from_millis(200));
        if let Some(RenderStatus::Progress {
            active_workers,
            full_passes,
            total_passes,
        }) = renderer.check_status()
        {
            info!(
                "{}/{} full passes ({} worker passes, {} pixel updates)",
                full_passes,
                settings.passes,
                total_passes,
                rendered_pixels.load(Ordering::Relaxed)
            );
            if full_passes >= settings.passes || active_workers == 0 {
                break;
            }
        }
    }
    renderer.stop();

    write_exr(&film, &settings.output);
}
