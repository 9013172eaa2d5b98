use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use crate::math::Spectrum;

/// The settings for a [Film].
#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
pub struct FilmSettings {
    /// The total film resolution.
    pub width: u32,
    /// The total film resolution.
    pub height: u32,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// The shared framebuffer pixel estimates are published into.
///
/// Slots hold packed `0x00RRGGBB` values. Every slot is owned by exactly one
/// [Pixel] in one [FilmPartition], so the relaxed atomic stores can never
/// race; the presentation layer snapshots whenever it likes.
pub struct Film {
    width: u32,
    height: u32,
    data: Arc<Vec<AtomicU32>>,
}

impl Film {
    /// Creates a new black `Film`.
    pub fn new(settings: FilmSettings) -> Self {
        assert!(
            settings.width > 0 && settings.height > 0,
            "Film with a zero extent"
        );

        let pixel_count = (settings.width as usize) * (settings.height as usize);
        let data: Arc<Vec<AtomicU32>> =
            Arc::new((0..pixel_count).map(|_| AtomicU32::new(0)).collect());

        Self {
            width: settings.width,
            height: settings.height,
            data,
        }
    }

    /// Returns the width of this `Film` in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this `Film` in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of pixels in this `Film`.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns a handle to the raw framebuffer of this `Film`.
    pub fn data(&self) -> &Arc<Vec<AtomicU32>> {
        &self.data
    }

    /// Copies the current packed framebuffer contents out.
    pub fn snapshot(&self) -> Vec<u32> {
        self.data.iter().map(|p| p.load(Ordering::Relaxed)).collect()
    }
}

/// A per-pixel sample accumulator.
pub struct Pixel {
    index: usize,
    x: u32,
    y: u32,
    samples: u32,
    accum: Spectrum,
}

impl Pixel {
    fn new(index: usize, x: u32, y: u32) -> Self {
        Self {
            index,
            x,
            y,
            samples: 0,
            accum: Spectrum::zeros(),
        }
    }

    /// Returns the framebuffer slot this `Pixel` publishes into.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the screen-space x coordinate of this `Pixel`.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Returns the screen-space y coordinate of this `Pixel`.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Returns the number of samples accumulated into this `Pixel`.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Folds one more radiance estimate into this `Pixel`.
    pub fn add_sample(&mut self, sample: Spectrum) {
        self.accum += sample;
        self.samples += 1;
    }

    /// Resets this `Pixel` to no samples and a black accumulator.
    pub fn clear(&mut self) {
        self.samples = 0;
        self.accum = Spectrum::zeros();
    }

    /// Publishes the current estimate of this `Pixel` into its framebuffer slot.
    ///
    /// Averages the accumulated spectrum, gamma-corrects and packs to 8-bit
    /// RGB. A `Pixel` without samples publishes black.
    pub fn update(&self, data: &[AtomicU32]) {
        data[self.index].store(self.packed(), Ordering::Relaxed);
    }

    fn packed(&self) -> u32 {
        if self.samples == 0 {
            return 0;
        }
        let mean = self.accum / f64::from(self.samples);
        (to_srgb_byte(mean.r) << 16) | (to_srgb_byte(mean.g) << 8) | to_srgb_byte(mean.b)
    }
}

fn to_srgb_byte(v: f64) -> u32 {
    (v.clamp(0.0, 1.0).powf(1.0 / 2.2) * 255.0 + 0.5) as u32
}

/// An immutable, randomly ordered partition of a [Film]'s pixels.
///
/// The partitions of one [film_partitions] call are disjoint and cover the
/// film exactly, which is what lets every worker run lock-free against the
/// shared framebuffer. The random visit order turns scan-line artifacts of
/// progressive refinement into plain noise.
pub struct FilmPartition {
    data: Arc<Vec<AtomicU32>>,
    pixels: Vec<Pixel>,
}

impl FilmPartition {
    /// Returns the number of pixels in this `FilmPartition`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Checks if this `FilmPartition` is empty.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the `i`th pixel in iteration order.
    pub fn pixel(&self, i: usize) -> &Pixel {
        &self.pixels[i]
    }

    /// Finds the pixel at screen-space `(x, y)` if this partition owns it.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<&Pixel> {
        self.pixels.iter().find(|p| p.x == x && p.y == y)
    }

    /// Returns the pixels of this `FilmPartition` in iteration order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the pixels of this `FilmPartition` mutably.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Returns a handle to the framebuffer this `FilmPartition` publishes into.
    pub fn data(&self) -> &Arc<Vec<AtomicU32>> {
        &self.data
    }
}

/// Deals `film`'s pixels into `count` disjoint, randomly ordered partitions.
///
/// Pixel row 0 maps to the last framebuffer row so the published image follows
/// the usual top-down raster convention. Panics unless the pixel count divides
/// evenly by `count`.
pub fn film_partitions(film: &Film, count: usize) -> Vec<FilmPartition> {
    let pixel_count = film.pixel_count();
    assert!(count > 0, "Zero partitions requested");
    assert!(
        pixel_count % count == 0,
        "Pixel count {} not divisible into {} partitions",
        pixel_count,
        count
    );

    let width = film.width();
    let height = film.height();
    let mut pixels: Vec<Pixel> = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let flipped_row = (height - 1 - y) as usize;
                Pixel::new(flipped_row * (width as usize) + (x as usize), x, y)
            })
        })
        .collect();

    pixels.shuffle(&mut rand::thread_rng());

    let chunk = pixel_count / count;
    let mut partitions = Vec::with_capacity(count);
    for _ in 0..count {
        partitions.push(FilmPartition {
            data: Arc::clone(film.data()),
            pixels: pixels.split_off(pixels.len() - chunk),
        });
    }
    partitions
}
