//! A progressive stochastic path tracer.
//!
//! The library estimates radiance along camera rays by recursive Monte Carlo
//! simulation of light transport and accumulates per-pixel estimates into a
//! shared framebuffer that a presentation layer can consume while workers keep
//! refining the image.

pub mod camera;
pub mod film;
pub mod interaction;
mod macros;
pub mod materials;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod shapes;
pub mod textures;
