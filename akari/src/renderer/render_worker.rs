use log::{debug, error, trace};
use rand::Rng;
use rand_pcg::Pcg32;
use std::{
    sync::{
        mpsc::{Receiver, RecvError, Sender, TryRecvError},
        Arc,
    },
    time::Instant,
};

use crate::{camera::Camera, film::FilmPartition, scene::Scene};

/// Called after each pixel publication with the pixel's framebuffer index.
///
/// The renderer assumes nothing about what the callback does and tolerates it
/// being a no-op.
pub type PixelCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub enum Message {
    PassFinished {
        thread_id: usize,
        render_id: usize,
        pass: u64,
        elapsed_s: f32,
    },
    Stopped {
        thread_id: usize,
    },
}

pub struct Payload {
    pub render_id: usize,
    pub scene: Arc<Scene>,
    pub camera: Arc<Camera>,
    pub partition: FilmPartition,
    pub on_pixel_rendered: Option<PixelCallback>,
    pub rng_seed: u64,
}

enum Interrupt {
    Killed,
    NewPayload(Payload),
}

pub fn launch(
    thread_id: usize,
    to_parent: &Sender<Message>,
    from_parent: &Receiver<Option<Payload>>,
) {
    debug!("Render thread {}: Begin", thread_id);

    let mut pending: Option<Payload> = None;
    'thread: loop {
        let payload = match pending.take() {
            Some(payload) => payload,
            // Blocking recv to avoid spinning while there is no work
            None => match from_parent.recv() {
                Ok(Some(payload)) => payload,
                Ok(None) => break 'thread,
                Err(RecvError {}) => {
                    panic!("Render thread {}: Receive channel disconnected", thread_id)
                }
            },
        };

        match render_passes(thread_id, payload, to_parent, from_parent) {
            Interrupt::Killed => break 'thread,
            Interrupt::NewPayload(payload) => pending = Some(payload),
        }
    }

    if let Err(why) = to_parent.send(Message::Stopped { thread_id }) {
        error!(
            "Render thread {}: Error notifying parent on stop: {}",
            thread_id, why
        );
    }
    debug!("Render thread {}: End", thread_id);
}

/// Refines the worker's partition pass after pass until the parent interrupts.
fn render_passes(
    thread_id: usize,
    mut payload: Payload,
    to_parent: &Sender<Message>,
    from_parent: &Receiver<Option<Payload>>,
) -> Interrupt {
    // Every worker samples its own uncorrelated prng stream
    let mut rng = Pcg32::new(payload.rng_seed, thread_id as u64);
    let data = Arc::clone(payload.partition.data());
    let mut pass: u64 = 0;

    loop {
        let pass_start = Instant::now();

        let Payload {
            render_id,
            scene,
            camera,
            partition,
            on_pixel_rendered,
            ..
        } = &mut payload;
        let render_id = *render_id;

        for pixel in partition.pixels_mut() {
            // Cancellation is polled between pixels so the estimate in flight
            // always completes
            match from_parent.try_recv() {
                Ok(msg) => {
                    debug!("Render thread {}: Interrupted by parent", thread_id);
                    return match msg {
                        Some(new_payload) => Interrupt::NewPayload(new_payload),
                        None => Interrupt::Killed,
                    };
                }
                Err(TryRecvError::Empty) => (),
                Err(TryRecvError::Disconnected) => {
                    panic!("Render thread {}: Receive channel disconnected", thread_id)
                }
            }

            let jx: f64 = rng.gen();
            let jy: f64 = rng.gen();
            let ray = camera.ray(f64::from(pixel.x()) + jx, f64::from(pixel.y()) + jy);

            pixel.add_sample(scene.radiance(&ray, &mut rng));
            pixel.update(&data);

            if let Some(callback) = on_pixel_rendered {
                callback(pixel.index());
            }
        }

        pass += 1;
        trace!("Render thread {}: Pass {} done", thread_id, pass);

        if let Err(why) = to_parent.send(Message::PassFinished {
            thread_id,
            render_id,
            pass,
            elapsed_s: pass_start.elapsed().as_secs_f32(),
        }) {
            error!(
                "Render thread {}: Error notifying parent on pass: {}",
                thread_id, why
            );
        }
    }
}
