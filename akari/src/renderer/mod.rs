mod render_worker;

pub use render_worker::PixelCallback;

use log::debug;
use rand::Rng;
use std::{
    sync::{
        mpsc::{channel, Receiver, Sender, TryRecvError},
        Arc,
    },
    thread::JoinHandle,
};

use crate::{camera::Camera, film::FilmPartition, scene::Scene};
use render_worker::{Message, Payload};

/// Returns the worker count matching the available hardware parallelism.
pub fn default_worker_count() -> usize {
    num_cpus::get().max(1)
}

/// A progress report assembled from worker messages.
#[derive(Debug, Copy, Clone)]
pub enum RenderStatus {
    Progress {
        /// Workers still refining their partition.
        active_workers: usize,
        /// Passes completed by every worker, i.e. full samples per pixel.
        full_passes: u64,
        /// Sum of passes completed across workers.
        total_passes: u64,
    },
}

struct WorkerHandle {
    tx: Sender<Option<Payload>>,
    handle: JoinHandle<()>,
}

/// The front end of a progressive render.
///
/// Spawns one worker thread per film partition; workers refine their pixels
/// until [`Renderer::stop`] or drop. Partition ownership is fixed for the
/// renderer's lifetime which is what keeps pixel publication lock-free.
pub struct Renderer {
    workers: Vec<WorkerHandle>,
    rx: Receiver<Message>,
    render_id: usize,
    worker_passes: Vec<u64>,
    active_workers: usize,
}

impl Renderer {
    /// Launches a progressive render over `partitions`.
    ///
    /// Each partition is bound to exactly one new worker thread. The optional
    /// `on_pixel_rendered` callback is invoked by every worker after each
    /// pixel publication.
    pub fn launch(
        scene: Arc<Scene>,
        camera: Arc<Camera>,
        partitions: Vec<FilmPartition>,
        on_pixel_rendered: Option<PixelCallback>,
    ) -> Self {
        assert!(!partitions.is_empty(), "Render launch without partitions");

        let render_id = 1;
        let rng_seed: u64 = rand::thread_rng().gen();
        let worker_count = partitions.len();
        let (worker_send, rx) = channel();

        debug!("launch: Spawning {} render threads", worker_count);
        let workers = partitions
            .into_iter()
            .enumerate()
            .map(|(thread_id, partition)| {
                let (tx, worker_rx) = channel();
                let to_parent = worker_send.clone();
                let handle = std::thread::Builder::new()
                    .name(format!("RenderWorker{}", thread_id))
                    .spawn(move || {
                        render_worker::launch(thread_id, &to_parent, &worker_rx);
                    })
                    .expect("Failed to spawn RenderWorker");

                tx.send(Some(Payload {
                    render_id,
                    scene: Arc::clone(&scene),
                    camera: Arc::clone(&camera),
                    partition,
                    on_pixel_rendered: on_pixel_rendered.clone(),
                    rng_seed,
                }))
                .expect("Failed to send payload to a fresh RenderWorker");

                WorkerHandle { tx, handle }
            })
            .collect();

        Self {
            workers,
            rx,
            render_id,
            worker_passes: vec![0; worker_count],
            active_workers: worker_count,
        }
    }

    /// Returns the number of workers this `Renderer` was launched with.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Drains pending worker messages and reports progress if any was made.
    pub fn check_status(&mut self) -> Option<RenderStatus> {
        let mut progressed = false;
        loop {
            match self.rx.try_recv() {
                Ok(Message::PassFinished {
                    thread_id,
                    render_id,
                    pass,
                    elapsed_s,
                }) => {
                    if render_id == self.render_id {
                        debug!(
                            "check_status: Thread {} finished pass {} in {:.2}s",
                            thread_id, pass, elapsed_s
                        );
                        self.worker_passes[thread_id] = pass;
                        progressed = true;
                    } else {
                        debug!("check_status: Stale pass from thread {}", thread_id);
                    }
                }
                Ok(Message::Stopped { thread_id }) => {
                    debug!("check_status: Thread {} stopped", thread_id);
                    self.active_workers = self.active_workers.saturating_sub(1);
                    progressed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    panic!("check_status: All render workers have died");
                }
            }
        }

        progressed.then(|| RenderStatus::Progress {
            active_workers: self.active_workers,
            full_passes: self.worker_passes.iter().copied().min().unwrap_or(0),
            total_passes: self.worker_passes.iter().sum(),
        })
    }

    /// Stops all workers and joins them.
    ///
    /// Workers finish their in-flight pixel before exiting.
    pub fn stop(&mut self) {
        for worker in &self.workers {
            // A dead worker already counts as stopped
            drop(worker.tx.send(None));
        }
        for worker in self.workers.drain(..) {
            worker.handle.join().expect("RenderWorker panicked");
        }
        self.active_workers = 0;
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.stop();
    }
}
