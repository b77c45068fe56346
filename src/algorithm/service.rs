//! Single-writer placement loop serving concurrent callers
//!
//! The engine lives on one dedicated thread and consumes requests from a
//! single queue, so requests are serviced strictly in the order they were
//! accepted and no placement ever reads a frontier another one is mutating.
//! Callers block on a per-request reply channel.

use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread::{self, JoinHandle};

use image::Rgb;
use log::{debug, info};

use crate::algorithm::cost::Scorer;
use crate::algorithm::evaluator::CancelToken;
use crate::algorithm::executor::PlacementEngine;
use crate::io::configuration::THREAD_NAME;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::canvas::Canvas;
use crate::spatial::grid::Point;

/// Work item consumed by the placement loop
enum Request {
    /// Place a colour and reply with its cell
    Place {
        color: Rgb<u8>,
        reply: SyncSender<Result<Point>>,
    },
    /// Reply with a copy of the canvas between two placements
    Snapshot { reply: SyncSender<Canvas> },
    /// Stop after the requests already queued
    Shutdown,
}

/// Cloneable entry point for submitting placements from any thread
#[derive(Clone)]
pub struct PlacementHandle {
    sender: Sender<Request>,
}

impl PlacementHandle {
    /// Queue a colour and wait for its placement
    ///
    /// # Errors
    ///
    /// Returns the engine's error for this request (`CanvasFull`,
    /// `Cancelled`, ...) or `ServiceClosed` if the loop has stopped
    pub fn place(&self, color: Rgb<u8>) -> Result<Point> {
        let (reply, response) = mpsc::sync_channel(1);
        self.sender
            .send(Request::Place { color, reply })
            .map_err(|_closed| AlgorithmError::ServiceClosed)?;
        response
            .recv()
            .map_err(|_closed| AlgorithmError::ServiceClosed)?
    }

    /// Copy of the canvas taken between two placements
    ///
    /// # Errors
    ///
    /// Returns `ServiceClosed` if the loop has stopped
    pub fn snapshot(&self) -> Result<Canvas> {
        let (reply, response) = mpsc::sync_channel(1);
        self.sender
            .send(Request::Snapshot { reply })
            .map_err(|_closed| AlgorithmError::ServiceClosed)?;
        response
            .recv()
            .map_err(|_closed| AlgorithmError::ServiceClosed)
    }
}

/// Owner of the placement thread
///
/// Dropping the service shuts the loop down after the queued requests.
pub struct PlacementService<S: Scorer + Send + 'static> {
    handle: PlacementHandle,
    cancel: CancelToken,
    worker: Option<JoinHandle<PlacementEngine<S>>>,
}

impl<S: Scorer + Send + 'static> PlacementService<S> {
    /// Move an engine onto a dedicated placement thread
    ///
    /// # Errors
    ///
    /// Returns `WorkerPool` if the thread cannot be spawned
    pub fn spawn(engine: PlacementEngine<S>) -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let cancel = engine.cancel_token();

        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_loop(engine, &receiver))
            .map_err(|error| AlgorithmError::WorkerPool {
                reason: format!("failed to spawn placement thread: {error}"),
            })?;

        Ok(Self {
            handle: PlacementHandle { sender },
            cancel,
            worker: Some(worker),
        })
    }

    /// New handle for submitting requests
    pub fn handle(&self) -> PlacementHandle {
        self.handle.clone()
    }

    /// Abandon the in-flight evaluation and fail every queued request
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Stop the loop after the queued requests and recover the engine
    ///
    /// # Errors
    ///
    /// Returns `WorkerPool` if the placement thread panicked
    pub fn shutdown(mut self) -> Result<PlacementEngine<S>> {
        self.stop().ok_or_else(|| AlgorithmError::WorkerPool {
            reason: "placement thread already stopped".to_string(),
        })?
    }

    fn stop(&mut self) -> Option<Result<PlacementEngine<S>>> {
        let worker = self.worker.take()?;
        // A closed channel means the loop has already exited
        let _ = self.handle.sender.send(Request::Shutdown);
        Some(worker.join().map_err(|_panic| AlgorithmError::WorkerPool {
            reason: "placement thread panicked".to_string(),
        }))
    }
}

impl<S: Scorer + Send + 'static> Drop for PlacementService<S> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

fn run_loop<S: Scorer>(
    mut engine: PlacementEngine<S>,
    receiver: &Receiver<Request>,
) -> PlacementEngine<S> {
    let cancel = engine.cancel_token();
    let mut serviced = 0usize;

    while let Ok(request) = receiver.recv() {
        match request {
            Request::Place { color, reply } => {
                let result = if cancel.is_cancelled() {
                    Err(AlgorithmError::Cancelled)
                } else {
                    engine.place(color)
                };
                serviced += 1;
                // The caller may have given up waiting
                let _ = reply.send(result);
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(engine.canvas().clone());
            }
            Request::Shutdown => break,
        }
    }

    debug!("Placement loop serviced {serviced} request(s)");
    info!(
        "Placement loop stopped with {}/{} cells occupied",
        engine.placed(),
        engine.capacity()
    );
    engine
}
