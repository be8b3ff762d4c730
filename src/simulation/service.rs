//! Single-owner dispatch service
//!
//! One worker thread owns the `Dispatcher`. Callers on any thread send
//! commands through a `DispatchHandle` and block on the reply, so selection
//! and boarding for one hall call never interleave with another caller's.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, info};
use std::thread::{self, JoinHandle};

use super::dispatcher::{Dispatcher, HallCallOutcome};
use super::elevator::Elevator;
use super::error::DispatchError;
use super::passenger::Passenger;
use super::types::{ElevatorId, Floor};

enum Command {
    RequestElevator {
        floor: Floor,
        passengers: Vec<Passenger>,
        reply: Sender<Result<ElevatorId, DispatchError>>,
    },
    DispatchHallCall {
        floor: Floor,
        passengers: Vec<Passenger>,
        reply: Sender<Result<HallCallOutcome, DispatchError>>,
    },
    Snapshot {
        reply: Sender<Vec<Elevator>>,
    },
    Shutdown,
}

/// Cloneable sender side of a running dispatch service
#[derive(Clone)]
pub struct DispatchHandle {
    commands: Sender<Command>,
}

impl DispatchHandle {
    fn call<T>(&self, make: impl FnOnce(Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = bounded(1);
        self.commands
            .send(make(reply_tx))
            .map_err(|_| anyhow!("dispatch service has stopped"))?;
        reply_rx
            .recv()
            .context("dispatch service dropped the request")
    }

    /// Select an elevator without moving or boarding anything
    pub fn request_elevator(&self, floor: Floor, passengers: &[Passenger]) -> Result<ElevatorId> {
        let passengers = passengers.to_vec();
        Ok(self.call(|reply| Command::RequestElevator {
            floor,
            passengers,
            reply,
        })??)
    }

    /// Select, board and deliver as one uninterrupted step
    pub fn dispatch_hall_call(
        &self,
        floor: Floor,
        passengers: &[Passenger],
    ) -> Result<HallCallOutcome> {
        let passengers = passengers.to_vec();
        Ok(self.call(|reply| Command::DispatchHallCall {
            floor,
            passengers,
            reply,
        })??)
    }

    /// Copy of every elevator's current state
    pub fn snapshot(&self) -> Result<Vec<Elevator>> {
        self.call(|reply| Command::Snapshot { reply })
    }
}

/// A running dispatch service and its worker thread
pub struct DispatchService {
    handle: DispatchHandle,
    worker: JoinHandle<Dispatcher>,
}

impl DispatchService {
    /// Move `dispatcher` onto a dedicated worker thread
    pub fn spawn(dispatcher: Dispatcher) -> Result<Self> {
        let (commands_tx, commands_rx) = unbounded();
        let worker = thread::Builder::new()
            .name("dispatch".to_string())
            .spawn(move || run(dispatcher, commands_rx))
            .context("failed to spawn dispatch service thread")?;

        info!("Dispatch service started");

        Ok(Self {
            handle: DispatchHandle {
                commands: commands_tx,
            },
            worker,
        })
    }

    pub fn handle(&self) -> DispatchHandle {
        self.handle.clone()
    }

    /// Stop the worker and take the dispatcher back
    ///
    /// Commands queued before the shutdown are still served. Handles used
    /// afterwards get an error.
    pub fn shutdown(self) -> Result<Dispatcher> {
        self.handle
            .commands
            .send(Command::Shutdown)
            .map_err(|_| anyhow!("dispatch service already stopped"))?;
        self.worker
            .join()
            .map_err(|_| anyhow!("dispatch service thread panicked"))
    }
}

fn run(mut dispatcher: Dispatcher, commands: Receiver<Command>) -> Dispatcher {
    let mut served = 0u64;

    for command in commands.iter() {
        match command {
            Command::RequestElevator {
                floor,
                passengers,
                reply,
            } => {
                let _ = reply.send(dispatcher.request_elevator(floor, &passengers));
            }
            Command::DispatchHallCall {
                floor,
                passengers,
                reply,
            } => {
                served += 1;
                let _ = reply.send(dispatcher.dispatch_hall_call(floor, &passengers));
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(dispatcher.elevators().to_vec());
            }
            Command::Shutdown => {
                debug!("Dispatch service received shutdown");
                break;
            }
        }
    }

    info!("Dispatch service stopped after {} hall call(s)", served);
    dispatcher
}
