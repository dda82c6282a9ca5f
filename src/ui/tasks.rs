//! Background API jobs.
//!
//! The UI thread never blocks on the network. Each job runs on its own short
//! thread and reports back over a channel that the event loop drains between
//! frames. Every completion carries the view generation it was issued under so
//! the app can drop answers meant for a screen that no longer exists.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::api::{Catalog, LibraryApi};
use crate::error::ApiError;
use crate::models::{Collection, Draft, Record};

/// Work the UI can ask for.
#[derive(Debug, Clone)]
pub(crate) enum Job {
    LoadCatalog,
    FetchRecord { collection: Collection, id: String },
    Create(Draft),
    Update { id: String, draft: Draft },
    Delete { collection: Collection, id: String },
}

impl Job {
    fn name(&self) -> &'static str {
        match self {
            Job::LoadCatalog => "load_catalog",
            Job::FetchRecord { .. } => "fetch_record",
            Job::Create(_) => "create",
            Job::Update { .. } => "update",
            Job::Delete { .. } => "delete",
        }
    }

    fn run(self, api: &LibraryApi) -> Outcome {
        match self {
            Job::LoadCatalog => Outcome::Catalog(api.fetch_catalog()),
            Job::FetchRecord { collection, id } => Outcome::Fetched(api.get(collection, &id)),
            Job::Create(draft) => Outcome::Saved(api.create(&draft)),
            Job::Update { id, draft } => Outcome::Saved(api.update(&id, &draft)),
            Job::Delete { collection, id } => {
                let result = api.delete(collection, &id);
                Outcome::Deleted {
                    collection,
                    id,
                    result,
                }
            }
        }
    }
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Catalog(Result<Catalog, ApiError>),
    Fetched(Result<Record, ApiError>),
    Saved(Result<Record, ApiError>),
    Deleted {
        collection: Collection,
        id: String,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug)]
pub(crate) struct Completion {
    /// View generation the job was submitted under.
    pub(crate) view: u64,
    pub(crate) outcome: Outcome,
}

/// Spawns jobs and collects their completions.
pub(crate) struct Worker {
    api: Arc<LibraryApi>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    in_flight: usize,
}

impl Worker {
    pub(crate) fn new(api: Arc<LibraryApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub(crate) fn submit(&mut self, view: u64, job: Job) {
        debug!(view, job = job.name(), "dispatching job");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let outcome = job.run(&api);
            if tx.send(Completion { view, outcome }).is_err() {
                warn!(view, "completion dropped, app has shut down");
            }
        });
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Next finished job, without blocking.
    pub(crate) fn try_next(&mut self) -> Option<Completion> {
        match self.rx.try_recv() {
            Ok(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(completion)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next job finishes. Returns `None` once nothing is in
    /// flight.
    #[cfg(test)]
    pub(crate) fn wait_next(&mut self) -> Option<Completion> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.rx.recv().ok()?;
        self.in_flight -= 1;
        Some(completion)
    }
}
