use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;

use aerotrack_model::{ScanResponse, SearchCriteria};
use search_client::ClientError;

use crate::client::SearchProvider;

/// Outcome slot of one submission.
#[derive(Debug)]
pub enum TaskState {
    Pending,
    Succeeded(ScanResponse),
    Failed(ClientError),
}

/// A one-shot background search call. The worker thread holds the provider
/// lock for the duration of the call and hands the result back over a
/// channel; the UI thread polls once per frame. No cancellation, no
/// timeout: the task lives until the provider call returns.
pub struct SearchTask {
    receiver: Receiver<Result<ScanResponse, ClientError>>,
}

impl SearchTask {
    pub fn spawn<P: SearchProvider>(provider: Arc<Mutex<P>>, criteria: SearchCriteria) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let result = match provider.lock() {
                Ok(mut provider) => provider.search(&criteria),
                Err(_) => Err(ClientError::Io("search client lock poisoned".to_string())),
            };
            // The app may have shut down while the call ran.
            let _ = sender.send(result);
        });

        Self { receiver }
    }

    /// Non-blocking check. Returns `Pending` while the worker runs; once a
    /// terminal state comes out the caller is expected to drop the task.
    pub fn poll(&self) -> TaskState {
        match self.receiver.try_recv() {
            Ok(Ok(response)) => TaskState::Succeeded(response),
            Ok(Err(err)) => TaskState::Failed(err),
            Err(TryRecvError::Empty) => TaskState::Pending,
            Err(TryRecvError::Disconnected) => {
                TaskState::Failed(ClientError::Io("search worker died".to_string()))
            }
        }
    }
}
