// src/api/task.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::FetchError;

pub type Notify = Box<dyn Fn() + Send + 'static>;

/// A single fetch running on a background thread. Once cancelled or
/// dropped, a late result is thrown away by the worker.
pub struct FetchTask<T> {
    label: String,
    receiver: Receiver<Result<T, FetchError>>,
    cancelled: Arc<AtomicBool>,
    finished: bool,
}

impl<T: Send + 'static> FetchTask<T> {
    pub fn spawn<F>(label: impl Into<String>, job: F, notify: Option<Notify>) -> Self
    where
        F: FnOnce() -> Result<T, FetchError> + Send + 'static,
    {
        let label = label.into();
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));

        let worker_cancelled = Arc::clone(&cancelled);
        let worker_label = label.clone();
        let spawned = thread::Builder::new()
            .name(format!("fetch-{}", label))
            .spawn(move || {
                let result = job();
                if worker_cancelled.load(Ordering::Acquire) {
                    tracing::debug!(task = %worker_label, "discarding result of cancelled fetch");
                    return;
                }
                if sender.send(result).is_ok() {
                    if let Some(notify) = notify {
                        notify();
                    }
                }
            });

        // A failed spawn drops the sender, so poll() reports Interrupted.
        if let Err(e) = spawned {
            tracing::error!(task = %label, error = %e, "failed to spawn fetch worker");
        }

        Self {
            label,
            receiver,
            cancelled,
            finished: false,
        }
    }
}

impl<T> FetchTask<T> {
    pub fn poll(&mut self) -> Option<Result<T, FetchError>> {
        if self.finished || self.is_cancelled() {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(FetchError::Interrupted))
            }
        }
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) && !self.finished {
            tracing::debug!(task = %self.label, "fetch cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<T> Drop for FetchTask<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
