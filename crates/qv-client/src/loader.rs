//! Cancellable background fetches for view-driven loading.
//!
//! The browser original fired fetches from each page and never cancelled
//! them on teardown. Here every page-level load runs through a
//! [`FetchHandle`] whose lifetime is the view's lifetime: dropping the
//! handle cancels the fetch, and a cancelled fetch never delivers a result.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, channel};
use std::thread;

use crate::error::ClientResult;

/// Cooperative cancellation flag shared with an in-flight fetch job.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested. Multi-request jobs should
    /// check this between requests.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to an in-flight background fetch. Dropping it cancels the fetch.
#[derive(Debug)]
pub struct FetchHandle<T> {
    token: CancelToken,
    rx: Receiver<ClientResult<T>>,
}

impl<T> FetchHandle<T> {
    /// Non-blocking poll for the result. Returns `None` while the fetch is
    /// still running (or was cancelled).
    pub fn poll(&self) -> Option<ClientResult<T>> {
        self.rx.try_recv().ok()
    }

    /// Explicitly cancel without dropping the handle.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl<T> Drop for FetchHandle<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Run `job` on a background thread. The job receives the cancel token so
/// multi-request loads can stop early; a result produced after cancellation
/// is discarded rather than delivered.
pub fn fetch<T, F>(job: F) -> FetchHandle<T>
where
    T: Send + 'static,
    F: FnOnce(&CancelToken) -> ClientResult<T> + Send + 'static,
{
    let token = CancelToken::default();
    let (tx, rx) = channel();
    let worker_token = token.clone();

    thread::spawn(move || {
        let result = job(&worker_token);
        if !worker_token.is_cancelled() {
            // Receiver may already be gone; nothing to do then.
            let _ = tx.send(result);
        }
    });

    FetchHandle { token, rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_until<T>(handle: &FetchHandle<T>) -> Option<ClientResult<T>> {
        for _ in 0..100 {
            if let Some(result) = handle.poll() {
                return Some(result);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn fetch_delivers_a_result() {
        let handle = fetch(|_| Ok(7u32));
        let result = poll_until(&handle).expect("fetch should finish");
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn cancelled_fetch_never_delivers() {
        let (started_tx, started_rx) = channel();
        let handle = fetch(move |token| {
            started_tx.send(()).unwrap();
            while !token.is_cancelled() {
                thread::sleep(Duration::from_millis(1));
            }
            Ok(7u32)
        });

        started_rx.recv().unwrap();
        handle.cancel();

        // Give the worker time to observe cancellation and finish.
        thread::sleep(Duration::from_millis(50));
        assert!(handle.poll().is_none());
    }

    #[test]
    fn job_sees_cancellation_request() {
        let handle = fetch(|token| {
            for _ in 0..1000 {
                if token.is_cancelled() {
                    return Ok(true);
                }
                thread::sleep(Duration::from_millis(1));
            }
            Ok(false)
        });
        handle.cancel();
        // Result is discarded either way; this just exercises the token path.
        thread::sleep(Duration::from_millis(20));
        assert!(handle.poll().is_none());
    }
}
