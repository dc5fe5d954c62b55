//! Periodic task scheduling with cooperative shutdown.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

/// Handle to control and join one background task.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl TaskHandle {
    /// Request graceful shutdown and wait for the task to stop.
    ///
    /// After the signal no further ticks start; an in-flight tick completes
    /// before the thread exits.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Owns the cancellation handles of every spawned task.
///
/// Tasks are independent: each runs on its own named thread with its own
/// interval, so a slow tick in one never delays another. Dropping the
/// scheduler without calling [`Scheduler::shutdown`] detaches the tasks
/// for the remaining process lifetime.
#[derive(Debug, Default)]
pub struct Scheduler {
    handles: Vec<TaskHandle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a repeating task that runs `tick` every `interval` until
    /// shutdown. The first tick fires one full interval after spawn.
    ///
    /// A panicking tick is contained to that iteration: it is logged and
    /// the task keeps ticking.
    pub fn spawn<F>(&mut self, name: &'static str, interval: Duration, mut tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let join = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || task_loop(name, interval, shutdown_rx, &mut tick))
            .expect("failed to spawn task thread");

        self.handles.push(TaskHandle {
            name,
            shutdown: shutdown_tx,
            join: Some(join),
        });
    }

    /// Stop every task and join its thread.
    pub fn shutdown(self) {
        for handle in self.handles {
            handle.shutdown();
        }
    }
}

fn task_loop<F>(name: &'static str, interval: Duration, shutdown_rx: mpsc::Receiver<()>, tick: &mut F)
where
    F: FnMut(),
{
    info!(task = name, interval_ms = interval.as_millis() as u64, "task started");

    loop {
        match shutdown_rx.recv_timeout(interval) {
            // Stop signal, or the scheduler handle is gone entirely.
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if panic::catch_unwind(AssertUnwindSafe(|| tick())).is_err() {
                    warn!(task = name, "task tick panicked; continuing");
                }
            }
        }
    }

    info!(task = name, "task stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn ticks_repeat_until_shutdown() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new();

        {
            let count = count.clone();
            scheduler.spawn("test-ticker", Duration::from_millis(5), move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        thread::sleep(Duration::from_millis(100));
        scheduler.shutdown();

        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 2, "expected repeated ticks, saw {after_stop}");

        // No further ticks start after shutdown returned.
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn panicking_tick_does_not_kill_the_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new();

        {
            let count = count.clone();
            scheduler.spawn("test-panicker", Duration::from_millis(5), move || {
                count.fetch_add(1, Ordering::SeqCst);
                panic!("tick goes boom");
            });
        }

        thread::sleep(Duration::from_millis(100));
        scheduler.shutdown();

        assert!(
            count.load(Ordering::SeqCst) >= 2,
            "task should keep ticking after a panic"
        );
    }

    #[test]
    fn tasks_are_independent() {
        let fast = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new();

        // One task blocks for a long time; the other must keep ticking.
        scheduler.spawn("test-slow", Duration::from_millis(1), move || {
            thread::sleep(Duration::from_millis(500));
        });
        {
            let fast = fast.clone();
            scheduler.spawn("test-fast", Duration::from_millis(5), move || {
                fast.fetch_add(1, Ordering::SeqCst);
            });
        }

        thread::sleep(Duration::from_millis(100));
        let ticks = fast.load(Ordering::SeqCst);
        assert!(ticks >= 2, "fast task starved by slow task: {ticks}");

        // Shutdown still joins the in-flight slow tick.
        scheduler.shutdown();
    }
}
