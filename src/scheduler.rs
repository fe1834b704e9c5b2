use crossbeam_channel::{unbounded, Receiver, Sender};

pub type Task = Box<dyn FnOnce() + Send>;

/// Queue for work that must run on the authoritative game-state thread.
///
/// Producers on arbitrary dispatch threads hold a `TaskHandle`; the thread
/// that owns the queue calls `drain` once per tick and runs every pending
/// task strictly in submission order. There is no blocking wait, no
/// cancellation, and no timeout; tasks still queued when the queue is
/// dropped are dropped with it.
pub struct TaskQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

#[derive(Clone)]
pub struct TaskHandle {
    sender: Sender<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn handle(&self) -> TaskHandle {
        TaskHandle {
            sender: self.sender.clone(),
        }
    }

    /// Runs every queued task on the calling thread. Returns the count run.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        ran
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskHandle {
    /// Queues `task` for the next drain cycle. Returns false if the queue
    /// has already shut down.
    pub fn submit(&self, task: Task) -> bool {
        self.sender.send(task).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_drain_runs_in_submission_order() {
        let queue = TaskQueue::new();
        let handle = queue.handle();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = Arc::clone(&seen);
            assert!(handle.submit(Box::new(move || seen.lock().push(i))));
        }

        assert_eq!(queue.drain(), 5);
        assert_eq!(*seen.lock(), vec![0, 1, 2, 3, 4]);
        assert_eq!(queue.drain(), 0);
    }

    #[test]
    fn test_submit_from_other_thread() {
        let queue = TaskQueue::new();
        let handle = queue.handle();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let seen = Arc::clone(&seen);
            std::thread::spawn(move || {
                handle.submit(Box::new(move || seen.lock().push("task")));
            })
        };
        worker.join().unwrap();

        assert_eq!(queue.drain(), 1);
        assert_eq!(*seen.lock(), vec!["task"]);
    }
}
