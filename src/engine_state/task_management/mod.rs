//! # Task Management System
//!
//! A small worker pool for executing CPU-bound work off the owning thread.
//!
//! ## Architecture Overview
//! - `TaskManager`: owns the workers, distributes tasks and collects outputs
//! - `Task`: a unit of work with a typed output
//! - `TaskChannel`: the pair of channels connecting the manager to one worker
//!
//! Each worker has a dedicated task channel and result channel. Tasks are
//! handed out round-robin to workers with spare capacity; the rest wait in a
//! FIFO queue until a worker frees up.
//!
//! ## Task Lifecycle
//! 1. Tasks are published via `TaskManager::publish_task()`
//! 2. The manager sends each task to an available worker, or queues it
//! 3. Workers call `Task::process` and send the output back
//! 4. The owner calls `drain_completed()` (non-blocking) or
//!    `wait_for_all()` (blocking) to collect outputs
//! 5. Collecting outputs frees worker slots, so queued tasks are dispatched
//!
//! Workers exit when the manager is dropped: their task channel disconnects
//! and the receive loop ends.
//!
//! ## Example Usage
//! ```ignore
//! let mut task_manager = TaskManager::new(4);
//! task_manager.publish_task(MyTask::new(/* ... */));
//!
//! // Once per frame:
//! for output in task_manager.drain_completed() {
//!     apply(output);
//! }
//! ```

pub mod task;

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub use task::Task;

/// A communication channel between the owning thread and one worker thread.
///
/// # Fields
/// - `task_sender`: Sends tasks from the owner to the worker
/// - `result_receiver`: Receives task outputs from the worker
/// - `num_tasks_in_flight`: Tasks sent but whose output has not been collected
/// - `_worker`: Handle to the worker thread
#[derive(Debug)]
pub struct TaskChannel<T: Task> {
    task_sender: Sender<T>,
    result_receiver: Receiver<T::Output>,
    num_tasks_in_flight: usize,
    _worker: JoinHandle<()>,
}

/// Manages a pool of worker threads and coordinates task execution.
///
/// # Fields
/// - `channels`: One channel pair per worker
/// - `queued_tasks`: Tasks waiting for an available worker
/// - `current_channel`: Index for round-robin scheduling
pub struct TaskManager<T: Task> {
    channels: Vec<TaskChannel<T>>,
    queued_tasks: VecDeque<T>,
    current_channel: usize,
}

/// Maximum number of tasks that can be in flight per worker channel.
///
/// Kept at 1 so that a busy worker never holds a backlog that an idle worker
/// could have taken.
pub const MAX_TASKS_IN_FLIGHT: usize = 1;

impl<T: Task> TaskManager<T> {
    /// Creates a new `TaskManager` with the specified number of worker threads.
    ///
    /// # Arguments
    /// * `num_workers` - Number of worker threads to create. Zero is allowed but
    ///   nothing published will ever run.
    pub fn new(num_workers: usize) -> Self {
        let mut channels = Vec::with_capacity(num_workers);

        log::info!(
            "Starting {} task workers (available parallelism: {:?})",
            num_workers,
            thread::available_parallelism()
        );

        for _ in 0..num_workers {
            let (task_tx, task_rx) = channel::<T>();
            let (result_tx, result_rx) = channel::<T::Output>();

            let worker = thread::spawn(move || {
                while let Ok(task) = task_rx.recv() {
                    let result = task.process();
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
            });

            channels.push(TaskChannel {
                task_sender: task_tx,
                result_receiver: result_rx,
                num_tasks_in_flight: 0,
                _worker: worker,
            });
        }

        TaskManager {
            channels,
            queued_tasks: VecDeque::new(),
            current_channel: 0,
        }
    }

    /// Number of worker threads.
    pub fn worker_count(&self) -> usize {
        self.channels.len()
    }

    /// Attempts to send a task to a specific worker channel.
    ///
    /// # Returns
    /// - `Ok(())` if the task was handed to the worker
    /// - `Err(task)` if the worker has gone away, giving the task back
    fn try_send_task(&mut self, task: T, channel_idx: usize) -> Result<(), T> {
        match self.channels[channel_idx].task_sender.send(task) {
            Ok(()) => {
                self.channels[channel_idx].num_tasks_in_flight += 1;
                Ok(())
            }
            Err(error) => Err(error.0),
        }
    }

    /// Finds a worker channel that can accept a new task.
    ///
    /// Round-robin starting from `current_channel`; channels at
    /// `MAX_TASKS_IN_FLIGHT` are skipped.
    fn find_available_channel(&self) -> Option<usize> {
        let count = self.channels.len();
        (0..count)
            .map(|step| (self.current_channel + step) % count)
            .find(|&idx| self.channels[idx].num_tasks_in_flight < MAX_TASKS_IN_FLIGHT)
    }

    /// Publishes a new task for execution.
    ///
    /// # Returns
    /// - `true` if the task was immediately sent to a worker
    /// - `false` if the task was queued because all workers are busy
    pub fn publish_task(&mut self, task: T) -> bool {
        let Some(channel_idx) = self.find_available_channel() else {
            self.queued_tasks.push_back(task);
            return false;
        };

        match self.try_send_task(task, channel_idx) {
            Ok(()) => {
                self.current_channel = (channel_idx + 1) % self.channels.len();
                true
            }
            Err(task) => {
                log::warn!("Task worker {} disconnected, queueing task", channel_idx);
                self.queued_tasks.push_back(task);
                false
            }
        }
    }

    /// Sends queued tasks to workers until the queue is empty or every worker
    /// is busy. Tasks leave the queue in FIFO order.
    pub fn process_queued_tasks(&mut self) {
        while let Some(channel_idx) = self.find_available_channel() {
            let Some(task) = self.queued_tasks.pop_front() else {
                return;
            };
            match self.try_send_task(task, channel_idx) {
                Ok(()) => self.current_channel = (channel_idx + 1) % self.channels.len(),
                Err(task) => {
                    // Disconnected worker; keep the task and stop.
                    self.queued_tasks.push_front(task);
                    return;
                }
            }
        }
    }

    /// Collects every output that is ready without blocking, then dispatches
    /// queued tasks into the freed slots.
    pub fn drain_completed(&mut self) -> Vec<T::Output> {
        let mut outputs = Vec::new();
        for channel in &mut self.channels {
            while let Ok(output) = channel.result_receiver.try_recv() {
                channel.num_tasks_in_flight -= 1;
                outputs.push(output);
            }
        }
        self.process_queued_tasks();
        outputs
    }

    /// Blocks until every published task has finished, returning all outputs.
    ///
    /// Tasks whose worker died are dropped with a warning instead of blocking
    /// forever.
    pub fn wait_for_all(&mut self) -> Vec<T::Output> {
        let mut outputs = Vec::new();
        loop {
            self.process_queued_tasks();
            if self.tasks_in_flight() == 0 {
                if !self.queued_tasks.is_empty() {
                    log::warn!(
                        "Dropping {} queued tasks: no worker can accept them",
                        self.queued_tasks.len()
                    );
                    self.queued_tasks.clear();
                }
                return outputs;
            }

            for channel in &mut self.channels {
                if channel.num_tasks_in_flight == 0 {
                    continue;
                }
                match channel.result_receiver.recv() {
                    Ok(output) => {
                        channel.num_tasks_in_flight -= 1;
                        outputs.push(output);
                    }
                    Err(_) => {
                        log::warn!(
                            "Task worker exited with {} tasks in flight",
                            channel.num_tasks_in_flight
                        );
                        channel.num_tasks_in_flight = 0;
                    }
                }
            }
        }
    }

    /// Tasks sent to workers whose output has not been collected.
    pub fn tasks_in_flight(&self) -> usize {
        self.channels.iter().map(|c| c.num_tasks_in_flight).sum()
    }

    /// Tasks in flight plus tasks still waiting in the queue.
    pub fn tasks_outstanding(&self) -> usize {
        self.tasks_in_flight() + self.queued_tasks.len()
    }
}
