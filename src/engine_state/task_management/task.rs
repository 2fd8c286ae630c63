//! # Task System Core Trait
//!
//! A `Task` is a self-contained unit of work that runs on a worker thread and
//! hands its output back to the thread that owns the `TaskManager`.
//!
//! ## Task Lifecycle
//! 1. A `Task` is created and scheduled via `TaskManager::publish_task()`
//! 2. The task's `process()` method is called on a worker thread
//! 3. The output travels back over the worker's result channel
//! 4. The owner collects outputs with `TaskManager::drain_completed()` and
//!    applies them to its own state
//!
//! ## Thread Safety
//! - `Task` must be `Send` to be transferred to a worker
//! - `Task::Output` must be `Send` to be transferred back
//! - Tasks own (or share through `Arc`) everything they read; nothing a task
//!   touches is mutated by the owner while it runs

/// A unit of work that can be executed on a worker thread.
///
/// # Implementation Guidelines
/// - Should be coarse-grained to amortize scheduling overhead
/// - Should not hold references to data the owner may modify
/// - Reports failures through its `Output` rather than panicking
pub trait Task: Send + 'static {
    /// Value produced by the task and returned to the owning thread.
    type Output: Send + 'static;

    /// Processes the task on a worker thread.
    fn process(&self) -> Self::Output;
}
