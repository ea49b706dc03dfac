//! Fork-join worker pool for repository tasks.
//!
//! All tasks are enqueued up front on a channel that is then closed; a
//! fixed set of worker threads drains it until empty and the scope join is
//! the completion barrier. Tasks are self-contained, so workers share
//! nothing mutable — isolation by construction, not by locking.

use crate::task::{RepoTask, ScanContext};

/// Execute every task with bounded parallelism and return all of them once
/// every one has finished. Completion order is unspecified; a failing task
/// never affects its siblings.
pub fn run_all(tasks: Vec<RepoTask>, workers: usize, ctx: &ScanContext<'_>) -> Vec<RepoTask> {
    let width = workers.max(1);
    let (task_tx, task_rx) = crossbeam_channel::unbounded::<RepoTask>();
    let (done_tx, done_rx) = crossbeam_channel::unbounded::<RepoTask>();

    for task in tasks {
        // Send on an unbounded channel with a live receiver cannot fail.
        let _ = task_tx.send(task);
    }
    // Closing the task channel is the workers' shutdown signal.
    drop(task_tx);

    std::thread::scope(|scope| {
        for _ in 0..width {
            let task_rx = task_rx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                for mut task in task_rx {
                    task.run(ctx);
                    let _ = done_tx.send(task);
                }
            });
        }
    });
    drop(done_tx);

    return done_rx.into_iter().collect();
}
