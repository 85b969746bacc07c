use std::collections::HashMap;
use tokio::task::JoinHandle;
use tracing::debug;

/// Background tasks keyed by purpose. Spawning under a busy key aborts the
/// previous task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            if !handle.is_finished() {
                debug!(key, "replacing running task");
            }
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                debug!(key, "aborting task");
            }
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}
