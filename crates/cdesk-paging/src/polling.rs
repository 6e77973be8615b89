//! Supervised repeating and delayed tasks.
//!
//! Every timer the dashboard starts goes through a [`PollingSupervisor`],
//! which keeps its handle under a [`TaskId`]. Scheduling an id that is
//! already running aborts the old task first, so repeated user actions never
//! stack duplicate timers. Teardown cancels everything before state is
//! reset, so a stale timer cannot repaint a destroyed section.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::error::{PagingError, Result};
use crate::section::SectionKind;

/// Name of a supervised task, optionally owned by a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId {
    name: Cow<'static, str>,
    section: Option<SectionKind>,
}

impl TaskId {
    /// A task not tied to any section.
    pub fn global(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            section: None,
        }
    }

    /// A task owned by `section`, cancelled with it.
    pub fn section(section: SectionKind, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            section: Some(section),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<SectionKind> {
        self.section
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section {
            Some(section) => write!(f, "{section}/{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// When a task runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Repeatedly, first run one period from now.
    Every(Duration),
    /// Once, after the delay.
    After(Duration),
}

/// Owns every timer-driven task and cancels them on demand.
#[derive(Debug, Default)]
pub struct PollingSupervisor {
    tasks: HashMap<TaskId, JoinHandle<()>>,
}

impl PollingSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `task` under `id`, replacing any task already registered there.
    ///
    /// Returns `true` when a previous task was cancelled. Must be called from
    /// within a tokio runtime.
    pub fn schedule<F, Fut>(&mut self, id: TaskId, schedule: Schedule, mut task: F) -> Result<bool>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if matches!(schedule, Schedule::Every(period) if period.is_zero()) {
            return Err(PagingError::InvalidInterval {
                task: id.to_string(),
            });
        }
        let runtime = Handle::try_current().map_err(|_| PagingError::SchedulerUnavailable {
            task: id.to_string(),
        })?;

        let replaced = self.cancel(&id);
        self.prune();

        let handle = match schedule {
            Schedule::Every(period) => runtime.spawn(async move {
                let mut ticker = time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    task().await;
                }
            }),
            Schedule::After(delay) => runtime.spawn(async move {
                time::sleep(delay).await;
                task().await;
            }),
        };
        debug!(task = %id, ?schedule, replaced, "task scheduled");
        self.tasks.insert(id, handle);
        Ok(replaced)
    }

    /// Abort one task. Returns whether it was registered.
    pub fn cancel(&mut self, id: &TaskId) -> bool {
        match self.tasks.remove(id) {
            Some(handle) => {
                handle.abort();
                debug!(task = %id, "task cancelled");
                true
            }
            None => false,
        }
    }

    /// Abort every task owned by `section`. Returns how many were registered.
    pub fn cancel_section(&mut self, section: SectionKind) -> usize {
        let owned: Vec<TaskId> = self
            .tasks
            .keys()
            .filter(|id| id.owner() == Some(section))
            .cloned()
            .collect();
        for id in &owned {
            self.cancel(id);
        }
        owned.len()
    }

    /// Abort everything. Returns how many tasks were registered.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
        if count > 0 {
            debug!(count, "all tasks cancelled");
        }
        count
    }

    /// Whether `id` is registered and still running.
    pub fn is_scheduled(&self, id: &TaskId) -> bool {
        self.tasks
            .get(id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of tasks still running.
    pub fn active_count(&mut self) -> usize {
        self.prune();
        self.tasks.len()
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl Drop for PollingSupervisor {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter_task(
        counter: &Arc<AtomicUsize>,
    ) -> impl FnMut() -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::section(SectionKind::Users, "refresh").to_string(), "users/refresh");
        assert_eq!(TaskId::global("notices").to_string(), "notices");
    }

    #[test]
    fn test_schedule_outside_runtime_fails() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let result = supervisor.schedule(
            TaskId::global("tick"),
            Schedule::After(Duration::from_secs(1)),
            counter_task(&counter),
        );
        assert!(matches!(
            result,
            Err(PagingError::SchedulerUnavailable { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_rejected() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let result = supervisor.schedule(
            TaskId::global("tick"),
            Schedule::Every(Duration::ZERO),
            counter_task(&counter),
        );
        assert!(matches!(result, Err(PagingError::InvalidInterval { .. })));
        assert_eq!(supervisor.active_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_instead_of_leaking() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let id = TaskId::section(SectionKind::Invoices, "refresh");

        let first = supervisor
            .schedule(id.clone(), Schedule::Every(Duration::from_secs(1)), counter_task(&counter))
            .unwrap();
        let second = supervisor
            .schedule(id.clone(), Schedule::Every(Duration::from_secs(1)), counter_task(&counter))
            .unwrap();
        assert!(!first);
        assert!(second);

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(supervisor.active_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_task_runs_once() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let id = TaskId::global("dismiss");
        supervisor
            .schedule(id.clone(), Schedule::After(Duration::from_secs(5)), counter_task(&counter))
            .unwrap();
        assert!(supervisor.is_scheduled(&id));

        time::sleep(Duration::from_secs(6)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!supervisor.is_scheduled(&id));
        assert_eq!(supervisor.active_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_section_leaves_others_running() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let every = Schedule::Every(Duration::from_secs(1));
        supervisor
            .schedule(TaskId::section(SectionKind::Users, "refresh"), every, counter_task(&counter))
            .unwrap();
        supervisor
            .schedule(TaskId::section(SectionKind::Users, "load"), every, counter_task(&counter))
            .unwrap();
        supervisor
            .schedule(TaskId::section(SectionKind::Sites, "refresh"), every, counter_task(&counter))
            .unwrap();

        assert_eq!(supervisor.cancel_section(SectionKind::Users), 2);
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(supervisor.active_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_everything() {
        let mut supervisor = PollingSupervisor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        for section in [SectionKind::Users, SectionKind::Faqs, SectionKind::Suppliers] {
            supervisor
                .schedule(
                    TaskId::section(section, "refresh"),
                    Schedule::Every(Duration::from_secs(1)),
                    counter_task(&counter),
                )
                .unwrap();
        }
        assert_eq!(supervisor.cancel_all(), 3);
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(supervisor.active_count(), 0);
    }
}
