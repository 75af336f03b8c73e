//! Collection-level properties and worked scenarios, checked against the
//! library with in-memory adapters.

use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};

use taskmaster::adapters::memory::{
    FixedClock, MemoryFileSystem, MemoryStore, SequentialIdGenerator,
};
use taskmaster::context::ServiceContext;
use taskmaster::manager::TaskManager;
use taskmaster::store::{format_bytes, StorageStats, TaskStore};
use taskmaster::task::{Priority, StatusFilter, Task, TaskId};
use taskmaster::util::{format_duration, sort_tasks, SortCriteria};

fn context() -> (ServiceContext, FixedClock) {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
    let ctx = ServiceContext::from_parts(
        Box::new(clock.clone()),
        Box::new(SequentialIdGenerator::new("t")),
        Box::new(MemoryStore::new()),
        Box::new(MemoryFileSystem::new()),
    );
    (ctx, clock)
}

/// Builds a manager holding `n` tasks with mixed priorities, every third one
/// completed.
fn populated<'a>(ctx: &'a ServiceContext, clock: &FixedClock, n: usize) -> TaskManager<'a> {
    let mut manager = TaskManager::load(ctx);
    for i in 0..n {
        clock.advance(Duration::seconds(7));
        let priority = Priority::ALL[i % Priority::ALL.len()];
        let id = manager.create(&format!("task number {i}"), priority).unwrap().id;
        if i % 3 == 0 {
            manager.toggle_completion(&id);
        }
    }
    manager
}

#[test]
fn create_prepends_a_fresh_pending_task() {
    let (ctx, clock) = context();
    let mut manager = populated(&ctx, &clock, 5);

    for priority in Priority::ALL {
        let before: HashSet<TaskId> = manager.tasks().iter().map(|t| t.id.clone()).collect();
        let len = manager.tasks().len();

        let task = manager.create("  new thing ", priority).unwrap();
        assert_eq!(manager.tasks().len(), len + 1);
        let first = &manager.tasks()[0];
        assert_eq!(first, &task);
        assert_eq!(first.title, "new thing");
        assert_eq!(first.priority, priority);
        assert!(!first.completed);
        assert!(!before.contains(&first.id));
    }
}

#[test]
fn toggle_twice_restores_state_and_advances_updated_at() {
    let (ctx, clock) = context();
    let mut manager = populated(&ctx, &clock, 6);

    let ids: Vec<TaskId> = manager.tasks().iter().map(|t| t.id.clone()).collect();
    for id in ids {
        let original = manager.find(&id).unwrap().clone();

        clock.advance(Duration::seconds(1));
        let once = manager.toggle_completion(&id).unwrap().clone();
        clock.advance(Duration::seconds(1));
        let twice = manager.toggle_completion(&id).unwrap().clone();

        assert_eq!(twice.completed, original.completed);
        assert_eq!(twice.completed_at.is_some(), twice.completed);
        if !original.completed {
            assert!(twice.completed_at.is_none());
        }
        assert!(original.updated_at < once.updated_at);
        assert!(once.updated_at < twice.updated_at);
    }
}

#[test]
fn clear_completed_removes_exactly_the_completed() {
    for n in [0, 1, 4, 9] {
        let (ctx, clock) = context();
        let mut manager = populated(&ctx, &clock, n);
        let completed_before = manager.compute_stats().completed;

        assert_eq!(manager.clear_completed(), completed_before);
        assert_eq!(manager.compute_stats().completed, 0);
    }
}

#[test]
fn pending_and_completed_views_partition_the_collection() {
    let (ctx, clock) = context();
    let manager = populated(&ctx, &clock, 10);

    let pending: HashSet<&TaskId> =
        manager.filtered_view_with(StatusFilter::Pending, "").iter().map(|t| &t.id).collect();
    let completed: HashSet<&TaskId> =
        manager.filtered_view_with(StatusFilter::Completed, "").iter().map(|t| &t.id).collect();
    let all: HashSet<&TaskId> = manager.tasks().iter().map(|t| &t.id).collect();

    assert!(pending.is_disjoint(&completed));
    assert_eq!(pending.union(&completed).copied().collect::<HashSet<_>>(), all);
    assert_eq!(manager.filtered_view_with(StatusFilter::All, "").len(), all.len());
}

#[test]
fn filtered_view_is_repeatable() {
    let (ctx, clock) = context();
    let mut manager = populated(&ctx, &clock, 8);
    manager.set_filter(StatusFilter::Pending);
    manager.set_search("NUMBER 1");

    let first: Vec<Task> = manager.filtered_view().into_iter().cloned().collect();
    let second: Vec<Task> = manager.filtered_view().into_iter().cloned().collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|t| t.title.contains("number 1") && !t.completed));
}

#[test]
fn save_then_load_reproduces_sequence() {
    let (ctx, clock) = context();
    let manager = populated(&ctx, &clock, 7);
    let mut tasks = manager.tasks().to_vec();
    let at = tasks[0].created_at;
    tasks.push(Task::new(TaskId::Number(1_710_057_600_000), "numeric id", Priority::Low, at));

    let store = TaskStore::new(&ctx);
    assert!(store.save_tasks(&tasks));
    assert_eq!(store.load_tasks(), tasks);
}

#[test]
fn import_merge_counts() {
    for (n, k) in [(0, 0), (3, 0), (3, 3), (5, 2)] {
        let (ctx, clock) = context();
        let mut manager = populated(&ctx, &clock, 4);
        let original_len = manager.tasks().len();

        let mut payload: Vec<Task> = manager.tasks()[..k].to_vec();
        let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        for i in 0..(n - k) {
            let id = TaskId::Number(i64::try_from(i).unwrap());
            payload.push(Task::new(id, format!("imported {i}"), Priority::Medium, at));
        }

        let summary = manager.import(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(summary.imported, n - k);
        assert_eq!(summary.skipped, k);
        assert_eq!(manager.tasks().len(), original_len + (n - k));
    }
}

#[test]
fn scenario_newest_first_and_stats() {
    let (ctx, _) = context();
    let mut manager = TaskManager::load(&ctx);
    manager.create("Buy milk", Priority::Low).unwrap();
    manager.create("Ship release", Priority::High).unwrap();

    let shown: Vec<(&str, Priority)> =
        manager.tasks().iter().map(|t| (t.title.as_str(), t.priority)).collect();
    assert_eq!(shown, [("Ship release", Priority::High), ("Buy milk", Priority::Low)]);

    let stats = manager.compute_stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.high, 1);
    assert_eq!(stats.low, 1);
    assert_eq!(stats.medium, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn scenario_completion_status_dominates_priority_sort() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut done = Task::new(TaskId::from("done"), "done", Priority::High, at);
    done.set_completed(true, at);
    let pending = Task::new(TaskId::from("pending"), "pending", Priority::Low, at);

    let sorted = sort_tasks(&[done, pending], SortCriteria::Priority);
    assert_eq!(sorted[0].id, TaskId::from("pending"));
    assert_eq!(sorted[1].id, TaskId::from("done"));
}

#[test]
fn scenario_durations() {
    assert_eq!(format_duration(90_000), "1m 30s");
    assert_eq!(format_duration(0), "N/A");
}

#[test]
fn scenario_storage_sizes() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let tasks = vec![
        Task::new(TaskId::Number(1), "a", Priority::Low, at),
        Task::new(TaskId::Number(2), "b", Priority::High, at),
    ];
    assert_eq!(StorageStats::with_size(&tasks, 120).storage_size, "120 Bytes");
    assert_eq!(format_bytes(2048), "2 KB");
}
