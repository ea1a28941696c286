mod support;

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use serde_json::json;
use taskboard::patch::Patch;
use taskboard::task::{NewTask, TaskPatch, TaskQuery};

use support::TestBoard;

#[test]
fn concurrent_creates_lose_no_updates() {
    let board = TestBoard::init();
    let threads = 8;
    let per_thread = 10;
    let barrier = Arc::new(Barrier::new(threads));

    let mut handles = Vec::with_capacity(threads);
    for worker in 0..threads {
        let barrier = Arc::clone(&barrier);
        let store = board.tasks();
        handles.push(thread::spawn(move || {
            barrier.wait();
            (0..per_thread)
                .map(|n| {
                    store
                        .create(NewTask::titled(format!("worker {worker} task {n}")))
                        .expect("create")
                        .id
                })
                .collect::<Vec<u64>>()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("join") {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }

    let listed = board.tasks().list(&TaskQuery::default()).expect("list");
    assert_eq!(listed.len(), threads * per_thread);
    assert_eq!(ids.len(), threads * per_thread);
}

#[test]
fn cascade_delete_races_task_updates_cleanly() {
    let board = TestBoard::init();
    let doomed = board.add_category("Doomed");
    let kept = board.add_category("Kept");

    let mut task_ids = Vec::new();
    for n in 0..20 {
        let task = board
            .tasks()
            .create(NewTask {
                category_ids: Patch::Value(json!([doomed.id, kept.id])),
                ..NewTask::titled(format!("task {n}"))
            })
            .expect("create");
        task_ids.push(task.id);
    }

    let barrier = Arc::new(Barrier::new(2));

    let updater = {
        let barrier = Arc::clone(&barrier);
        let store = board.tasks();
        let task_ids = task_ids.clone();
        thread::spawn(move || {
            barrier.wait();
            for id in task_ids {
                let patch: TaskPatch =
                    serde_json::from_value(json!({"status": "completed"})).expect("patch");
                store.update(id, patch).expect("update");
            }
        })
    };

    let deleter = {
        let barrier = Arc::clone(&barrier);
        let categories = board.categories();
        thread::spawn(move || {
            barrier.wait();
            categories.delete(doomed.id).expect("delete");
        })
    };

    updater.join().expect("updater");
    deleter.join().expect("deleter");

    let listed = board.tasks().list(&TaskQuery::default()).expect("list");
    assert_eq!(listed.len(), task_ids.len());
    for task in listed {
        assert_eq!(task.category_ids, vec![kept.id]);
        assert_eq!(task.status.as_str(), "completed");
    }
}
