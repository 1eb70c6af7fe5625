//! Task Store
//!
//! In-memory snapshot of the user's tasks as last confirmed by the server.
//! Only successful responses mutate it.

use crate::models::Task;
use crate::stats::TaskStats;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the whole list (after a full load)
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a server-created task
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Swap in the server's copy of a task; returns false if the id is unknown
    pub fn update(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    /// Remove a task by id; returns false if the id is unknown
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            date: None,
            time: None,
            completed: false,
            owner_id: 1,
        }
    }

    #[test]
    fn test_replace_all_then_push() {
        let mut store = TaskStore::new();
        store.push(make_task(9, "stale"));
        store.replace_all(vec![make_task(1, "a"), make_task(2, "b")]);
        assert_eq!(store.len(), 2);
        assert!(store.get(9).is_none());

        store.push(make_task(3, "c"));
        let ids: Vec<u32> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = TaskStore::new();
        store.replace_all(vec![make_task(1, "a"), make_task(2, "b"), make_task(3, "c")]);

        let mut done = make_task(2, "b");
        done.completed = true;
        assert!(store.update(done));
        assert_eq!(store.tasks()[1].id, 2);
        assert!(store.tasks()[1].completed);

        assert!(!store.update(make_task(42, "ghost")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut store = TaskStore::new();
        store.replace_all(vec![make_task(1, "a"), make_task(2, "b")]);
        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert_eq!(store.len(), 1);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.stats().total, 0);
    }
}
