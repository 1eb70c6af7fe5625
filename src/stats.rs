//! Task Stats
//!
//! Counts derived from the task list; never stored on their own.

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            title: String::new(),
            description: None,
            date: None,
            time: None,
            completed,
            owner_id: 1,
        }
    }

    #[test]
    fn test_counts() {
        let tasks = vec![make_task(1, true), make_task(2, false), make_task(3, false)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats, TaskStats { total: 3, completed: 1, pending: 2 });
    }

    #[test]
    fn test_total_is_completed_plus_pending() {
        let mut tasks = Vec::new();
        for id in 0..20 {
            tasks.push(make_task(id, id % 3 == 0));
            let stats = TaskStats::from_tasks(&tasks);
            assert_eq!(stats.total, stats.completed + stats.pending);
        }
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }
}
