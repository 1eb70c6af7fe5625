//! Task Filters
//!
//! The three list views and the derivation of each from the full list.

use std::fmt;

use crate::models::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Completed];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Pending => "Pending",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::All => "all",
            FilterMode::Pending => "pending",
            FilterMode::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Tasks visible under `mode`, in list order
pub fn filter_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|t| mode.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            date: None,
            time: None,
            completed,
            owner_id: 1,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, false),
            make_task(2, true),
            make_task(3, false),
            make_task(4, true),
            make_task(5, false),
        ]
    }

    #[test]
    fn test_filter_modes() {
        let tasks = sample();

        let all = filter_tasks(&tasks, FilterMode::All);
        assert_eq!(all, tasks);

        let pending: Vec<u32> = filter_tasks(&tasks, FilterMode::Pending).iter().map(|t| t.id).collect();
        assert_eq!(pending, vec![1, 3, 5]);

        let completed: Vec<u32> = filter_tasks(&tasks, FilterMode::Completed).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![2, 4]);
    }

    #[test]
    fn test_pending_and_completed_partition_all() {
        let tasks = sample();
        for task in &tasks {
            let pending = FilterMode::Pending.matches(task);
            let completed = FilterMode::Completed.matches(task);
            assert!(pending != completed);
            assert!(FilterMode::All.matches(task));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tasks = sample();
        for mode in FilterMode::ALL {
            let once = filter_tasks(&tasks, mode);
            let twice = filter_tasks(&once, mode);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_empty_list() {
        for mode in FilterMode::ALL {
            assert!(filter_tasks(&[], mode).is_empty());
        }
    }
}
