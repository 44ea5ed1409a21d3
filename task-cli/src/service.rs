use crate::store::{StoreError, TaskStore};
use crate::task::{Status, Task};
use chrono::Utc;

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a task not found error.
    #[error("Task with ID {0} not found")]
    TaskNotFound(String),
    /// Represents a persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD operations over an in-memory task collection.
///
/// Every operation that changes the collection persists it in full via
/// the store before reporting success; not-found paths never write.
pub struct TaskService<'a> {
    store: &'a TaskStore,
}

impl<'a> TaskService<'a> {
    pub fn new(store: &'a TaskStore) -> Self {
        Self { store }
    }

    /// Appends a new task in the `Todo` state and persists the collection.
    ///
    /// The id is one greater than the largest numeric id present, or 1 for
    /// an empty collection, so deleting tasks leaves gaps rather than
    /// reusing ids. Ids that do not parse as numbers (hand-edited files)
    /// are ignored for the computation.
    #[tracing::instrument(skip(self, tasks))]
    pub fn add(
        &self,
        tasks: &mut Vec<Task>,
        description: String,
    ) -> Result<Task, TaskServiceError> {
        let id = Self::next_id(tasks);
        let task = Task::new(id.to_string(), description, Utc::now());
        tasks.push(task.clone());
        self.store.save(tasks)?;
        Ok(task)
    }

    /// Replaces the description of the task with the given id and persists.
    #[tracing::instrument(skip(self, tasks))]
    pub fn update_description(
        &self,
        tasks: &mut Vec<Task>,
        id: &str,
        description: String,
    ) -> Result<(), TaskServiceError> {
        let task = Self::find_mut(tasks, id)?;
        task.set_description(description, Utc::now());
        self.store.save(tasks)?;
        Ok(())
    }

    /// Removes the task with the given id, keeping the relative order of
    /// the remaining tasks, and persists.
    #[tracing::instrument(skip(self, tasks))]
    pub fn delete(&self, tasks: &mut Vec<Task>, id: &str) -> Result<(), TaskServiceError> {
        let position = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskServiceError::TaskNotFound(id.to_string()))?;
        tasks.remove(position);
        self.store.save(tasks)?;
        Ok(())
    }

    /// Moves the task with the given id to the new status, persists, and
    /// returns the status it was set to.
    #[tracing::instrument(skip(self, tasks))]
    pub fn change_status(
        &self,
        tasks: &mut Vec<Task>,
        id: &str,
        status: Status,
    ) -> Result<Status, TaskServiceError> {
        let task = Self::find_mut(tasks, id)?;
        task.set_status(status, Utc::now());
        self.store.save(tasks)?;
        Ok(status)
    }

    // Lookup is exact string equality on the id; with duplicate ids from a
    // corrupted file, the first match in collection order wins.
    fn find_mut<'t>(tasks: &'t mut [Task], id: &str) -> Result<&'t mut Task, TaskServiceError> {
        tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskServiceError::TaskNotFound(id.to_string()))
    }

    fn next_id(tasks: &[Task]) -> u64 {
        tasks
            .iter()
            .filter_map(|task| task.id().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }
}
