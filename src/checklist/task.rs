//! Task and task list types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::TASK_DONE_SUFFIX;

/// Opaque handle naming a world object within a scene
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(pub String);

impl ObjectKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One required interaction bound to a specific world object
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub object: ObjectKey,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(object: impl Into<ObjectKey>, description: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Checklist line: the description, suffixed once completed
    pub fn render_line(&self) -> String {
        if self.completed {
            format!("{}{}", self.description, TASK_DONE_SUFFIX)
        } else {
            self.description.clone()
        }
    }
}

/// Ordered tasks; insertion order is the required interaction order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Vacuously true for an empty list
    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    pub fn position_of(&self, object: &ObjectKey) -> Option<usize> {
        self.tasks.iter().position(|t| t.object == *object)
    }

    /// Newline-joined checklist lines in list order
    pub fn render(&self) -> String {
        self.tasks
            .iter()
            .map(Task::render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_completed_tasks() {
        let mut list = TaskList::new(vec![
            Task::new("mug", "Find a mug"),
            Task::new("kettle", "Boil the kettle"),
        ]);
        list.get_mut(0).unwrap().completed = true;

        assert_eq!(list.render(), "Find a mug - Done!\nBoil the kettle");
    }

    #[test]
    fn test_empty_list_is_complete() {
        let list = TaskList::default();
        assert!(list.all_completed());
        assert_eq!(list.render(), "");
    }

    #[test]
    fn test_position_of() {
        let list: TaskList = [Task::new("a", "A"), Task::new("b", "B")].into_iter().collect();
        assert_eq!(list.position_of(&ObjectKey::new("b")), Some(1));
        assert_eq!(list.position_of(&ObjectKey::new("z")), None);
    }
}
