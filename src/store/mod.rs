//! In-memory lists and tasks, and the rules that tie them together.
//!
//! Both collections are id-addressed [`Slots`]: deleting leaves a hole and
//! ids are never reissued within a session. Every live task belongs to a live
//! list; deleting a list deletes its tasks.

pub mod error;

pub use error::StoreError;

use crate::config::DatabasePaths;
use crate::domain::{List, Slots, Task};
use crate::persistence::{atomic_write, parse_into, read_file, serialize, touch_files, Record};
use std::path::Path;

/// The task database: two collections and the files they persist to
#[derive(Debug, Clone)]
pub struct Store {
    paths: DatabasePaths,
    lists: Slots<List>,
    tasks: Slots<Task>,
}

impl Store {
    /// Empty store; nothing is read until `import_files`
    pub fn new(paths: DatabasePaths) -> Self {
        Self {
            paths,
            lists: Slots::new(),
            tasks: Slots::new(),
        }
    }

    /// Create the store and load both files, creating them if missing
    pub fn open(paths: DatabasePaths) -> Result<Self, StoreError> {
        let mut store = Self::new(paths);
        store.import_files()?;
        Ok(store)
    }

    /// Replace both collections with the contents of the files
    pub fn import_files(&mut self) -> Result<(), StoreError> {
        touch_files(&[&self.paths.tasks, &self.paths.lists])?;

        let lists: Slots<List> = load(&self.paths.lists)?;
        let mut tasks: Slots<Task> = load(&self.paths.tasks)?;

        let orphans = tasks.remove_where(|task| !lists.contains(task.list_id));
        if !orphans.is_empty() {
            log::warn!("dropped {} task(s) whose list no longer exists: {:?}", orphans.len(), orphans);
        }

        log::info!(
            "loaded {} list(s) and {} task(s) from {} / {}",
            lists.live_count(),
            tasks.live_count(),
            self.paths.lists.display(),
            self.paths.tasks.display()
        );

        self.lists = lists;
        self.tasks = tasks;
        Ok(())
    }

    /// Rewrite both files from the live entities
    pub fn save_files(&self) -> Result<(), StoreError> {
        atomic_write(&self.paths.tasks, &serialize(&self.tasks))?;
        atomic_write(&self.paths.lists, &serialize(&self.lists))?;
        log::debug!(
            "saved {} list(s) and {} task(s)",
            self.lists.live_count(),
            self.tasks.live_count()
        );
        Ok(())
    }

    /// Live lists in id order
    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.lists.iter()
    }

    /// Live tasks in id order
    #[cfg(test)]
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn list(&self, id: usize) -> Option<&List> {
        self.lists.get(id)
    }

    #[cfg(test)]
    pub fn task(&self, id: usize) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Number of list slots, counting the placeholder and holes
    pub fn list_slot_count(&self) -> usize {
        self.lists.slot_count()
    }

    /// Whether `id` falls inside the assigned list id range. A hole still
    /// passes.
    pub fn is_valid_list_id(&self, id: usize) -> bool {
        (1..self.list_slot_count()).contains(&id)
    }

    /// Whether `id` names a list that can be opened or selected: in range
    /// and not a hole
    pub fn is_live_list(&self, id: usize) -> bool {
        self.is_valid_list_id(id) && self.lists.contains(id)
    }

    pub fn add_list(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let id = self.lists.push_with(|id| List::new(id, name));
        log::debug!("added list {}", id);
        id
    }

    pub fn select_list(&mut self, id: usize) -> Result<(), StoreError> {
        let list = self.lists.get_mut(id).ok_or(StoreError::ListNotFound(id))?;
        list.toggle_selected();
        Ok(())
    }

    /// Delete every selected list together with its tasks. Returns the number
    /// of lists removed.
    pub fn delete_selected_lists(&mut self) -> usize {
        let removed = self.lists.remove_where(|list| list.selected);
        for list_id in &removed {
            self.delete_list_tasks(*list_id);
        }
        if !removed.is_empty() {
            log::debug!("deleted lists {:?}", removed);
        }
        removed.len()
    }

    /// Hole out every task of a list. Returns the number of tasks removed.
    pub fn delete_list_tasks(&mut self, list_id: usize) -> usize {
        self.tasks.remove_where(|task| task.list_id == list_id).len()
    }

    /// Live tasks of a list, in id (insertion) order
    pub fn pull_list_tasks(&self, list_id: usize) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.list_id == list_id).collect()
    }

    pub fn add_task(&mut self, list_id: usize, name: impl Into<String>) -> Result<usize, StoreError> {
        if !self.lists.contains(list_id) {
            return Err(StoreError::ListNotFound(list_id));
        }
        let name = name.into();
        let id = self.tasks.push_with(|id| Task::new(id, list_id, name));
        log::debug!("added task {} to list {}", id, list_id);
        Ok(id)
    }

    pub fn select_task(&mut self, id: usize) -> Result<(), StoreError> {
        let task = self.tasks.get_mut(id).ok_or(StoreError::TaskNotFound(id))?;
        task.toggle_selected();
        Ok(())
    }

    /// Toggle completion of every selected task, then clear all task
    /// selections. Returns the number of tasks toggled.
    pub fn complete_selected_tasks(&mut self) -> usize {
        let mut toggled = 0;
        for task in self.tasks.iter_mut().filter(|task| task.selected) {
            task.toggle_complete();
            toggled += 1;
        }
        self.unselect_all_tasks();
        toggled
    }

    pub fn delete_selected_tasks(&mut self) -> usize {
        let selected: Vec<usize> = self
            .tasks
            .iter()
            .filter(|task| task.selected)
            .map(|task| task.id)
            .collect();
        selected
            .into_iter()
            .filter(|id| self.delete_task(*id).is_ok())
            .count()
    }

    pub fn delete_task(&mut self, id: usize) -> Result<(), StoreError> {
        self.tasks.remove(id).ok_or(StoreError::TaskNotFound(id))?;
        log::debug!("deleted task {}", id);
        Ok(())
    }

    pub fn unselect_all(&mut self) {
        self.unselect_all_lists();
        self.unselect_all_tasks();
    }

    pub fn unselect_all_lists(&mut self) {
        self.lists.iter_mut().for_each(|list| list.selected = false);
    }

    pub fn unselect_all_tasks(&mut self) {
        self.tasks.iter_mut().for_each(|task| task.selected = false);
    }
}

fn load<T: Record>(path: &Path) -> Result<Slots<T>, StoreError> {
    let mut slots = Slots::new();
    let text = read_file(path)?;
    parse_into(&text, &mut slots).map_err(|e| e.in_file(path))?;
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, DatabasePaths) {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("test");
        let paths = DatabasePaths::from_name(name.to_str().unwrap());
        (dir, paths)
    }

    fn memory_store() -> Store {
        Store::new(DatabasePaths::from_name("unused"))
    }

    fn list_ids(store: &Store) -> Vec<usize> {
        store.lists().map(|l| l.id).collect()
    }

    fn task_ids(store: &Store) -> Vec<usize> {
        store.tasks().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_list_and_task() {
        let mut store = memory_store();
        assert_eq!(store.add_list("Home"), 1);

        let task_id = store.add_task(1, "Buy milk").unwrap();
        assert_eq!(task_id, 1);

        let task = store.task(1).unwrap();
        assert_eq!(task.list_id, 1);
        assert_eq!(task.name, "Buy milk");
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_complete_selected_scenario() {
        let mut store = memory_store();
        store.add_list("Home");
        store.add_task(1, "Buy milk").unwrap();

        store.select_task(1).unwrap();
        assert_eq!(store.complete_selected_tasks(), 1);

        let task = store.task(1).unwrap();
        assert!(task.completed_at.is_some());
        assert!(!task.selected);
    }

    #[test]
    fn test_complete_toggles_only_selected_and_clears_all() {
        let mut store = memory_store();
        store.add_list("Home");
        store.add_task(1, "a").unwrap();
        store.add_task(1, "b").unwrap();
        store.add_task(1, "c").unwrap();

        // Task 3 starts completed and gets reopened
        store.select_task(3).unwrap();
        store.complete_selected_tasks();

        store.select_task(1).unwrap();
        store.select_task(3).unwrap();
        assert_eq!(store.complete_selected_tasks(), 2);

        assert!(store.task(1).unwrap().is_completed());
        assert!(!store.task(2).unwrap().is_completed());
        assert!(!store.task(3).unwrap().is_completed());
        assert!(store.tasks().all(|t| !t.selected));
    }

    #[test]
    fn test_complete_with_nothing_selected() {
        let mut store = memory_store();
        store.add_list("Home");
        store.add_task(1, "a").unwrap();
        assert_eq!(store.complete_selected_tasks(), 0);
        assert!(!store.task(1).unwrap().is_completed());
    }

    #[test]
    fn test_delete_selected_lists_cascades() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_list("B");
        store.add_task(1, "x").unwrap();
        store.add_task(2, "y").unwrap();

        store.select_list(1).unwrap();
        assert_eq!(store.delete_selected_lists(), 1);

        assert!(store.list(1).is_none());
        assert!(store.task(1).is_none());
        assert_eq!(list_ids(&store), vec![2]);
        assert_eq!(task_ids(&store), vec![2]);
        assert_eq!(store.task(2).unwrap().name, "y");
    }

    #[test]
    fn test_delete_selected_lists_multiple() {
        let mut store = memory_store();
        for name in ["A", "B", "C"] {
            store.add_list(name);
        }
        for list_id in [1, 2, 3, 1, 3] {
            store.add_task(list_id, "t").unwrap();
        }

        store.select_list(1).unwrap();
        store.select_list(3).unwrap();
        assert_eq!(store.delete_selected_lists(), 2);

        assert_eq!(list_ids(&store), vec![2]);
        assert_eq!(task_ids(&store), vec![2]);
    }

    #[test]
    fn test_cascade_then_add_never_collides() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_list("B");
        store.add_task(1, "a1").unwrap();
        store.add_task(1, "a2").unwrap();
        store.add_task(2, "b1").unwrap();

        store.select_list(1).unwrap();
        store.delete_selected_lists();

        let id = store.add_task(2, "b2").unwrap();
        assert_eq!(id, 4);
        assert_eq!(store.task(3).unwrap().name, "b1");
        assert_eq!(store.task(4).unwrap().name, "b2");
        assert!(store.task(1).is_none());
    }

    #[test]
    fn test_pull_list_tasks_order_and_filter() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_list("B");
        store.add_task(1, "first").unwrap();
        store.add_task(2, "other").unwrap();
        store.add_task(1, "second").unwrap();
        store.add_task(1, "third").unwrap();
        store.delete_task(3).unwrap();

        let names: Vec<&str> = store.pull_list_tasks(1).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert!(store.pull_list_tasks(9).is_empty());
    }

    #[test]
    fn test_delete_selected_tasks() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_task(1, "keep").unwrap();
        store.add_task(1, "drop").unwrap();

        store.select_task(2).unwrap();
        assert_eq!(store.delete_selected_tasks(), 1);
        assert_eq!(task_ids(&store), vec![1]);
        assert!(matches!(store.delete_task(2), Err(StoreError::TaskNotFound(2))));
        assert_eq!(store.add_task(1, "next").unwrap(), 3);
    }

    #[test]
    fn test_hardened_lookups() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_task(1, "x").unwrap();
        store.delete_task(1).unwrap();

        assert!(matches!(store.select_list(0), Err(StoreError::ListNotFound(0))));
        assert!(matches!(store.select_list(5), Err(StoreError::ListNotFound(5))));
        assert!(matches!(store.select_task(1), Err(StoreError::TaskNotFound(1))));
        assert!(matches!(store.delete_task(1), Err(StoreError::TaskNotFound(1))));
        assert!(matches!(store.add_task(7, "y"), Err(StoreError::ListNotFound(7))));
    }

    #[test]
    fn test_valid_list_id_range() {
        let mut store = memory_store();
        assert!(!store.is_valid_list_id(1));

        store.add_list("A");
        store.add_list("B");
        store.select_list(1).unwrap();
        store.delete_selected_lists();

        assert!(!store.is_valid_list_id(0));
        assert!(store.is_valid_list_id(1));
        assert!(store.is_valid_list_id(2));
        assert!(!store.is_valid_list_id(3));
        // In range but a hole
        assert!(store.list(1).is_none());
    }

    #[test]
    fn test_is_live_list_excludes_holes() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_list("B");
        store.select_list(1).unwrap();
        store.delete_selected_lists();

        assert!(!store.is_live_list(0));
        assert!(!store.is_live_list(1));
        assert!(store.is_live_list(2));
        assert!(!store.is_live_list(3));
    }

    #[test]
    fn test_unselect_all() {
        let mut store = memory_store();
        store.add_list("A");
        store.add_task(1, "x").unwrap();
        store.select_list(1).unwrap();
        store.select_task(1).unwrap();

        store.unselect_all_lists();
        assert!(!store.list(1).unwrap().selected);
        assert!(store.task(1).unwrap().selected);

        store.select_list(1).unwrap();
        store.unselect_all();
        assert!(!store.list(1).unwrap().selected);
        assert!(!store.task(1).unwrap().selected);
    }

    #[test]
    fn test_open_creates_missing_files() {
        let (_dir, paths) = temp_paths();
        let store = Store::open(paths.clone()).unwrap();

        assert!(paths.tasks.exists());
        assert!(paths.lists.exists());
        assert_eq!(store.lists().count(), 0);
        assert_eq!(store.list_slot_count(), 1);
    }

    #[test]
    fn test_empty_store_round_trip() {
        let (_dir, paths) = temp_paths();
        Store::new(paths.clone()).save_files().unwrap();

        let mut reloaded = Store::open(paths).unwrap();
        assert_eq!(reloaded.lists().count(), 0);
        assert_eq!(reloaded.tasks().count(), 0);
        assert_eq!(reloaded.add_list("First"), 1);
    }

    #[test]
    fn test_save_reload_preserves_live_entities() {
        let (_dir, paths) = temp_paths();
        let mut store = Store::open(paths.clone()).unwrap();

        store.add_list("Home");
        store.add_list("Work, mostly");
        store.add_task(1, "Buy milk").unwrap();
        store.save_files().unwrap();

        store.add_task(2, "Write \"report\"").unwrap();
        store.add_task(1, "Call plumber").unwrap();
        store.select_task(3).unwrap();
        store.complete_selected_tasks();
        store.select_list(2).unwrap();
        store.save_files().unwrap();

        let reloaded = Store::open(paths).unwrap();
        store.unselect_all();

        assert_eq!(
            reloaded.lists().collect::<Vec<_>>(),
            store.lists().collect::<Vec<_>>()
        );
        assert_eq!(
            reloaded.tasks().collect::<Vec<_>>(),
            store.tasks().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reload_keeps_gaps_and_surviving_ids() {
        let (_dir, paths) = temp_paths();
        let mut store = Store::open(paths.clone()).unwrap();
        store.add_list("A");
        store.add_list("B");
        store.add_list("C");
        store.add_task(3, "c1").unwrap();
        store.select_list(2).unwrap();
        store.delete_selected_lists();
        store.save_files().unwrap();

        let mut reloaded = Store::open(paths).unwrap();
        assert_eq!(list_ids(&reloaded), vec![1, 3]);
        assert!(reloaded.list(2).is_none());
        assert_eq!(reloaded.task(1).unwrap().list_id, 3);
        assert_eq!(reloaded.add_list("D"), 4);
    }

    #[test]
    fn test_reload_reissues_trailing_tombstone_ids() {
        // Holes are not written to disk, so an id deleted above the highest
        // surviving id is handed out again after a reload.
        let (_dir, paths) = temp_paths();
        let mut store = Store::open(paths.clone()).unwrap();
        store.add_list("A");
        store.add_task(1, "kept").unwrap();
        store.add_task(1, "deleted").unwrap();
        store.delete_task(2).unwrap();
        store.save_files().unwrap();

        let mut reloaded = Store::open(paths).unwrap();
        assert_eq!(reloaded.add_task(1, "new").unwrap(), 2);
        assert_eq!(reloaded.task(1).unwrap().name, "kept");
    }

    #[test]
    fn test_import_drops_orphan_tasks() {
        let (_dir, paths) = temp_paths();
        atomic_write(&paths.lists, "id,name,created_at,modified_at\n1,Home,,\n").unwrap();
        atomic_write(
            &paths.tasks,
            "id,list_id,name,completed_at,created_at,modified_at\n1,1,ok,,,\n2,5,orphan,,,\n",
        )
        .unwrap();

        let store = Store::open(paths).unwrap();
        assert_eq!(task_ids(&store), vec![1]);
    }

    #[test]
    fn test_import_reports_malformed_file() {
        let (_dir, paths) = temp_paths();
        atomic_write(&paths.lists, "id,name,created_at,modified_at\n1,Home\n").unwrap();

        let err = Store::open(paths.clone()).unwrap_err();
        match err {
            StoreError::Persistence(PersistenceError::InFile { path, source }) => {
                assert_eq!(path, paths.lists);
                assert!(matches!(*source, PersistenceError::MalformedRow { line: 2, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_import_accepts_header_only_files() {
        let (_dir, paths) = temp_paths();
        atomic_write(&paths.lists, "id,name,created_at,modified_at\n").unwrap();
        atomic_write(&paths.tasks, "id,list_id,name,completed_at,created_at,modified_at\n").unwrap();

        let store = Store::open(paths).unwrap();
        assert_eq!(store.lists().count(), 0);
        assert_eq!(store.tasks().count(), 0);
    }
}
