//! Grouped undo stack

use crate::scene::SceneHost;
use crate::undo::{Edit, EditJournal};

#[derive(Debug, Clone)]
struct Entry<Id> {
    label: &'static str,
    edit: Edit<Id>,
}

#[derive(Debug, Clone)]
struct Group {
    name: String,
    start: usize,
}

/// Journal keeping edits so they can be reverted
///
/// Edits recorded while a group is open belong to that group. Outside of a
/// group every edit forms a group of its own, named after its label.
#[derive(Debug, Clone)]
pub struct UndoStack<Id> {
    entries: Vec<Entry<Id>>,
    groups: Vec<Group>,
    open: bool,
}

impl<Id> Default for UndoStack<Id> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            groups: Vec::new(),
            open: false,
        }
    }
}

impl<Id: Copy + std::fmt::Debug> UndoStack<Id> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a named group; it stays open until [`end_group`](Self::end_group)
    /// or the next `begin_group`
    pub fn begin_group(&mut self, name: impl Into<String>) {
        self.drop_empty_group();
        self.groups.push(Group {
            name: name.into(),
            start: self.entries.len(),
        });
        self.open = true;
    }

    /// Close the open group, discarding it when nothing was recorded
    pub fn end_group(&mut self) {
        self.drop_empty_group();
        self.open = false;
    }

    fn drop_empty_group(&mut self) {
        let empty = self.open
            && self
                .groups
                .last()
                .is_some_and(|group| group.start == self.entries.len());
        if empty {
            if let Some(group) = self.groups.pop() {
                log::debug!("Dropping empty group '{}'", group.name);
            }
        }
    }

    /// Number of recorded edits
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded edits with their labels, oldest first
    pub fn edits(&self) -> impl Iterator<Item = (&'static str, &Edit<Id>)> {
        self.entries.iter().map(|entry| (entry.label, &entry.edit))
    }

    /// Revert the most recent group, newest edit first
    ///
    /// Returns the name of the reverted group.
    pub fn undo_group<H>(&mut self, host: &mut H) -> Option<String>
    where
        H: SceneHost<Id = Id>,
    {
        self.end_group();
        let group = self.groups.pop()?;
        let edits = self.entries.split_off(group.start);
        log::debug!("Undoing '{}' ({} edits)", group.name, edits.len());
        for entry in edits.into_iter().rev() {
            revert(host, entry);
        }
        Some(group.name)
    }

    /// Revert every group, returning how many were undone
    pub fn undo_all<H>(&mut self, host: &mut H) -> usize
    where
        H: SceneHost<Id = Id>,
    {
        let mut undone = 0;
        while self.undo_group(host).is_some() {
            undone += 1;
        }
        undone
    }
}

impl<Id> EditJournal<Id> for UndoStack<Id> {
    fn record(&mut self, label: &'static str, edit: Edit<Id>) {
        if !self.open {
            self.groups.push(Group {
                name: label.to_string(),
                start: self.entries.len(),
            });
        }
        self.entries.push(Entry { label, edit });
    }
}

fn revert<H: SceneHost>(host: &mut H, entry: Entry<H::Id>) {
    let node = entry.edit.node();
    let applied = match entry.edit {
        Edit::TransformChanged { before, .. } => host.set_local_transform(node, before),
        Edit::ColliderChanged { before, .. } => match host.collider_mut(node) {
            Some(collider) => {
                *collider = before;
                true
            }
            None => false,
        },
        Edit::NodeCreated { .. } => host.destroy_node(node),
        Edit::ColliderAdded { .. } => host.detach_collider(node).is_some(),
        Edit::ColliderRemoved { collider, .. } => {
            host.attach_collider(node, collider);
            host.collider(node).is_some()
        }
    };
    if !applied {
        log::warn!("Could not revert '{}' on node {:?}", entry.label, node);
    }
}
