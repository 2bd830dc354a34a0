use std::collections::HashMap;
use std::fmt;

use snafu::{OptionExt, Snafu};
use tracing::debug;

use crate::filesystem::node::{Arena, DirectoryNode, SlotKey};
use crate::filesystem::render::{RenderOptions, render_directory};
use crate::filesystem::{Category, DirectoryView, File, NodeId};

const ROOT_SLOT: SlotKey = 0;
const ROOT_ID: NodeId = 0;
const ROOT_NAME: &str = "root";

/// Directory hierarchy owned from a synthetic root (id 0) downward.
///
/// Non-root directories live in a flat arena keyed by slot; every directory
/// holds the slots of its children in insertion order. All lookups by caller
/// id follow pre-order depth-first semantics from the root, so duplicate ids
/// resolve to the first match. Ids that occur once are resolved through an
/// index; only duplicated ids fall back to walking the tree.
#[derive(Debug, Clone)]
pub struct Tree {
    root: DirectoryNode,
    arena: Arena,
    next_slot: SlotKey,
    /// Slots of every live directory, by caller id
    directory_index: HashMap<NodeId, Vec<SlotKey>>,
    /// Containing directory slot of every live file, by caller id
    file_index: HashMap<NodeId, Vec<SlotKey>>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            root: DirectoryNode::new(ROOT_NAME.to_string(), ROOT_ID, Category::Root, None),
            arena: Arena::new(),
            next_slot: ROOT_SLOT + 1,
            directory_index: HashMap::from([(ROOT_ID, vec![ROOT_SLOT])]),
            file_index: HashMap::new(),
        }
    }

    pub fn root(&self) -> DirectoryView<'_> {
        DirectoryView::new(&self.arena, &self.root)
    }

    /// Returns the first directory with the given id in pre-order
    pub fn find_directory(&self, id: NodeId) -> Option<DirectoryView<'_>> {
        let slot = self.find_slot(id)?;
        self.node(slot).map(|node| DirectoryView::new(&self.arena, node))
    }

    /// Returns the first file with the given id, searching directories in pre-order
    pub fn find_file(&self, id: NodeId) -> Option<&File> {
        let slot = self.find_file_slot(id)?;
        self.node(slot)?.files.iter().find(|file| file.id() == id)
    }

    pub fn add_directory(
        &mut self,
        name: impl Into<String>,
        id: NodeId,
        category: Category,
        parent_id: NodeId,
    ) -> Result<(), TreeError> {
        let parent_slot = self
            .find_slot(parent_id)
            .context(ParentNotFoundSnafu { parent_id })?;
        let slot = self.next_slot;
        let parent = self
            .node_mut(parent_slot)
            .context(ParentNotFoundSnafu { parent_id })?;
        parent.directories.push(slot);

        let name = name.into();
        debug!("Added directory '{}' ({}) under {}", name, id, parent_id);
        self.arena.insert(
            slot,
            DirectoryNode::new(name, id, category, Some(parent_slot)),
        );
        self.directory_index.entry(id).or_default().push(slot);
        self.next_slot += 1;
        Ok(())
    }

    pub fn add_file(
        &mut self,
        name: impl Into<String>,
        id: NodeId,
        category: Category,
        parent_id: NodeId,
    ) -> Result<(), TreeError> {
        let parent_slot = self
            .find_slot(parent_id)
            .context(ParentNotFoundSnafu { parent_id })?;
        let parent = self
            .node_mut(parent_slot)
            .context(ParentNotFoundSnafu { parent_id })?;

        let name = name.into();
        debug!("Added file '{}' ({}) under {}", name, id, parent_id);
        parent.files.push(File::new(name, id, category));
        self.file_index.entry(id).or_default().push(parent_slot);
        Ok(())
    }

    /// Looks up the directory `id` and removes every direct child of that
    /// same directory whose id is also `id`, along with its subtree.
    ///
    /// A directory is never its own child in a tree built with unique ids, so
    /// for such trees this only validates that `id` exists. Use
    /// [`Tree::detach_directory`] to remove a directory from its parent.
    pub fn remove_directory(&mut self, id: NodeId) -> Result<(), TreeError> {
        let slot = self.find_slot(id).context(NotFoundSnafu { id })?;
        let matching = self.child_slots_with_id(slot, id);
        if matching.is_empty() {
            debug!(
                "Directory {} has no child with the same id, nothing removed",
                id
            );
            return Ok(());
        }

        if let Some(node) = self.node_mut(slot) {
            node.directories.retain(|child| !matching.contains(child));
        }
        for child in matching {
            self.drop_subtree(child);
        }
        debug!("Removed self-id children of directory {}", id);
        Ok(())
    }

    /// Detaches the first directory with the given id (pre-order, root
    /// excluded) from its parent and deletes its whole subtree.
    pub fn detach_directory(&mut self, id: NodeId) -> Result<(), TreeError> {
        let (parent_slot, child_slot) = self
            .find_parent_slot(id)
            .context(NotFoundSnafu { id })?;

        if let Some(parent) = self.node_mut(parent_slot) {
            if let Some(position) = parent
                .directories
                .iter()
                .position(|child| *child == child_slot)
            {
                parent.directories.remove(position);
            }
        }
        self.drop_subtree(child_slot);
        debug!("Detached directory {} and its subtree", id);
        Ok(())
    }

    /// Removes the file `id` from the first directory (pre-order) that
    /// directly contains it. Unknown ids are ignored.
    pub fn remove_file(&mut self, id: NodeId) {
        let Some(slot) = self.find_file_slot(id) else {
            debug!("No file with id {}, nothing removed", id);
            return;
        };

        if let Some(node) = self.node_mut(slot) {
            node.files.retain(|file| file.id() != id);
            debug!("Removed file {} from directory {}", id, node.id);
        }
        unindex(&mut self.file_index, id, slot);
    }

    /// Number of directories in the tree, root included
    pub fn directory_count(&self) -> usize {
        self.arena.len() + 1
    }

    pub fn file_count(&self) -> usize {
        self.root.files.len()
            + self
                .arena
                .values()
                .map(|node| node.files.len())
                .sum::<usize>()
    }

    /// Tab-indented dump of the whole tree, one line per node
    pub fn show_all(&self) -> String {
        self.render(&RenderOptions::default())
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        let mut output = String::new();
        render_directory(&mut output, self.root(), 0, options);
        output
    }

    fn node(&self, slot: SlotKey) -> Option<&DirectoryNode> {
        if slot == ROOT_SLOT {
            Some(&self.root)
        } else {
            self.arena.get(&slot)
        }
    }

    fn node_mut(&mut self, slot: SlotKey) -> Option<&mut DirectoryNode> {
        if slot == ROOT_SLOT {
            Some(&mut self.root)
        } else {
            self.arena.get_mut(&slot)
        }
    }

    fn find_slot(&self, id: NodeId) -> Option<SlotKey> {
        match self.directory_index.get(&id).map(Vec::as_slice) {
            None | Some([]) => None,
            Some([slot]) => Some(*slot),
            Some(_) => self.find_slot_preorder(id),
        }
    }

    fn find_slot_preorder(&self, id: NodeId) -> Option<SlotKey> {
        let mut stack = vec![ROOT_SLOT];
        while let Some(slot) = stack.pop() {
            let Some(node) = self.node(slot) else {
                continue;
            };
            if node.id == id {
                return Some(slot);
            }
            stack.extend(node.directories.iter().rev());
        }
        None
    }

    fn find_file_slot(&self, id: NodeId) -> Option<SlotKey> {
        let slots = self.file_index.get(&id)?;
        let first = *slots.first()?;
        if slots.iter().all(|slot| *slot == first) {
            Some(first)
        } else {
            self.find_file_slot_preorder(id)
        }
    }

    fn find_file_slot_preorder(&self, id: NodeId) -> Option<SlotKey> {
        let mut stack = vec![ROOT_SLOT];
        while let Some(slot) = stack.pop() {
            let Some(node) = self.node(slot) else {
                continue;
            };
            if node.files.iter().any(|file| file.id() == id) {
                return Some(slot);
            }
            stack.extend(node.directories.iter().rev());
        }
        None
    }

    /// Returns `(parent, child)` slots of the first non-root directory with
    /// the given id in pre-order
    fn find_parent_slot(&self, id: NodeId) -> Option<(SlotKey, SlotKey)> {
        match self.directory_index.get(&id).map(Vec::as_slice) {
            None | Some([]) => None,
            Some([slot]) => self
                .node(*slot)
                .and_then(|node| node.parent)
                .map(|parent| (parent, *slot)),
            Some(_) => self.find_parent_slot_preorder(id),
        }
    }

    fn find_parent_slot_preorder(&self, id: NodeId) -> Option<(SlotKey, SlotKey)> {
        let mut stack: Vec<(SlotKey, SlotKey)> = self
            .root
            .directories
            .iter()
            .rev()
            .map(|child| (ROOT_SLOT, *child))
            .collect();
        while let Some((parent, slot)) = stack.pop() {
            let Some(node) = self.node(slot) else {
                continue;
            };
            if node.id == id {
                return Some((parent, slot));
            }
            stack.extend(node.directories.iter().rev().map(|child| (slot, *child)));
        }
        None
    }

    fn child_slots_with_id(&self, slot: SlotKey, id: NodeId) -> Vec<SlotKey> {
        self.node(slot)
            .map(|node| {
                node.directories
                    .iter()
                    .copied()
                    .filter(|child| {
                        self.node(*child)
                            .is_some_and(|child_node| child_node.id == id)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Deletes `slot` and all of its descendants from the arena and indexes
    fn drop_subtree(&mut self, slot: SlotKey) {
        let mut stack = vec![slot];
        let mut dropped = 0usize;
        while let Some(slot) = stack.pop() {
            let Some(node) = self.arena.remove(&slot) else {
                continue;
            };
            unindex(&mut self.directory_index, node.id, slot);
            for file in &node.files {
                unindex(&mut self.file_index, file.id(), slot);
            }
            stack.extend(node.directories);
            dropped += 1;
        }
        debug!("Dropped {} directories", dropped);
    }
}

/// Forgets every index entry pointing `id` at `slot`
fn unindex(index: &mut HashMap<NodeId, Vec<SlotKey>>, id: NodeId, slot: SlotKey) {
    if let Some(slots) = index.get_mut(&id) {
        slots.retain(|indexed| *indexed != slot);
        if slots.is_empty() {
            index.remove(&id);
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show_all())
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum TreeError {
    #[snafu(display("Parent directory {} does not exist", parent_id))]
    ParentNotFound { parent_id: NodeId },
    #[snafu(display("Directory {} does not exist", id))]
    NotFound { id: NodeId },
}
