use hashlink::LinkedHashMap;

use crate::filesystem::Category;

/// Caller-assigned node identifier. Uniqueness is the caller's responsibility.
pub type NodeId = u64;

/// Arena key of a directory node, assigned by the tree on insertion
pub(crate) type SlotKey = usize;

pub(crate) type Arena = LinkedHashMap<SlotKey, DirectoryNode>;

/// A leaf entry of the tree. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    id: NodeId,
    category: Category,
}

impl File {
    pub(crate) fn new(name: String, id: NodeId, category: Category) -> Self {
        Self { name, id, category }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Directory record stored in the arena.
///
/// Files are leaves and live inline; child directories are referenced by
/// their arena slot so that ownership stays flat.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryNode {
    pub(crate) name: String,
    pub(crate) id: NodeId,
    pub(crate) category: Category,
    pub(crate) files: Vec<File>,
    pub(crate) directories: Vec<SlotKey>,
    /// `None` only for the root
    pub(crate) parent: Option<SlotKey>,
}

impl DirectoryNode {
    pub(crate) fn new(
        name: String,
        id: NodeId,
        category: Category,
        parent: Option<SlotKey>,
    ) -> Self {
        Self {
            name,
            id,
            category,
            files: Vec::new(),
            directories: Vec::new(),
            parent,
        }
    }
}

/// Borrowed, read-only view of a directory and its subtree
#[derive(Debug, Clone, Copy)]
pub struct DirectoryView<'a> {
    arena: &'a Arena,
    node: &'a DirectoryNode,
}

impl<'a> DirectoryView<'a> {
    pub(crate) fn new(arena: &'a Arena, node: &'a DirectoryNode) -> Self {
        Self { arena, node }
    }

    pub fn name(&self) -> &'a str {
        &self.node.name
    }

    pub fn id(&self) -> NodeId {
        self.node.id
    }

    pub fn category(&self) -> Category {
        self.node.category
    }

    /// Files directly contained in this directory, in insertion order
    pub fn files(&self) -> &'a [File] {
        &self.node.files
    }

    /// Child directories in insertion order
    pub fn directories(self) -> impl Iterator<Item = DirectoryView<'a>> + 'a {
        let arena = self.arena;
        self.node
            .directories
            .iter()
            .filter_map(move |slot| arena.get(slot))
            .map(move |node| DirectoryView::new(arena, node))
    }
}
