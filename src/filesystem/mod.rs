//! In-memory directory tree with categorized nodes.
//!
//! The tree is rooted at a synthetic `root` directory (id 0) and supports
//! id-addressed creation, lookup and removal of directories and files, plus a
//! tab-indented textual dump of the whole hierarchy.

mod category;
mod node;
mod render;
mod tree;

pub use category::Category;
pub use node::{DirectoryView, File, NodeId};
pub use render::{Indent, IndentParseError, RenderOptions};
pub use tree::{Tree, TreeError};
