pub mod demo;
pub mod filesystem;

pub use filesystem::{Category, DirectoryView, File, Indent, NodeId, RenderOptions, Tree, TreeError};
