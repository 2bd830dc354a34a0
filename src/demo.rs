//! Reference tree used by the binary and by tests.

use tracing::info;

use crate::filesystem::{Category, Tree, TreeError};

/// Populates `tree` with the demonstration hierarchy:
///
/// ```text
/// root
///     Directory1
///         FileX
///         Directory11
///             File1
///             File2
///         Directory12
///             File122
///             Directory121
///                 File3
///                 File4
///     Directory2
///         File5
///         File6
/// ```
pub fn populate(tree: &mut Tree) -> Result<(), TreeError> {
    let category = Category::Documents;

    tree.add_directory("Directory1", 1, category, 0)?;
    tree.add_file("FileX", 2, category, 1)?;
    tree.add_directory("Directory11", 3, category, 1)?;
    tree.add_file("File1", 4, category, 3)?;
    tree.add_file("File2", 5, category, 3)?;
    tree.add_directory("Directory12", 6, category, 1)?;
    tree.add_directory("Directory121", 7, category, 6)?;
    tree.add_file("File3", 8, category, 7)?;
    tree.add_file("File4", 9, category, 7)?;
    tree.add_file("File122", 10, category, 6)?;
    tree.add_directory("Directory2", 11, category, 0)?;
    tree.add_file("File5", 12, category, 11)?;
    tree.add_file("File6", 13, category, 11)?;

    info!(
        "Populated demonstration tree: {} directories, {} files",
        tree.directory_count(),
        tree.file_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_twice_attaches_duplicates_to_first_matches() {
        let mut tree = Tree::new();
        assert!(populate(&mut tree).is_ok());
        // Duplicate ids resolve to the first directory in pre-order
        assert!(populate(&mut tree).is_ok());
        assert_eq!(tree.directory_count(), 11);
        assert_eq!(tree.file_count(), 16);
        assert_eq!(tree.find_directory(1).unwrap().files().len(), 2);
    }
}
