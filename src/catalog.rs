//! Algorithm Catalog
//!
//! The static table behind the main menu: 21 demonstrations, their
//! categories, and which screen each opens. Ids are the stable strings
//! the bookmark backend stores.

use crate::engine::list::ListKind;
use crate::engine::sort::SortKind;
use crate::engine::tree::TraversalKind;

/// Which visualizer a catalog entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmScreen {
    LinearSearch,
    BinarySearch,
    Sort(SortKind),
    ArrayOps1D,
    ArrayOps2D,
    StringOps,
    LinkedList(ListKind),
    Stack,
    Queue,
    Traversal(TraversalKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub screen: AlgorithmScreen,
}

#[rustfmt::skip]
pub const ALGORITHMS: &[AlgorithmEntry] = &[
    AlgorithmEntry { id: "1", title: "Linear Search", category: "Searching", screen: AlgorithmScreen::LinearSearch },
    AlgorithmEntry { id: "2", title: "Binary Search", category: "Searching", screen: AlgorithmScreen::BinarySearch },
    AlgorithmEntry { id: "3", title: "Bubble Sort", category: "Sorting", screen: AlgorithmScreen::Sort(SortKind::Bubble) },
    AlgorithmEntry { id: "4", title: "Selection Sort", category: "Sorting", screen: AlgorithmScreen::Sort(SortKind::Selection) },
    AlgorithmEntry { id: "5", title: "Insertion Sort", category: "Sorting", screen: AlgorithmScreen::Sort(SortKind::Insertion) },
    AlgorithmEntry { id: "6", title: "Merge Sort", category: "Sorting", screen: AlgorithmScreen::Sort(SortKind::Merge) },
    AlgorithmEntry { id: "7", title: "Quick Sort", category: "Sorting", screen: AlgorithmScreen::Sort(SortKind::Quick) },
    AlgorithmEntry { id: "8", title: "1D Array Operations", category: "Arrays", screen: AlgorithmScreen::ArrayOps1D },
    AlgorithmEntry { id: "9", title: "2D Array Operations", category: "Arrays", screen: AlgorithmScreen::ArrayOps2D },
    AlgorithmEntry { id: "10", title: "String Manipulations", category: "Strings", screen: AlgorithmScreen::StringOps },
    AlgorithmEntry { id: "11", title: "Singly Linked List", category: "Linked Lists", screen: AlgorithmScreen::LinkedList(ListKind::Singly) },
    AlgorithmEntry { id: "12", title: "Doubly Linked List", category: "Linked Lists", screen: AlgorithmScreen::LinkedList(ListKind::Doubly) },
    AlgorithmEntry { id: "13", title: "Circular Singly Linked List", category: "Linked Lists", screen: AlgorithmScreen::LinkedList(ListKind::CircularSingly) },
    AlgorithmEntry { id: "14", title: "Circular Doubly Linked List", category: "Linked Lists", screen: AlgorithmScreen::LinkedList(ListKind::CircularDoubly) },
    AlgorithmEntry { id: "15", title: "Stack", category: "Data Structures", screen: AlgorithmScreen::Stack },
    AlgorithmEntry { id: "16", title: "Queue", category: "Data Structures", screen: AlgorithmScreen::Queue },
    AlgorithmEntry { id: "17", title: "Inorder Traversal", category: "Trees", screen: AlgorithmScreen::Traversal(TraversalKind::Inorder) },
    AlgorithmEntry { id: "18", title: "Preorder Traversal", category: "Trees", screen: AlgorithmScreen::Traversal(TraversalKind::Preorder) },
    AlgorithmEntry { id: "19", title: "Postorder Traversal", category: "Trees", screen: AlgorithmScreen::Traversal(TraversalKind::Postorder) },
    AlgorithmEntry { id: "20", title: "Breadth-First Search (BFS)", category: "Graphs", screen: AlgorithmScreen::Traversal(TraversalKind::Bfs) },
    AlgorithmEntry { id: "21", title: "Depth-First Search (DFS)", category: "Graphs", screen: AlgorithmScreen::Traversal(TraversalKind::Dfs) },
];

/// "All" plus each category once, in catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut out = vec!["All"];
    for entry in ALGORITHMS {
        if !out.contains(&entry.category) {
            out.push(entry.category);
        }
    }
    out
}

/// Category filter plus case-insensitive substring search over title and
/// category. The bookmark filter happens where the bookmark map lives.
pub fn matches_filter(entry: &AlgorithmEntry, category: &str, query: &str) -> bool {
    let matches_category = category == "All" || entry.category == category;
    let query = query.to_lowercase();
    let matches_query = query.is_empty()
        || entry.title.to_lowercase().contains(&query)
        || entry.category.to_lowercase().contains(&query);
    matches_category && matches_query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_one_unique_entries() {
        assert_eq!(ALGORITHMS.len(), 21);
        let mut ids: Vec<&str> = ALGORITHMS.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 21);
    }

    #[test]
    fn categories_start_with_all() {
        let cats = categories();
        assert_eq!(cats[0], "All");
        assert!(cats.contains(&"Sorting"));
        assert!(cats.contains(&"Graphs"));
        // 8 real categories plus "All".
        assert_eq!(cats.len(), 9);
    }

    #[test]
    fn filter_combines_category_and_query() {
        let merge = ALGORITHMS.iter().find(|e| e.id == "6").unwrap();
        assert!(matches_filter(merge, "All", ""));
        assert!(matches_filter(merge, "Sorting", "merge"));
        assert!(matches_filter(merge, "All", "SORT"));
        assert!(!matches_filter(merge, "Searching", ""));
        assert!(!matches_filter(merge, "Sorting", "binary"));
    }
}
