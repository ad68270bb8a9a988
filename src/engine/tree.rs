//! Binary Tree Traversals
//!
//! The tree screens take a level-order array (with `null` holes) and
//! animate a traversal order over it. The tree is kept in its level-order
//! form; traversals return heap indices (`left = 2i + 1`,
//! `right = 2i + 2`) into that array. A node is reachable only through a
//! chain of non-hole ancestors, exactly as a pointer build from the same
//! array would link it.

/// The traversal orders the catalog exposes. BFS is level order; the DFS
/// demo walks preorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    Preorder,
    Inorder,
    Postorder,
    Bfs,
    Dfs,
}

impl TraversalKind {
    pub fn title(self) -> &'static str {
        match self {
            TraversalKind::Preorder => "Preorder Traversal",
            TraversalKind::Inorder => "Inorder Traversal",
            TraversalKind::Postorder => "Postorder Traversal",
            TraversalKind::Bfs => "Breadth-First Search (BFS)",
            TraversalKind::Dfs => "Depth-First Search (DFS)",
        }
    }

    /// Order description shown on the screen.
    pub fn order_hint(self) -> &'static str {
        match self {
            TraversalKind::Preorder => "root, left subtree, right subtree",
            TraversalKind::Inorder => "left subtree, root, right subtree",
            TraversalKind::Postorder => "left subtree, right subtree, root",
            TraversalKind::Bfs => "level by level, left to right",
            TraversalKind::Dfs => "as deep as possible before backtracking",
        }
    }

    /// Default input for the screen; DFS demonstrates holes.
    pub fn default_input(self) -> &'static str {
        match self {
            TraversalKind::Dfs => "1,2,3,4,5,null,7",
            _ => "1,2,3,4,5,6,7",
        }
    }

    pub fn order(self, tree: &LevelTree) -> Vec<usize> {
        match self {
            TraversalKind::Preorder | TraversalKind::Dfs => tree.preorder(),
            TraversalKind::Inorder => tree.inorder(),
            TraversalKind::Postorder => tree.postorder(),
            TraversalKind::Bfs => tree.level_order(),
        }
    }
}

/// A binary tree stored as its level-order array.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTree {
    slots: Vec<Option<i64>>,
}

impl LevelTree {
    pub fn from_slots(slots: Vec<Option<i64>>) -> Self {
        Self { slots }
    }

    /// True when there is no root to traverse.
    pub fn is_empty(&self) -> bool {
        !self.exists(0)
    }

    pub fn value(&self, index: usize) -> Option<i64> {
        self.slots.get(index).copied().flatten()
    }

    fn exists(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    fn left(index: usize) -> usize {
        2 * index + 1
    }

    fn right(index: usize) -> usize {
        2 * index + 2
    }

    /// Reachable node count.
    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    pub fn height(&self) -> usize {
        fn depth(tree: &LevelTree, index: usize) -> usize {
            if !tree.exists(index) {
                return 0;
            }
            1 + depth(tree, LevelTree::left(index)).max(depth(tree, LevelTree::right(index)))
        }
        depth(self, 0)
    }

    pub fn preorder(&self) -> Vec<usize> {
        fn walk(tree: &LevelTree, index: usize, out: &mut Vec<usize>) {
            if !tree.exists(index) {
                return;
            }
            out.push(index);
            walk(tree, LevelTree::left(index), out);
            walk(tree, LevelTree::right(index), out);
        }
        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }

    pub fn inorder(&self) -> Vec<usize> {
        fn walk(tree: &LevelTree, index: usize, out: &mut Vec<usize>) {
            if !tree.exists(index) {
                return;
            }
            walk(tree, LevelTree::left(index), out);
            out.push(index);
            walk(tree, LevelTree::right(index), out);
        }
        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<usize> {
        fn walk(tree: &LevelTree, index: usize, out: &mut Vec<usize>) {
            if !tree.exists(index) {
                return;
            }
            walk(tree, LevelTree::left(index), out);
            walk(tree, LevelTree::right(index), out);
            out.push(index);
        }
        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }

    pub fn level_order(&self) -> Vec<usize> {
        let mut out = Vec::new();
        if !self.exists(0) {
            return out;
        }
        let mut queue = std::collections::VecDeque::from([0usize]);
        while let Some(index) = queue.pop_front() {
            out.push(index);
            if self.exists(Self::left(index)) {
                queue.push_back(Self::left(index));
            }
            if self.exists(Self::right(index)) {
                queue.push_back(Self::right(index));
            }
        }
        out
    }

    /// ASCII rendering with per-node visit markers. `order` is the
    /// traversal being animated and `visited` how many of its entries
    /// have been reached; the node at `order[visited - 1]` is the one
    /// currently highlighted.
    pub fn render_ascii(&self, order: &[usize], visited: usize) -> String {
        fn walk(
            tree: &LevelTree,
            index: usize,
            prefix: &str,
            is_left: bool,
            order: &[usize],
            visited: usize,
            out: &mut String,
        ) {
            let Some(value) = tree.value(index) else {
                return;
            };
            let connector = if is_left { "└── " } else { "├── " };
            let marker = match order.iter().position(|&i| i == index) {
                Some(pos) if visited > 0 && pos == visited - 1 => " ●",
                Some(pos) if pos < visited => " ✓",
                _ => "",
            };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&value.to_string());
            out.push_str(marker);
            out.push('\n');

            let child_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
            if tree.exists(LevelTree::right(index)) {
                walk(
                    tree,
                    LevelTree::right(index),
                    &child_prefix,
                    false,
                    order,
                    visited,
                    out,
                );
            }
            if tree.exists(LevelTree::left(index)) {
                walk(
                    tree,
                    LevelTree::left(index),
                    &child_prefix,
                    true,
                    order,
                    visited,
                    out,
                );
            }
        }
        let mut out = String::new();
        walk(self, 0, "", true, order, visited, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(slots: &[Option<i64>]) -> LevelTree {
        LevelTree::from_slots(slots.to_vec())
    }

    fn full_seven() -> LevelTree {
        tree(&[
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
        ])
    }

    fn values(tree: &LevelTree, order: &[usize]) -> Vec<i64> {
        order.iter().map(|&i| tree.value(i).unwrap()).collect()
    }

    #[test]
    fn traversal_orders_on_full_tree() {
        let t = full_seven();
        assert_eq!(values(&t, &t.preorder()), vec![1, 2, 4, 5, 3, 6, 7]);
        assert_eq!(values(&t, &t.inorder()), vec![4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(values(&t, &t.postorder()), vec![4, 5, 2, 6, 7, 3, 1]);
        assert_eq!(values(&t, &t.level_order()), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn every_traversal_visits_each_reachable_node_once() {
        let t = tree(&[Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(7)]);
        for kind in [
            TraversalKind::Preorder,
            TraversalKind::Inorder,
            TraversalKind::Postorder,
            TraversalKind::Bfs,
            TraversalKind::Dfs,
        ] {
            let mut order = kind.order(&t);
            assert_eq!(order.len(), t.node_count());
            order.sort_unstable();
            order.dedup();
            assert_eq!(order.len(), t.node_count(), "{:?} revisited a node", kind);
        }
    }

    #[test]
    fn holes_cut_off_subtrees() {
        // Index 5 is a hole, so its children at 11/12 are unreachable
        // even though slot 11 holds a value.
        let mut slots = vec![Some(1), Some(2), Some(3), None, None, None, None];
        slots.extend([None, None, None, None, Some(99)]);
        let t = tree(&slots);
        assert_eq!(values(&t, &t.preorder()), vec![1, 2, 3]);
        assert_eq!(t.height(), 2);
    }

    #[test]
    fn empty_and_null_root() {
        assert!(tree(&[]).is_empty());
        assert!(tree(&[None, Some(2)]).is_empty());
        assert_eq!(tree(&[]).level_order(), Vec::<usize>::new());
    }

    #[test]
    fn ascii_render_marks_visited_and_current() {
        let t = tree(&[Some(1), Some(2), Some(3)]);
        let order = t.preorder();
        let text = t.render_ascii(&order, 2);
        assert!(text.contains("1 ✓"));
        assert!(text.contains("2 ●"));
        assert!(text.contains('3'));
        assert!(!text.contains("3 ✓"));
    }
}
