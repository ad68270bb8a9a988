//! Linked List Demos
//!
//! One model behind the four linked-list screens. The demos visualize a
//! node sequence with pointer arrows; the model keeps the nodes in a
//! `Vec` with stable ids and the `ListKind` decides how the screen draws
//! the links (direction arrows, wrap-around). Operations return the
//! status line the screen shows plus the node to highlight.

/// Which linked-list variant a screen demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Singly,
    Doubly,
    CircularSingly,
    CircularDoubly,
}

impl ListKind {
    pub fn title(self) -> &'static str {
        match self {
            ListKind::Singly => "Singly Linked List",
            ListKind::Doubly => "Doubly Linked List",
            ListKind::CircularSingly => "Circular Singly Linked List",
            ListKind::CircularDoubly => "Circular Doubly Linked List",
        }
    }

    /// Nodes carry a back pointer.
    pub fn is_doubly(self) -> bool {
        matches!(self, ListKind::Doubly | ListKind::CircularDoubly)
    }

    /// Tail links back to head.
    pub fn is_circular(self) -> bool {
        matches!(self, ListKind::CircularSingly | ListKind::CircularDoubly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode {
    pub id: u32,
    pub value: i64,
}

/// Result of a list operation: the status line plus the node to select.
#[derive(Debug, Clone, PartialEq)]
pub struct OpOutcome {
    pub status: String,
    pub selected: Option<u32>,
}

impl OpOutcome {
    fn new(status: impl Into<String>, selected: Option<u32>) -> Self {
        Self {
            status: status.into(),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedList {
    kind: ListKind,
    nodes: Vec<ListNode>,
    next_id: u32,
}

impl LinkedList {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn fresh_node(&mut self, value: i64) -> ListNode {
        let node = ListNode {
            id: self.next_id,
            value,
        };
        self.next_id += 1;
        node
    }

    pub fn insert_front(&mut self, value: i64) -> OpOutcome {
        let node = self.fresh_node(value);
        self.nodes.insert(0, node);
        OpOutcome::new(format!("Inserted {value} at beginning"), Some(node.id))
    }

    pub fn insert_back(&mut self, value: i64) -> OpOutcome {
        let node = self.fresh_node(value);
        let was_empty = self.nodes.is_empty();
        self.nodes.push(node);
        let status = if was_empty {
            format!("Inserted {value} as head")
        } else {
            format!("Inserted {value} at end")
        };
        OpOutcome::new(status, Some(node.id))
    }

    /// Insert before the node currently at `position`. Position 0 is an
    /// insert at the beginning; inserting into an empty list or past the
    /// tail is rejected, as the demos reject it.
    pub fn insert_at(&mut self, value: i64, position: usize) -> Result<OpOutcome, String> {
        if position == 0 {
            return Ok(self.insert_front(value));
        }
        if self.nodes.is_empty() {
            return Err("List is empty, cannot insert at position".to_string());
        }
        if position > self.nodes.len() {
            return Err("Position exceeds list length".to_string());
        }
        let node = self.fresh_node(value);
        self.nodes.insert(position, node);
        Ok(OpOutcome::new(
            format!("Inserted {value} at position {position}"),
            Some(node.id),
        ))
    }

    /// Delete the first node holding `value`.
    pub fn delete_value(&mut self, value: i64) -> OpOutcome {
        if self.nodes.is_empty() {
            return OpOutcome::new("List is empty", None);
        }
        match self.nodes.iter().position(|n| n.value == value) {
            Some(0) => {
                self.nodes.remove(0);
                OpOutcome::new(format!("Deleted head with value {value}"), None)
            }
            Some(pos) => {
                self.nodes.remove(pos);
                OpOutcome::new(format!("Deleted node with value {value}"), None)
            }
            None => OpOutcome::new(format!("Value {value} not found"), None),
        }
    }

    pub fn search(&self, value: i64) -> OpOutcome {
        if self.nodes.is_empty() {
            return OpOutcome::new("List is empty", None);
        }
        match self.nodes.iter().position(|n| n.value == value) {
            Some(pos) => OpOutcome::new(
                format!("Found {value} at position {pos}"),
                Some(self.nodes[pos].id),
            ),
            None => OpOutcome::new(format!("Value {value} not found"), None),
        }
    }

    pub fn clear(&mut self) -> OpOutcome {
        self.nodes.clear();
        OpOutcome::new("Cleared the list", None)
    }

    /// Node ids in traversal order. Backward traversal is only offered by
    /// the doubly variants; for circular lists the order is a single full
    /// lap starting at the head (or the tail when walking backward).
    pub fn traversal_ids(&self, forward: bool) -> Vec<u32> {
        if forward || !self.kind.is_doubly() {
            self.nodes.iter().map(|n| n.id).collect()
        } else {
            self.nodes.iter().rev().map(|n| n.id).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &LinkedList) -> Vec<i64> {
        list.nodes().iter().map(|n| n.value).collect()
    }

    #[test]
    fn inserts_at_both_ends() {
        let mut list = LinkedList::new(ListKind::Singly);
        assert_eq!(list.insert_back(1).status, "Inserted 1 as head");
        list.insert_back(2);
        list.insert_front(0);
        assert_eq!(values(&list), vec![0, 1, 2]);
    }

    #[test]
    fn insert_at_position() {
        let mut list = LinkedList::new(ListKind::Doubly);
        list.insert_back(1);
        list.insert_back(3);
        let outcome = list.insert_at(2, 1).unwrap();
        assert_eq!(outcome.status, "Inserted 2 at position 1");
        assert_eq!(values(&list), vec![1, 2, 3]);

        // Position 0 falls back to an insert at the beginning.
        assert_eq!(
            list.insert_at(9, 0).unwrap().status,
            "Inserted 9 at beginning"
        );
        assert!(list.insert_at(5, 99).is_err());
    }

    #[test]
    fn insert_at_rejects_empty_list() {
        let mut list = LinkedList::new(ListKind::CircularSingly);
        assert!(list.insert_at(1, 2).is_err());
    }

    #[test]
    fn delete_head_and_middle() {
        let mut list = LinkedList::new(ListKind::Singly);
        for v in [1, 2, 3] {
            list.insert_back(v);
        }
        assert_eq!(list.delete_value(1).status, "Deleted head with value 1");
        assert_eq!(list.delete_value(3).status, "Deleted node with value 3");
        assert_eq!(list.delete_value(42).status, "Value 42 not found");
        assert_eq!(values(&list), vec![2]);
        list.clear();
        assert_eq!(list.delete_value(2).status, "List is empty");
    }

    #[test]
    fn search_reports_position() {
        let mut list = LinkedList::new(ListKind::CircularDoubly);
        for v in [10, 20, 30] {
            list.insert_back(v);
        }
        let outcome = list.search(30);
        assert_eq!(outcome.status, "Found 30 at position 2");
        assert_eq!(outcome.selected, Some(list.nodes()[2].id));
        assert_eq!(list.search(99).selected, None);
    }

    #[test]
    fn backward_traversal_only_for_doubly() {
        let mut doubly = LinkedList::new(ListKind::Doubly);
        let mut singly = LinkedList::new(ListKind::Singly);
        for v in [1, 2, 3] {
            doubly.insert_back(v);
            singly.insert_back(v);
        }
        let forward = doubly.traversal_ids(true);
        let mut backward = doubly.traversal_ids(false);
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(singly.traversal_ids(false), singly.traversal_ids(true));
    }

    #[test]
    fn ids_stay_unique_across_operations() {
        let mut list = LinkedList::new(ListKind::Singly);
        list.insert_back(1);
        list.insert_back(2);
        list.delete_value(1);
        list.insert_front(3);
        let mut ids: Vec<u32> = list.nodes().iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }
}
