//! Stack & Queue Demos
//!
//! LIFO/FIFO models with the status lines the screens display. The
//! selected index is the slot to highlight after the operation.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    pub status: String,
    pub selected: Option<usize>,
}

impl OpResult {
    fn new(status: impl Into<String>, selected: Option<usize>) -> Self {
        Self {
            status: status.into(),
            selected,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    items: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: i64) -> OpResult {
        self.items.push(value);
        OpResult::new(
            format!("Pushed {value} onto the stack"),
            Some(self.items.len() - 1),
        )
    }

    pub fn pop(&mut self) -> OpResult {
        match self.items.pop() {
            Some(value) => OpResult::new(format!("Popped {value} from the stack"), None),
            None => OpResult::new("Stack is empty. Cannot pop.", None),
        }
    }

    pub fn peek(&self) -> OpResult {
        match self.items.last() {
            Some(value) => OpResult::new(
                format!("Top element is {value}"),
                Some(self.items.len() - 1),
            ),
            None => OpResult::new("Stack is empty.", None),
        }
    }

    pub fn clear(&mut self) -> OpResult {
        if self.items.is_empty() {
            return OpResult::new("Stack is already empty", None);
        }
        self.items.clear();
        OpResult::new("Stack cleared", None)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    items: VecDeque<i64>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> impl Iterator<Item = &i64> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enqueue(&mut self, value: i64) -> OpResult {
        self.items.push_back(value);
        OpResult::new(
            format!("Enqueued {value} to the rear"),
            Some(self.items.len() - 1),
        )
    }

    pub fn dequeue(&mut self) -> OpResult {
        match self.items.pop_front() {
            Some(value) => OpResult::new(format!("Dequeued {value} from the front"), None),
            None => OpResult::new("Queue is empty. Cannot dequeue.", None),
        }
    }

    pub fn front(&self) -> OpResult {
        match self.items.front() {
            Some(value) => OpResult::new(format!("Front element is {value}"), Some(0)),
            None => OpResult::new("Queue is empty.", None),
        }
    }

    pub fn clear(&mut self) -> OpResult {
        if self.items.is_empty() {
            return OpResult::new("Queue is already empty", None);
        }
        self.items.clear();
        OpResult::new("Queue cleared", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        let pushed = stack.push(2);
        assert_eq!(pushed.selected, Some(1));
        assert_eq!(stack.peek().status, "Top element is 2");
        assert_eq!(stack.pop().status, "Popped 2 from the stack");
        assert_eq!(stack.pop().status, "Popped 1 from the stack");
        assert_eq!(stack.pop().status, "Stack is empty. Cannot pop.");
    }

    #[test]
    fn stack_clear_messages() {
        let mut stack = Stack::new();
        assert_eq!(stack.clear().status, "Stack is already empty");
        stack.push(5);
        assert_eq!(stack.clear().status, "Stack cleared");
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.front().status, "Front element is 1");
        assert_eq!(queue.dequeue().status, "Dequeued 1 from the front");
        assert_eq!(queue.dequeue().status, "Dequeued 2 from the front");
        assert_eq!(queue.dequeue().status, "Queue is empty. Cannot dequeue.");
        assert_eq!(queue.front().status, "Queue is empty.");
    }

    #[test]
    fn queue_clear_messages() {
        let mut queue = Queue::new();
        assert_eq!(queue.clear().status, "Queue is already empty");
        queue.enqueue(1);
        assert_eq!(queue.clear().status, "Queue cleared");
        assert_eq!(queue.len(), 0);
    }
}
