//! Capacity-bounded LIFO used to sequence turn phases.
//!
//! The stack grows on demand but refuses pushes beyond its configured
//! capacity. Popping an empty stack is a no-op; only [`BoundedStack::top`]
//! reports emptiness as an error.

/// Capacity and underflow conditions of a [`BoundedStack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackError {
    #[error("stack is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("stack is empty")]
    Empty,
}

/// LIFO with an explicit capacity bound.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes `value`, failing with [`StackError::Full`] at capacity.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.items.len() >= self.capacity {
            return Err(StackError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes the top element if there is one.
    pub fn pop(&mut self) {
        self.items.pop();
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_top_follow_lifo_order() {
        let mut stack = BoundedStack::with_capacity(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.top(), Ok(&2));
        stack.pop();
        assert_eq!(stack.top(), Ok(&1));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_beyond_capacity_fails() {
        let mut stack = BoundedStack::with_capacity(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.push('c'), Err(StackError::Full { capacity: 2 }));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn pop_on_empty_is_a_no_op() {
        let mut stack: BoundedStack<u8> = BoundedStack::with_capacity(1);
        stack.pop();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), Err(StackError::Empty));
    }
}
