// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ascending-priority open list shared by both searches.
//!
//! Unlike `std::collections::BinaryHeap`, the order between equal priorities
//! is fixed: a new element goes in front of the first strictly greater one,
//! so ties pop in arrival order. Both searches depend on that to stay
//! deterministic. Insertion is O(n), which is fine for open lists of a few
//! thousand entries.

use std::collections::VecDeque;

/// Sorted queue keyed by a caller-supplied priority function.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    items: VecDeque<T>,
    priority: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    pub fn new(priority: F) -> Self {
        Self {
            items: VecDeque::new(),
            priority,
        }
    }

    /// Insert `item` after every element whose priority is `<=` its own.
    pub fn push(&mut self, item: T) {
        let p = (self.priority)(&item);
        let at = self.items.partition_point(|e| (self.priority)(e) <= p);
        self.items.insert(at, item);
    }

    /// Remove the lowest-priority element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in pop order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T) -> f64,
{
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Replace the element equal to `item` and move it to its new position.
    ///
    /// Returns `false` (and inserts nothing) when no equal element is queued.
    pub fn update_priority(&mut self, item: T) -> bool {
        let Some(pos) = self.items.iter().position(|e| *e == item) else {
            return false;
        };
        self.items.remove(pos);
        self.push(item);
        true
    }
}

impl<T: std::fmt::Debug, F: Fn(&T) -> f64> std::fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut q = PriorityQueue::new(|v: &f64| *v);
        for v in [3.0, 1.0, 2.0, 0.5] {
            q.push(v);
        }
        assert_eq!(q.len(), 4);
        assert_eq!(q.peek(), Some(&0.5));
        let popped: Vec<f64> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(popped, vec![0.5, 1.0, 2.0, 3.0]);
        assert!(q.pop().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn ties_keep_arrival_order() {
        let mut q = PriorityQueue::new(|e: &(u32, f64)| e.1);
        q.push((1, 1.0));
        q.push((2, 0.0));
        q.push((3, 1.0));
        q.push((4, 1.0));
        let ids: Vec<u32> = q.iter().map(|e| e.0).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[derive(Debug, Clone, Copy)]
    struct Entry {
        id: u32,
        f: f64,
    }

    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    #[test]
    fn update_priority_moves_the_entry() {
        let mut q = PriorityQueue::new(|e: &Entry| e.f);
        q.push(Entry { id: 1, f: 1.0 });
        q.push(Entry { id: 2, f: 2.0 });
        q.push(Entry { id: 3, f: 3.0 });

        assert!(q.contains(&Entry { id: 3, f: 0.0 }));
        assert!(q.update_priority(Entry { id: 3, f: 0.5 }));
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop().map(|e| e.id), Some(3));

        assert!(!q.update_priority(Entry { id: 9, f: 0.0 }));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn reprioritized_entry_goes_behind_equal_ones() {
        let mut q = PriorityQueue::new(|e: &Entry| e.f);
        q.push(Entry { id: 1, f: 5.0 });
        q.push(Entry { id: 2, f: 1.0 });
        q.update_priority(Entry { id: 1, f: 1.0 });
        let ids: Vec<u32> = q.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
