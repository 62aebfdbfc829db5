use core::fmt::Debug;

use cfg_if::cfg_if;

use crate::{
    Priority, Value,
    components::{self, Buffer, Entry},
    error::{Error, Result},
    trace::{debug, trace},
};

/// Fixed-capacity priority queue, stack allocated.
///
/// `N` must be at least 1; `HeaplessPriorityQueue::<0>::new()` fails to compile.
pub struct HeaplessPriorityQueue<const N: usize>(
    SortedQueue<components::HeaplessBuf<N, Entry>>,
);

/// Entries kept in slots `0..len`, highest priority first.
///
/// Entries of equal priority stay in insertion order, so the front is always
/// the earliest of the highest-priority entries.
pub(crate) struct SortedQueue<B: Buffer<Entry>> {
    buffer: B,
    len: usize,
}

impl<B: Buffer<Entry>> SortedQueue<B> {
    fn new_in(buffer: B) -> Self {
        Self { buffer, len: 0 }
    }

    fn enqueue(&mut self, value: Value, priority: Priority) -> Result<()> {
        if self.is_full() {
            debug!(
                value,
                priority,
                capacity = self.capacity(),
                "priority queue is full, rejecting value"
            );
            return Err(Error::QueueFull);
        }
        let slots = self.buffer.inner_mut();
        let mut i = self.len;
        slots[i] = Entry::new(value, priority);
        self.len += 1;

        // strictly greater only: equal priorities never pass each other
        while i > 0 && slots[i].priority > slots[i - 1].priority {
            slots.swap(i, i - 1);
            i -= 1;
        }
        trace!(value, priority, position = i, len = self.len, "enqueued");
        Ok(())
    }

    fn dequeue(&mut self) -> Result<Value> {
        if self.is_empty() {
            debug!("priority queue is empty, nothing to dequeue");
            return Err(Error::QueueEmpty);
        }
        let live = &mut self.buffer.inner_mut()[..self.len];
        let head = live[0];
        live.copy_within(1.., 0);
        self.len -= 1;
        trace!(
            value = head.value,
            priority = head.priority,
            len = self.len,
            "dequeued"
        );
        Ok(head.value)
    }

    fn peek(&self) -> Option<Entry> {
        self.entries().first().copied()
    }

    fn entries(&self) -> &[Entry] {
        &self.buffer.inner()[..self.len]
    }

    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
}

impl<const N: usize> HeaplessPriorityQueue<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "HeaplessPriorityQueue needs a capacity of at least 1") };
        Self(SortedQueue::new_in(components::HeaplessBuf::new()))
    }

    /// Inserts `value` behind every entry with a priority of at least `priority`.
    /// Fails with [`Error::QueueFull`] if all `N` slots are taken.
    pub fn enqueue(&mut self, value: Value, priority: Priority) -> Result<()> {
        self.0.enqueue(value, priority)
    }

    /// Removes the value of the front entry.
    /// Fails with [`Error::QueueEmpty`] if there is none.
    pub fn dequeue(&mut self) -> Result<Value> {
        self.0.dequeue()
    }

    /// Returns the entry [`dequeue`](Self::dequeue) would remove next.
    pub fn peek(&self) -> Option<Entry> {
        self.0.peek()
    }

    /// Iterates over the entries in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.0.entries().iter().copied()
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.is_full()
    }
}

impl<const N: usize> Default for HeaplessPriorityQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Debug for HeaplessPriorityQueue<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.entries()).finish()
    }
}

cfg_if! {
    if #[cfg(feature = "alloc")] {
        /// Fixed-capacity priority queue over a single heap allocation.
        ///
        /// Higher priorities dequeue first; equal priorities dequeue in the
        /// order they were enqueued. A full queue rejects new entries whatever
        /// their priority, nothing is ever evicted.
        ///
        /// Insertion and removal are both O(len).
        pub struct BoundedPriorityQueue(SortedQueue<components::FixedBuf<Entry>>);

        impl BoundedPriorityQueue {
            /// Creates an empty priority queue holding at most `capacity` entries.
            ///
            /// Fails with [`Error::InvalidCapacity`] if `capacity` is 0.
            pub fn new(capacity: usize) -> Result<Self> {
                if capacity == 0 {
                    debug!("refusing to create a priority queue without capacity");
                    return Err(Error::InvalidCapacity);
                }
                Ok(Self(SortedQueue::new_in(components::FixedBuf::new(capacity))))
            }

            /// Inserts `value` behind every entry with a priority of at least `priority`.
            /// Fails with [`Error::QueueFull`] if the queue holds `capacity` entries;
            /// the queue is left untouched in that case.
            pub fn enqueue(&mut self, value: Value, priority: Priority) -> Result<()> {
                self.0.enqueue(value, priority)
            }

            /// Removes the value of the front entry.
            /// Fails with [`Error::QueueEmpty`] if there is none.
            pub fn dequeue(&mut self) -> Result<Value> {
                self.0.dequeue()
            }

            /// Returns the entry [`dequeue`](Self::dequeue) would remove next.
            pub fn peek(&self) -> Option<Entry> {
                self.0.peek()
            }

            /// Iterates over the entries in dequeue order.
            pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
                self.0.entries().iter().copied()
            }

            pub fn capacity(&self) -> usize {
                self.0.capacity()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn is_full(&self) -> bool {
                self.0.is_full()
            }
        }

        impl Debug for BoundedPriorityQueue {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.0.entries()).finish()
            }
        }
    }
}
