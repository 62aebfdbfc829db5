use core::fmt::Debug;

use cfg_if::cfg_if;

use crate::{
    Value,
    components::{self, Buffer},
    error::{Error, Result},
    trace::{debug, trace},
    utils::{next, prev, wrap},
};

/// Fixed-capacity FIFO queue of [`Value`]s, stack allocated.
///
/// `N` must be at least 1; `HeaplessQueue::<0>::new()` fails to compile.
pub struct HeaplessQueue<const N: usize>(RingQueue<components::HeaplessBuf<N, Value>>);

pub(crate) struct RingQueue<B: Buffer<Value>> {
    /// The buffer of the queue. Its length is the capacity.
    buffer: B,
    /// Slot of the next value to dequeue.
    ///
    /// Only meaningful while `len > 0`.
    front: usize,
    /// Slot of the most recently enqueued value.
    ///
    /// Starts one slot behind `front`, so the first enqueue lands on slot 0.
    rear: usize,
    /// Number of live values, `0..=capacity`.
    len: usize,
}

impl<B: Buffer<Value>> RingQueue<B> {
    /// `buffer` must hold at least one slot.
    fn new_in(buffer: B) -> Self {
        debug_assert!(buffer.len() > 0, "ring buffer without slots");
        let rear = prev(0, buffer.len());
        Self {
            buffer,
            front: 0,
            rear,
            len: 0,
        }
    }

    fn enqueue(&mut self, value: Value) -> Result<()> {
        if self.is_full() {
            debug!(value, capacity = self.capacity(), "queue is full, rejecting value");
            return Err(Error::QueueFull);
        }
        self.rear = next(self.rear, self.capacity());
        self.buffer.inner_mut()[self.rear] = value;
        self.len += 1;
        trace!(value, slot = self.rear, len = self.len, "enqueued");
        Ok(())
    }

    fn dequeue(&mut self) -> Result<Value> {
        if self.is_empty() {
            debug!("queue is empty, nothing to dequeue");
            return Err(Error::QueueEmpty);
        }
        let value = self.buffer.inner()[self.front];
        self.front = next(self.front, self.capacity());
        self.len -= 1;
        trace!(value, len = self.len, "dequeued");
        Ok(value)
    }

    fn peek(&self) -> Option<Value> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer.inner()[self.front])
        }
    }

    fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        let slots = self.buffer.inner();
        (0..self.len).map(move |i| slots[wrap(self.front, i, slots.len())])
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

impl<const N: usize> HeaplessQueue<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "HeaplessQueue needs a capacity of at least 1") };
        Self(RingQueue::new_in(components::HeaplessBuf::new()))
    }

    /// Appends `value` at the rear.
    /// Fails with [`Error::QueueFull`] if all `N` slots are taken.
    pub fn enqueue(&mut self, value: Value) -> Result<()> {
        self.0.enqueue(value)
    }

    /// Removes the value at the front.
    /// Fails with [`Error::QueueEmpty`] if there is none.
    pub fn dequeue(&mut self) -> Result<Value> {
        self.0.dequeue()
    }

    /// Returns the value [`dequeue`](Self::dequeue) would produce next.
    pub fn peek(&self) -> Option<Value> {
        self.0.peek()
    }

    /// Iterates over the live values, front to rear.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter()
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

impl<const N: usize> Default for HeaplessQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Debug for HeaplessQueue<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

cfg_if! {
    if #[cfg(feature = "alloc")] {
        /// Fixed-capacity FIFO queue of [`Value`]s over a single heap allocation.
        ///
        /// The capacity is chosen at runtime and never changes. Slots freed by
        /// [`dequeue`](Self::dequeue) are reused circularly.
        pub struct BoundedQueue(RingQueue<components::FixedBuf<Value>>);

        impl BoundedQueue {
            /// Creates an empty queue holding at most `capacity` values.
            ///
            /// Fails with [`Error::InvalidCapacity`] if `capacity` is 0.
            pub fn new(capacity: usize) -> Result<Self> {
                if capacity == 0 {
                    debug!("refusing to create a queue without capacity");
                    return Err(Error::InvalidCapacity);
                }
                Ok(Self(RingQueue::new_in(components::FixedBuf::new(capacity))))
            }

            /// Appends `value` at the rear.
            /// Fails with [`Error::QueueFull`] if the queue holds `capacity` values;
            /// the queue is left untouched in that case.
            pub fn enqueue(&mut self, value: Value) -> Result<()> {
                self.0.enqueue(value)
            }

            /// Removes the value at the front.
            /// Fails with [`Error::QueueEmpty`] if there is none.
            pub fn dequeue(&mut self) -> Result<Value> {
                self.0.dequeue()
            }

            /// Returns the value [`dequeue`](Self::dequeue) would produce next.
            pub fn peek(&self) -> Option<Value> {
                self.0.peek()
            }

            /// Iterates over the live values, front to rear.
            pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
                self.0.iter()
            }

            pub fn capacity(&self) -> usize {
                self.0.capacity()
            }

            /// Number of values currently queued.
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

        impl Debug for BoundedQueue {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }
    }
}
