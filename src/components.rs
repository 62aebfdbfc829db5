use ::core::array;
#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use crate::{Priority, Value};

/// Fixed-length storage backing a container.
///
/// The length never changes after construction; containers track which
/// slots are live themselves.
pub(crate) trait Buffer<E> {
    fn len(&self) -> usize;
    fn inner(&self) -> &[E];
    fn inner_mut(&mut self) -> &mut [E];
}

pub(crate) struct HeaplessBuf<const N: usize, E> {
    inner: [E; N],
}

impl<const N: usize, E: Default> HeaplessBuf<N, E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: array::from_fn(|_| E::default()),
        }
    }
}

impl<const N: usize, E> Buffer<E> for HeaplessBuf<N, E> {
    fn len(&self) -> usize {
        N
    }

    fn inner(&self) -> &[E] {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut [E] {
        &mut self.inner
    }
}

/// A single heap allocation sized at runtime.
#[cfg(feature = "alloc")]
pub(crate) struct FixedBuf<E> {
    inner: Box<[E]>,
}

#[cfg(feature = "alloc")]
impl<E: Default> FixedBuf<E> {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            inner: (0..size).map(|_| E::default()).collect(),
        }
    }
}

#[cfg(feature = "alloc")]
impl<E> Buffer<E> for FixedBuf<E> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn inner(&self) -> &[E] {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut [E] {
        &mut self.inner
    }
}

/// A value together with the priority it was enqueued with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub value: Value,
    pub priority: Priority,
}

impl Entry {
    pub const fn new(value: Value, priority: Priority) -> Self {
        Self { value, priority }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heapless_len() {
        let buf: HeaplessBuf<4, Value> = HeaplessBuf::new();
        assert_eq!(buf.len(), 4);
        assert!(buf.inner().iter().all(|v| *v == 0));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn fixed_len() {
        let mut buf: FixedBuf<Entry> = FixedBuf::new(3);
        assert_eq!(buf.len(), 3);
        buf.inner_mut()[2] = Entry::new(7, 1);
        assert_eq!(buf.inner()[2], Entry::new(7, 1));
        assert_eq!(buf.inner()[0], Entry::default());
    }
}
