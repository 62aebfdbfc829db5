/// Index following `i` in a ring of `size` slots.
pub(crate) fn next(i: usize, size: usize) -> usize {
    (i + 1) % size
}

/// Index preceding `i` in a ring of `size` slots.
pub(crate) fn prev(i: usize, size: usize) -> usize {
    (i + size - 1) % size
}

/// Physical slot of the `offset`-th live element counted from `front`.
pub(crate) fn wrap(front: usize, offset: usize, size: usize) -> usize {
    (front + offset) % size
}
