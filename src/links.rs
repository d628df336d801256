//! Circular doubly linked lists threaded through a slice by index.

/// A pair of neighbor indices. For item headers `prev`/`next` are left/right, for cells they are
/// up/down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DoubleIndexLink {
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl DoubleIndexLink {
    /// A link pointing back at `index` in both directions, i.e. a list of one.
    pub(crate) const fn to_self(index: usize) -> Self {
        Self {
            prev: index,
            next: index,
        }
    }
}

/// Nodes that carry a [`DoubleIndexLink`].
pub(crate) trait Linked {
    fn link(&self) -> &DoubleIndexLink;
    fn link_mut(&mut self) -> &mut DoubleIndexLink;
}

/// Dancing links on a slice: removing a node leaves its own links intact so that restoring it in
/// LIFO order is exact.
pub(crate) trait DoubleIndexLinkedList {
    fn remove_links(&mut self, target: usize);
    fn restore_links(&mut self, target: usize);
    fn is_removed(&self, target: usize) -> bool;
}

impl<T: Linked> DoubleIndexLinkedList for [T] {
    fn remove_links(&mut self, target: usize) {
        let DoubleIndexLink { prev, next } = *self[target].link();
        self[prev].link_mut().next = next;
        self[next].link_mut().prev = prev;
    }

    fn restore_links(&mut self, target: usize) {
        let DoubleIndexLink { prev, next } = *self[target].link();
        self[prev].link_mut().next = target;
        self[next].link_mut().prev = target;
    }

    fn is_removed(&self, target: usize) -> bool {
        let DoubleIndexLink { prev, next } = *self[target].link();
        !(self[prev].link().next == target && self[next].link().prev == target)
    }
}

/// Walks a circular list forward from the node after `head` until it returns to `head`.
pub(crate) struct LinkIterator<'a, T> {
    list: &'a [T],
    head: usize,
    cursor: usize,
}

impl<'a, T: Linked> LinkIterator<'a, T> {
    pub(crate) fn from_slice(slice: &'a [T], head: usize) -> Self {
        Self {
            list: slice,
            head,
            cursor: slice[head].link().next,
        }
    }
}

impl<T: Linked> Iterator for LinkIterator<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.cursor).filter(|&c| c != self.head).map(|c| {
            self.cursor = self.list[c].link().next;
            c
        })
    }
}
