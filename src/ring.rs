//! Singly-linked sequence container with owned nodes.
//!
//! The ring owns a forward-linked chain of heap nodes and tracks head,
//! tail, and length. One link per node keeps both-end insertion and
//! front removal O(1) and makes whole-container concatenation free of
//! per-element work. The missing backward links are the trade: back
//! removal and positional access walk the chain.
//!
//! # Example
//!
//! ```
//! use ringlist::Ring;
//!
//! let mut ring = Ring::new();
//! ring.push_back(1);
//! ring.push_back(2);
//! ring.push_front(0);
//!
//! assert_eq!(ring.len(), 3);
//! assert_eq!(ring.pop_front(), Some(0));
//!
//! let values: Vec<_> = ring.iter().copied().collect();
//! assert_eq!(values, vec![1, 2]);
//! ```
//!
//! # Whole-container operations
//!
//! [`Ring::concat`] splices two rings in O(1) by taking both by value,
//! [`Ring::remove_matching`] partitions a ring with a predicate, and
//! [`Ring::distribute`] deals elements round-robin into fresh rings.
//!
//! ```
//! use ringlist::Ring;
//!
//! let left: Ring<_> = (0..3).collect();
//! let right: Ring<_> = (3..6).collect();
//!
//! let merged = left.concat(right);
//! let values: Vec<_> = merged.into_iter().collect();
//! assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{InvariantError, OutOfBounds};

/// A link in the chain. The `next` pointer owns the rest of the chain;
/// nodes are released one at a time through `Box::from_raw`.
struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Heap-allocates a node linking to `next`.
    fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

/// A singly-linked sequence with O(1) access to both ends.
///
/// The ring keeps a head link, a tail link, and an element count. The
/// single forward link per node buys O(1) `push_front`/`push_back`/
/// `pop_front` and O(1) [`concat`](Self::concat), at the price of O(n)
/// back removal and O(index) positional access.
///
/// # Complexity
///
/// | Operation | Cost |
/// |-----------|------|
/// | [`push_front`](Self::push_front), [`push_back`](Self::push_back), [`pop_front`](Self::pop_front) | O(1) |
/// | [`front`](Self::front), [`back`](Self::back) | O(1) |
/// | [`concat`](Self::concat) | O(1) |
/// | [`pop_back`](Self::pop_back) | O(n) |
/// | [`get`](Self::get), [`remove`](Self::remove), [`try_insert`](Self::try_insert) | O(index) |
/// | [`remove_matching`](Self::remove_matching), [`distribute`](Self::distribute) | O(n) |
///
/// # Example
///
/// ```
/// use ringlist::Ring;
///
/// let mut queue: Ring<&str> = Ring::new();
/// queue.push_back("first");
/// queue.push_back("second");
///
/// assert_eq!(queue.front(), Some(&"first"));
/// assert_eq!(queue.pop_front(), Some("first"));
/// assert_eq!(queue.pop_front(), Some("second"));
/// assert_eq!(queue.pop_front(), None);
/// ```
pub struct Ring<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// Safety: the ring exclusively owns its nodes, so moving it across threads
// moves sole access to every element with it
unsafe impl<T: Send> Send for Ring<T> {}

// Safety: shared access only hands out &T
unsafe impl<T: Sync> Sync for Ring<T> {}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T> {
    // ========================================================================
    // Construction and length
    // ========================================================================

    /// Creates an empty ring.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the ring.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // Front and back access
    // ========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // Safety: head is owned by this ring for the borrow's duration
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // Safety: head is owned by this ring for the borrow's duration
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // Safety: tail is owned by this ring for the borrow's duration
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // Safety: tail is owned by this ring for the borrow's duration
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    // ========================================================================
    // End mutators
    // ========================================================================

    /// Inserts `value` as the new front element. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Inserts `value` as the new back element. O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            // Safety: tail is the terminal node of the owned chain
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    ///
    /// Returns `None` if the ring is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // Safety: head was allocated by this ring and is unlinked here
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Removes and returns the back element, or `None` if the ring is
    /// empty.
    ///
    /// This walks the whole chain to find the second-to-last node: with
    /// forward links only, back removal is O(n). Callers popping from the
    /// back in a loop want a different structure (`VecDeque` keeps both
    /// ends O(1)).
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            // Safety: len >= 2, so the second-to-last node exists
            let prev = unsafe { self.node_at(self.len - 2).unwrap_unchecked() };
            // Safety: prev is on the owned chain
            unsafe { (*prev.as_ptr()).next = None };
            self.tail = Some(prev);
        }
        self.len -= 1;

        // Safety: the old tail is unlinked now and was allocated by this ring
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        Some(node.value)
    }

    // ========================================================================
    // Positional operations
    // ========================================================================

    /// Returns a reference to the element at `index`, counted from the
    /// front. O(index).
    ///
    /// Returns `None` if `index >= len`, including on an empty ring.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        // Safety: node_at only returns nodes owned by this ring
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // Safety: node_at only returns nodes owned by this ring
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Removes and returns the element at `index`, relinking the chain
    /// around it. O(index), with `index == 0` taking the O(1)
    /// [`pop_front`](Self::pop_front) path.
    ///
    /// Returns `None` if `index >= len`; the ring is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let mut ring: Ring<_> = [10, 11, 12].into_iter().collect();
    ///
    /// assert_eq!(ring.remove(1), Some(11));
    /// assert_eq!(ring.len(), 2);
    /// assert_eq!(ring.get(0), Some(&10));
    /// assert_eq!(ring.get(1), Some(&12));
    /// assert_eq!(ring.remove(5), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        // Safety: 0 < index < len, so the predecessor walk cannot miss
        let prev = unsafe { self.node_at(index - 1).unwrap_unchecked() };
        // Safety: index < len, so prev has a successor
        let victim = unsafe { (*prev.as_ptr()).next.unwrap_unchecked() };

        // Safety: relinking around victim detaches exactly one node
        unsafe {
            (*prev.as_ptr()).next = (*victim.as_ptr()).next;
        }
        if self.tail == Some(victim) {
            self.tail = Some(prev);
        }
        self.len -= 1;

        // Safety: victim is unlinked now and was allocated by this ring
        let node = unsafe { Box::from_raw(victim.as_ptr()) };
        Some(node.value)
    }

    /// Inserts `value` so it becomes the element at `index`. O(index).
    ///
    /// The valid range is `0..=len`; inserting at `len` appends. When
    /// `index > len` the ring is unchanged and the value comes back in
    /// the error.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let mut ring: Ring<&str> = Ring::new();
    /// assert!(ring.try_insert(0, "a").is_ok());
    /// assert!(ring.try_insert(1, "c").is_ok());
    /// assert!(ring.try_insert(1, "b").is_ok());
    ///
    /// let err = ring.try_insert(7, "x").unwrap_err();
    /// assert_eq!(err.into_inner(), "x");
    ///
    /// let values: Vec<_> = ring.into_iter().collect();
    /// assert_eq!(values, vec!["a", "b", "c"]);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds<T>> {
        if index > self.len {
            return Err(OutOfBounds {
                value,
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            // Safety: 0 < index < len, so the predecessor walk cannot miss
            let prev = unsafe { self.node_at(index - 1).unwrap_unchecked() };
            // Safety: the new node adopts prev's successor
            unsafe {
                let next = (*prev.as_ptr()).next;
                (*prev.as_ptr()).next = Some(Node::alloc(value, next));
            }
            self.len += 1;
        }

        Ok(())
    }

    /// Returns the node at `index`, or `None` when `index >= len`.
    /// O(index) walk from the head.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }

        // Safety: index < len, so the head exists and every node short of
        // the target has a successor
        let mut step = unsafe { self.head.unwrap_unchecked() };
        for _ in 0..index {
            step = unsafe { (*step.as_ptr()).next.unwrap_unchecked() };
        }
        Some(step)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Moves every element matching `pred` into a new ring, testing each
    /// element exactly once, front to back. O(n).
    ///
    /// Both rings keep their elements in the original relative order: the
    /// returned ring holds the matches, `self` keeps the rest. Leading
    /// matches come off through the O(1) pop path; the remainder is
    /// relinked in place.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let mut ring: Ring<i32> = (0..6).collect();
    /// let removed = ring.remove_matching(|&value| value % 2 == 0);
    ///
    /// let kept: Vec<_> = ring.into_iter().collect();
    /// let evens: Vec<_> = removed.into_iter().collect();
    /// assert_eq!(kept, vec![1, 3, 5]);
    /// assert_eq!(evens, vec![0, 2, 4]);
    /// ```
    pub fn remove_matching<F>(&mut self, mut pred: F) -> Ring<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = Ring::new();

        // Leading matches come off through the O(1) pop path.
        while self.front().is_some_and(|value| pred(value)) {
            if let Some(value) = self.pop_front() {
                removed.push_back(value);
            }
        }

        // The front element is kept now (or the ring is empty). Scan the
        // rest with a trailing link: the cursor stays put after a removal
        // so the node that slid into the removed slot is tested next.
        let mut step = self.head;
        while let Some(node) = step {
            // Safety: node is on the owned chain
            let next = unsafe { (*node.as_ptr()).next };
            let victim = match next {
                Some(victim) => victim,
                None => break,
            };

            // Safety: victim stays linked and alive during the predicate call
            if pred(unsafe { &(*victim.as_ptr()).value }) {
                // Safety: relinking around victim detaches exactly one node
                unsafe {
                    (*node.as_ptr()).next = (*victim.as_ptr()).next;
                }
                if self.tail == Some(victim) {
                    self.tail = Some(node);
                }
                self.len -= 1;

                // Safety: victim is unlinked now and was allocated by this ring
                let boxed = unsafe { Box::from_raw(victim.as_ptr()) };
                removed.push_back(boxed.value);
            } else {
                step = next;
            }
        }

        removed
    }

    /// Appends all of `other`'s elements after this ring's elements and
    /// returns the result. O(1).
    ///
    /// Both inputs are consumed; the merged ring is the only handle left.
    /// Either input may be empty, in which case the other is returned
    /// directly.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let left: Ring<_> = (1..5).collect();
    /// let right: Ring<_> = (5..9).collect();
    ///
    /// let merged = left.concat(right);
    /// assert_eq!(merged.len(), 8);
    ///
    /// let values: Vec<_> = merged.into_iter().collect();
    /// assert_eq!(values, (1..9).collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn concat(mut self, mut other: Self) -> Self {
        let tail = match self.tail {
            Some(tail) => tail,
            None => return other,
        };
        if other.is_empty() {
            return self;
        }

        // Safety: tail is the terminal node of the owned chain. Taking
        // other's links empties it, so its drop releases nothing.
        unsafe {
            (*tail.as_ptr()).next = other.head.take();
        }
        self.tail = other.tail.take();
        self.len += other.len;
        other.len = 0;

        self
    }

    /// Deals the elements round-robin into `buckets` fresh rings and
    /// returns a ring of those rings, in bucket order. O(n).
    ///
    /// The element at position `k` lands in bucket `k % buckets` at
    /// position `k / buckets`. Passing `0` is treated as one bucket. The
    /// source ring is consumed; its elements move into the buckets.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let ring: Ring<u32> = (0..8).collect();
    /// let mut buckets = ring.distribute(2);
    /// assert_eq!(buckets.len(), 2);
    ///
    /// let evens: Vec<_> = buckets.pop_front().unwrap().into_iter().collect();
    /// let odds: Vec<_> = buckets.pop_front().unwrap().into_iter().collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6]);
    /// assert_eq!(odds, vec![1, 3, 5, 7]);
    /// ```
    pub fn distribute(self, buckets: usize) -> Ring<Ring<T>> {
        let m = buckets.max(1);
        let mut parts: Vec<Ring<T>> = (0..m).map(|_| Ring::new()).collect();

        for (k, value) in self.into_iter().enumerate() {
            parts[k % m].push_back(value);
        }

        parts.into_iter().collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Walks the structure and reports the first inconsistency found, or
    /// `Ok(())`. O(n). Read-only; never panics.
    ///
    /// The checks, in order: an empty ring holds no links; a non-empty
    /// ring has both ends set and a terminal tail; the chain reachable
    /// from the head ends within `len` steps (a longer or cyclic chain
    /// fails the bound), counts exactly `len` nodes, and terminates at
    /// the tail.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let ring: Ring<_> = (0..4).collect();
    /// assert!(ring.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.len == 0 {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::EmptyWithLinks);
            }
            return Ok(());
        }

        let head = match self.head {
            Some(head) => head,
            None => return Err(InvariantError::MissingHead),
        };
        let tail = match self.tail {
            Some(tail) => tail,
            None => return Err(InvariantError::MissingTail),
        };

        // Safety: read-only deref of an owned node
        if unsafe { (*tail.as_ptr()).next }.is_some() {
            return Err(InvariantError::TailNotTerminal);
        }

        let mut walked = 1;
        let mut step = head;
        // Safety: the walk is read-only and gives up after len steps, so
        // it terminates even on a cyclic chain
        while let Some(next) = unsafe { (*step.as_ptr()).next } {
            walked += 1;
            if walked > self.len {
                return Err(InvariantError::ChainTooLong { len: self.len });
            }
            step = next;
        }

        if walked != self.len {
            return Err(InvariantError::LengthMismatch {
                len: self.len,
                walked,
            });
        }
        if step != tail {
            return Err(InvariantError::TailMismatch);
        }

        Ok(())
    }

    /// Fail-fast wrapper over [`validate`](Self::validate) for callers
    /// that prefer an abort-style policy, such as test harnesses.
    ///
    /// # Panics
    ///
    /// Panics with the diagnostic if the structure is inconsistent.
    pub fn assert_valid(&self) {
        if let Err(err) = self.validate() {
            panic!("ring invariant violated: {}", err);
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator yielding mutable references, front to back.
    ///
    /// Elements can be replaced in place during traversal. Structural
    /// edits (insert or remove) are impossible while the iterator holds
    /// the borrow.
    ///
    /// # Example
    ///
    /// ```
    /// use ringlist::Ring;
    ///
    /// let mut ring: Ring<_> = (1..4).collect();
    /// for value in ring.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// let values: Vec<_> = ring.into_iter().collect();
    /// assert_eq!(values, vec![10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        // Release front to back, matching pop order
        let mut step = self.head.take();
        while let Some(node) = step {
            // Safety: every node in the chain was allocated by this ring
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            step = node.next;
        }
    }
}

// =============================================================================
// Common trait impls
// =============================================================================

impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { ring: self }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Ring<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to ring elements, front to back.
pub struct Iter<'a, T> {
    front: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

// Safety: the iterator behaves like &'a T
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.front.map(|node| {
            // Safety: the node outlives 'a and the walk visits it once
            let node = unsafe { &*node.as_ptr() };
            self.front = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// Iterator over mutable references to ring elements, front to back.
pub struct IterMut<'a, T> {
    front: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

// Safety: the iterator behaves like &'a mut T
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.front.map(|node| {
            // Safety: each node is visited once, so the &mut never aliases
            let node = unsafe { &mut *node.as_ptr() };
            self.front = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by [`Ring::into_iter`].
///
/// Remaining elements are released when the iterator is dropped.
///
/// [`Ring::into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// serde integration (feature `serde`)
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Ring<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Ring<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SeqVisitor<T>(PhantomData<T>);

        impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for SeqVisitor<T> {
            type Value = Ring<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut ring = Ring::new();
                while let Some(value) = seq.next_element()? {
                    ring.push_back(value);
                }
                Ok(ring)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}
