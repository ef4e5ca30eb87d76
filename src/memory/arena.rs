/// Number of elements per block used by [`Arena::new`].
pub const DEFAULT_BLOCK_CAPACITY: usize = 16;

/// Slot index of a block inside the arena's block slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BlockId(usize);

#[derive(Debug, Clone)]
struct Block<T> {
    items: Vec<T>,
    prev:  Option<BlockId>,
    next:  Option<BlockId>,
}

/// A position inside an [`Arena`].
///
/// A cursor names a block and an offset within it. The end of the sequence is
/// represented by [`Cursor::END`], which is also what advancing past the last
/// element yields. Cursors are plain values: comparing two cursors of the same
/// arena tells whether they point at the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    block:  Option<BlockId>,
    offset: usize,
}

impl Cursor {
    /// The end-of-sequence sentinel.
    pub const END: Self = Self { block:  None,
                                 offset: 0, };

    /// Returns `true` when the cursor is the end-of-sequence sentinel.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.block.is_none()
    }
}

/// An ordered sequence stored as a doubly linked chain of fixed-capacity
/// blocks.
///
/// Blocks are kept in a slab and linked by slot index, so removing a block
/// never invalidates the identity of the others. All blocks except the last
/// one are full, which gives the length invariant
/// `len = (block_count - 1) * block_capacity + tail_fill`. A directory of the
/// linked blocks in chain order turns an index into a block in O(1).
///
/// # Example
/// ```
/// use mao::memory::arena::Arena;
///
/// let mut arena = Arena::with_block_capacity(2);
/// for value in [10, 20, 30] {
///     arena.push(value);
/// }
///
/// assert_eq!(arena.len(), 3);
/// assert_eq!(arena.block_count(), 2);
/// assert_eq!(arena.get(2), Some(&30));
/// assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots:          Vec<Option<Block<T>>>,
    vacant:         Vec<BlockId>,
    head:           Option<BlockId>,
    tail:           Option<BlockId>,
    directory:      Vec<BlockId>,
    block_capacity: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates an empty arena using [`DEFAULT_BLOCK_CAPACITY`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_block_capacity(DEFAULT_BLOCK_CAPACITY)
    }

    /// Creates an empty arena whose blocks hold `block_capacity` elements.
    ///
    /// An arena with a block capacity of `1` behaves like a doubly linked list
    /// and is the only configuration supporting [`Arena::remove_at`].
    ///
    /// # Panics
    /// Panics if `block_capacity` is zero.
    #[must_use]
    pub const fn with_block_capacity(block_capacity: usize) -> Self {
        assert!(block_capacity > 0, "arena block capacity must be positive");
        Self { slots: Vec::new(),
               vacant: Vec::new(),
               head: None,
               tail: None,
               directory: Vec::new(),
               block_capacity }
    }

    /// Number of elements each block holds.
    #[must_use]
    pub const fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// Number of blocks currently linked into the chain.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.directory.len()
    }

    /// Number of elements in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail
            .and_then(|tail| self.block(tail))
            .map_or(0, |tail| {
                (self.directory.len() - 1) * self.block_capacity + tail.items.len()
            })
    }

    /// Returns `true` when the arena holds no element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` and returns its index.
    ///
    /// A new block is linked when the last one is full; existing blocks are
    /// never moved or reallocated.
    pub fn push(&mut self, value: T) -> usize {
        let index = self.len();
        let tail = self.tail;
        let has_room = tail.and_then(|id| self.block(id))
                           .is_some_and(|block| block.items.len() < self.block_capacity);

        let target = if has_room { tail } else { Some(self.link_new_block()) };
        if let Some(block) = target.and_then(|id| self.block_mut(id)) {
            block.items.push(value);
        }

        index
    }

    /// Returns a reference to the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(self.cursor_at(index))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let cursor = self.cursor_at(index);
        self.at_mut(cursor)
    }

    /// Returns a cursor to the first element, or [`Cursor::END`] when empty.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor { block:  self.head,
                 offset: 0, }
    }

    /// Returns the end-of-sequence cursor.
    #[must_use]
    pub const fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Returns a cursor to the element at `index`, or [`Cursor::END`] when
    /// `index` is out of bounds.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Cursor {
        let offset = index % self.block_capacity;
        self.directory
            .get(index / self.block_capacity)
            .copied()
            .filter(|&id| self.block(id).is_some_and(|block| offset < block.items.len()))
            .map_or(Cursor::END, |id| Cursor { block: Some(id),
                                               offset })
    }

    /// Returns the element a cursor points at.
    #[must_use]
    pub fn at(&self, cursor: Cursor) -> Option<&T> {
        self.block(cursor.block?)?.items.get(cursor.offset)
    }

    /// Returns the element a cursor points at, mutably.
    pub fn at_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        self.block_mut(cursor.block?)?.items.get_mut(cursor.offset)
    }

    /// Moves a cursor one element forward.
    ///
    /// Advancing past the last element of a block moves to the first element
    /// of the next block; advancing past the last element of the arena yields
    /// [`Cursor::END`]. Advancing the end cursor does nothing.
    pub fn advance(&self, cursor: &mut Cursor) {
        let Some(block) = cursor.block.and_then(|id| self.block(id)) else {
            return;
        };

        if cursor.offset + 1 < block.items.len() {
            cursor.offset += 1;
        } else {
            *cursor = Cursor { block:  block.next,
                               offset: 0, };
        }
    }

    /// Moves a cursor one element backward.
    ///
    /// Retreating before the first element of a block moves to the last element
    /// of the previous block, and retreating from [`Cursor::END`] lands on the
    /// last element. Retreating from the first element of the arena does
    /// nothing.
    pub fn retreat(&self, cursor: &mut Cursor) {
        match cursor.block {
            None => {
                if let Some((id, block)) = self.tail.and_then(|id| self.block(id).map(|b| (id, b)))
                {
                    *cursor = Cursor { block:  Some(id),
                                       offset: block.items.len().saturating_sub(1), };
                }
            },
            Some(_) if cursor.offset > 0 => cursor.offset -= 1,
            Some(id) => {
                let previous = self.block(id).and_then(|block| block.prev);
                if let Some((prev, block)) = previous.and_then(|p| self.block(p).map(|b| (p, b))) {
                    *cursor = Cursor { block:  Some(prev),
                                       offset: block.items.len().saturating_sub(1), };
                }
            },
        }
    }

    /// Shortens the arena to `new_len` elements.
    ///
    /// Every block past the one holding element `new_len - 1` is released and
    /// the fill level of the new last block is recomputed. Truncating to `0`
    /// releases all blocks, after which the arena behaves exactly like a new
    /// one. Requesting a length at or beyond the current length does nothing.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }

        if new_len == 0 {
            self.slots.clear();
            self.vacant.clear();
            self.head = None;
            self.tail = None;
            self.directory.clear();
            return;
        }

        let kept_blocks = new_len.div_ceil(self.block_capacity);
        let Some(&last) = self.directory.get(kept_blocks - 1) else {
            return;
        };

        let mut released = self.block_mut(last).and_then(|block| block.next.take());
        while let Some(id) = released {
            released = self.release_block(id).and_then(|block| block.next);
        }
        self.directory.truncate(kept_blocks);

        let fill = new_len - (kept_blocks - 1) * self.block_capacity;
        if let Some(block) = self.block_mut(last) {
            block.items.truncate(fill);
        }
        self.tail = Some(last);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Removes the element a cursor points at and returns it.
    ///
    /// Only defined for arenas with a block capacity of `1`: the block holding
    /// the element is unlinked and its neighbours are joined. For any other
    /// arena, or for the end cursor, nothing changes and `None` is returned.
    ///
    /// Removal shifts the block directory, so it is linear in the number of
    /// elements.
    pub fn remove_at(&mut self, cursor: Cursor) -> Option<T> {
        if self.block_capacity != 1 {
            return None;
        }

        let id = cursor.block?;
        if self.block(id)?.items.get(cursor.offset).is_none() {
            return None;
        }
        let block = self.release_block(id)?;
        if let Some(position) = self.directory.iter().position(|&linked| linked == id) {
            self.directory.remove(position);
        }

        match block.prev.and_then(|prev| self.block_mut(prev)) {
            Some(prev) => prev.next = block.next,
            None => self.head = block.next,
        }
        match block.next.and_then(|next| self.block_mut(next)) {
            Some(next) => next.prev = block.prev,
            None => self.tail = block.prev,
        }

        block.items.into_iter().next()
    }

    /// Iterates over the elements in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { arena:     self,
               cursor:    self.cursor(),
               remaining: self.len(), }
    }

    fn block(&self, id: BlockId) -> Option<&Block<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn link_new_block(&mut self) -> BlockId {
        let block = Block { items: Vec::with_capacity(self.block_capacity),
                            prev:  self.tail,
                            next:  None, };

        let id = if let Some(id) = self.vacant.pop() {
            self.slots[id.0] = Some(block);
            id
        } else {
            self.slots.push(Some(block));
            BlockId(self.slots.len() - 1)
        };

        let tail = self.tail;
        match tail.and_then(|tail| self.block_mut(tail)) {
            Some(previous) => previous.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.directory.push(id);

        id
    }

    fn release_block(&mut self, id: BlockId) -> Option<Block<T>> {
        let block = self.slots.get_mut(id.0)?.take()?;
        self.vacant.push(id);
        Some(block)
    }
}

/// Iterator over the elements of an [`Arena`], in insertion order.
pub struct Iter<'a, T> {
    arena:     &'a Arena<T>,
    cursor:    Cursor,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.arena.at(self.cursor)?;
        self.arena.advance(&mut self.cursor);
        self.remaining = self.remaining.saturating_sub(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Arena<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Arena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arena = Self::new();
        arena.extend(iter);
        arena
    }
}
