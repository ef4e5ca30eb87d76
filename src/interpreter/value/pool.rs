use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::RuntimeObject},
    memory::arena::Arena,
};

/// A reference to an object in a [`TransientPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransientHandle {
    index:      usize,
    generation: u64,
}

/// An arena of intermediate results, released in bulk.
///
/// Every literal and every arithmetic result of a statement is allocated here.
/// Releasing the pool drops all of them at once and starts a new generation;
/// handles issued before the release no longer resolve.
///
/// # Example
/// ```
/// use mao::interpreter::value::{core::RuntimeObject, pool::TransientPool};
///
/// let mut pool = TransientPool::new();
/// let handle = pool.alloc(RuntimeObject::int(3));
/// assert_eq!(pool.get(handle, 1).unwrap(), &RuntimeObject::int(3));
///
/// pool.release();
/// assert!(pool.get(handle, 1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransientPool {
    objects:    Arena<RuntimeObject>,
    generation: u64,
}

impl TransientPool {
    #[must_use]
    pub const fn new() -> Self {
        Self { objects:    Arena::new(),
               generation: 0, }
    }

    /// Stores an object and returns a handle valid until the next release.
    pub fn alloc(&mut self, object: RuntimeObject) -> TransientHandle {
        TransientHandle { index:      self.objects.push(object),
                          generation: self.generation, }
    }

    /// Resolves a handle.
    ///
    /// # Errors
    /// Returns `RuntimeError::ReleasedObject` if the handle was issued before
    /// the last release.
    pub fn get(&self, handle: TransientHandle, line: usize) -> EvalResult<&RuntimeObject> {
        if handle.generation != self.generation {
            return Err(RuntimeError::ReleasedObject { line });
        }
        self.objects
            .get(handle.index)
            .ok_or(RuntimeError::ReleasedObject { line })
    }

    /// Drops every object in the pool. Does nothing if the pool is empty.
    pub fn release(&mut self) -> usize {
        let released = self.objects.len();
        if released == 0 {
            return 0;
        }
        self.objects.clear();
        self.generation = self.generation.wrapping_add(1);
        released
    }

    /// Number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
