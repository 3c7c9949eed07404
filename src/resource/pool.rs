/// Generic handle-based object pool.
///
/// Hands out stable, reusable integer handles over a growable backing store.
/// Released slot indices are recycled through a freelist in LIFO order (last
/// released, first reused). Each slot carries a generation counter, bumped on
/// every release, so a handle captured before a delete+allocate cycle fails
/// validation instead of silently resolving to an unrelated payload.
///
/// Single-threaded by design: all operations are synchronous and callers on
/// a multi-threaded render/update split must serialize access externally
/// (growth reshapes the backing store read by everything else).
///
/// # Example
///
/// ```
/// use nova_3d_core::nova3d::resource::Pool;
///
/// let mut pool = Pool::new();
/// let handle = pool.allocate("mesh");
/// assert_eq!(*pool.get(handle).unwrap(), "mesh");
/// pool.delete(handle).unwrap();
/// assert!(pool.get(handle).is_err());
/// ```
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::{Error, Result};

/// Initial slot capacity for `Pool::new`
pub const DEFAULT_CAPACITY: usize = 1024;

/// Opaque handle to a payload stored in a `Pool<T>`.
///
/// A plain copyable value carrying no ownership: copying a handle does not
/// extend the payload's lifetime, and every copy is invalidated the moment
/// the slot is deleted. The type parameter prevents a handle from one pool
/// kind being used on another.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Slot index this handle refers to
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Generation the slot had when this handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

// Manual impls: derive would bound T, but handles are plain values
// regardless of the payload type.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

/// A storage cell: either a live payload or the empty marker (None)
struct Slot<T> {
    payload: Option<T>,
    generation: u32,
}

/// Growable indexed store with O(1) allocate/get/delete via a freelist.
///
/// Invariants:
/// - every index on the freelist holds the empty marker;
/// - every index below the high-water mark and not on the freelist holds a
///   live payload;
/// - capacity only grows (doubling when exactly full), and growth never
///   invalidates previously issued handles.
pub struct Pool<T> {
    /// Slots in issue order; len() is the high-water mark
    slots: Vec<Slot<T>>,
    /// Released indices, consumed last-released-first
    free_list: Vec<u32>,
    /// Current backing-store capacity in slots
    capacity: usize,
}

impl<T> Pool<T> {
    /// Create an empty pool with [`DEFAULT_CAPACITY`] slots reserved
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty pool with the given initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Store a payload and return its handle.
    ///
    /// Reuses the most recently released slot when one exists; otherwise
    /// takes the next never-used index, doubling the backing store first if
    /// it is exactly full. Never fails.
    pub fn allocate(&mut self, payload: T) -> Handle<T> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.payload.is_none(), "freelist slot {} holds a payload", index);
            slot.payload = Some(payload);
            return Handle {
                index,
                generation: slot.generation,
                _marker: PhantomData,
            };
        }

        if self.slots.len() == self.capacity {
            self.grow();
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            payload: Some(payload),
            generation: 0,
        });
        Handle {
            index,
            generation: 0,
            _marker: PhantomData,
        }
    }

    /// Borrow the payload behind a handle
    ///
    /// # Errors
    ///
    /// `Error::InvalidHandle` when the handle is out of range, stale
    /// (the slot was released and possibly reused), or currently released.
    pub fn get(&self, handle: Handle<T>) -> Result<&T> {
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => slot
                .payload
                .as_ref()
                .ok_or_else(|| invalid_handle(handle, "slot has been released")),
            Some(_) => Err(invalid_handle(handle, "stale generation, slot was reused")),
            None => Err(invalid_handle(handle, "index out of range")),
        }
    }

    /// Mutably borrow the payload behind a handle
    ///
    /// # Errors
    ///
    /// Same contract as [`Pool::get`].
    pub fn get_mut(&mut self, handle: Handle<T>) -> Result<&mut T> {
        match self.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => slot
                .payload
                .as_mut()
                .ok_or_else(|| invalid_handle(handle, "slot has been released")),
            Some(_) => Err(invalid_handle(handle, "stale generation, slot was reused")),
            None => Err(invalid_handle(handle, "index out of range")),
        }
    }

    /// Release the slot behind a handle, making its index eligible for the
    /// next allocation.
    ///
    /// Bumps the slot's generation, so every outstanding copy of the handle
    /// becomes invalid.
    ///
    /// # Errors
    ///
    /// `Error::InvalidHandle` on an out-of-range, stale, or already
    /// released handle (double delete is a caller bug, not a no-op).
    pub fn delete(&mut self, handle: Handle<T>) -> Result<()> {
        let Some(slot) = self.slots.get_mut(handle.index as usize) else {
            return Err(invalid_handle(handle, "index out of range"));
        };
        if slot.generation != handle.generation {
            return Err(invalid_handle(handle, "stale generation, slot was reused"));
        }
        if slot.payload.is_none() {
            return Err(invalid_handle(handle, "slot already released"));
        }
        slot.payload = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        Ok(())
    }

    /// Double the backing-store capacity.
    ///
    /// Indices are positions in `slots`, so reallocation moves payloads in
    /// memory but never changes which index a handle names.
    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        crate::engine_trace!("nova3d::Pool",
            "backing store full, growing {} -> {} slots", self.capacity, new_capacity);
        self.slots.reserve_exact(new_capacity - self.slots.len());
        self.capacity = new_capacity;
    }

    /// Number of currently live payloads
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Whether no payloads are currently live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current backing-store capacity in slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Highest index ever assigned + 1 (never decreases)
    pub fn high_water_mark(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over live payloads with their handles, in index order
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.payload.as_ref().map(|payload| {
                (
                    Handle {
                        index: index as u32,
                        generation: slot.generation,
                        _marker: PhantomData,
                    },
                    payload,
                )
            })
        })
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_handle<T>(handle: Handle<T>, reason: &str) -> Error {
    crate::engine_err!(InvalidHandle, "nova3d::Pool",
        "handle {}v{}: {}", handle.index, handle.generation, reason)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
