#![allow(unsafe_code)]

//! RawSlots: a fixed-length block of contiguous, homogeneously typed slots.
//!
//! RawSlots is the allocation layer underneath typed arrays:
//! - Allocates exactly `len * size_of::<T>()` bytes in a single block
//! - Never resizes in place; growing builds a new block and copies the prefix
//! - Initializes every slot at construction, so reads never observe garbage
//! - Drops every slot and frees the block when dropped

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    fmt,
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

/// A heap block of `len` initialized slots of type `T`.
///
/// The length is fixed for the lifetime of the block.
#[repr(C)]
pub struct RawSlots<T> {
    data: NonNull<T>,
    len: usize,
    _owns: PhantomData<T>,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(RawSlots<u8>, [usize; 2]);

// SAFETY: RawSlots owns its slots exactly like `Box<[T]>` does.
unsafe impl<T: Send> Send for RawSlots<T> {}
unsafe impl<T: Sync> Sync for RawSlots<T> {}

/// A block of slots could not be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotsError {
    /// `len * element_size` does not fit in the address space.
    CapacityOverflow { len: usize, element_size: usize },
    /// The allocator returned no memory for a block of `bytes` bytes.
    OutOfMemory { len: usize, bytes: usize },
}

impl SlotsError {
    /// Number of slots that were requested.
    pub fn requested(&self) -> usize {
        match *self {
            SlotsError::CapacityOverflow { len, .. } | SlotsError::OutOfMemory { len, .. } => len,
        }
    }
}

impl fmt::Display for SlotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotsError::CapacityOverflow { len, element_size } => {
                write!(f, "cannot allocate {len} slots of {element_size} bytes")
            }
            SlotsError::OutOfMemory { len, bytes } => {
                write!(f, "out of memory allocating {len} slots ({bytes} bytes)")
            }
        }
    }
}

impl core::error::Error for SlotsError {}

// Frees a partially initialized block if the init closure panics.
struct PartialInit<T> {
    data: NonNull<T>,
    initialized: usize,
    layout: Layout,
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.data.as_ptr(),
                self.initialized,
            ));
            if self.layout.size() != 0 {
                dealloc(self.data.as_ptr().cast(), self.layout);
            }
        }
    }
}

impl<T> RawSlots<T> {
    #[inline(always)]
    fn layout(len: usize) -> Result<Layout, SlotsError> {
        Layout::array::<T>(len).map_err(|_| SlotsError::CapacityOverflow {
            len,
            element_size: mem::size_of::<T>(),
        })
    }

    fn allocate(len: usize, layout: Layout) -> Result<NonNull<T>, SlotsError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let ptr = unsafe { alloc(layout) }.cast::<T>();
        NonNull::new(ptr).ok_or(SlotsError::OutOfMemory {
            len,
            bytes: layout.size(),
        })
    }

    /// Allocates `len` slots, initializing slot `i` with `init(i)`.
    ///
    /// Fails without calling `init` when the block cannot be allocated.
    pub fn from_fn(len: usize, mut init: impl FnMut(usize) -> T) -> Result<Self, SlotsError> {
        let layout = Self::layout(len)?;
        let data = Self::allocate(len, layout)?;

        let mut guard = PartialInit {
            data,
            initialized: 0,
            layout,
        };
        for i in 0..len {
            let value = init(i);
            unsafe { ptr::write(data.as_ptr().add(i), value) };
            guard.initialized += 1;
        }
        mem::forget(guard);

        Ok(Self {
            data,
            len,
            _owns: PhantomData,
        })
    }

    /// Allocates `len` slots, each holding `T::default()`.
    pub fn with_len(len: usize) -> Result<Self, SlotsError>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Builds a new, longer block: the current slots are cloned into the
    /// prefix and the `extra` appended slots come from `fill`.
    ///
    /// `self` is left untouched.
    pub fn grown(&self, extra: usize, mut fill: impl FnMut() -> T) -> Result<Self, SlotsError>
    where
        T: Clone,
    {
        let new_len = self.len.checked_add(extra).ok_or(SlotsError::CapacityOverflow {
            len: usize::MAX,
            element_size: mem::size_of::<T>(),
        })?;
        let prefix = self.as_slice();
        Self::from_fn(new_len, |i| match prefix.get(i) {
            Some(value) => value.clone(),
            None => fill(),
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Width of one slot in bytes.
    #[inline(always)]
    pub const fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Total size of the block in bytes (`len * element_size`).
    pub fn byte_len(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Overwrites slot `index`, returning the previous value.
    ///
    /// Hands `value` back unchanged when `index` is out of bounds.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, T> {
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(value),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `data` points to `len` initialized slots (or is dangling with len 0).
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Index<usize> for RawSlots<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for RawSlots<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Clone> Clone for RawSlots<T> {
    fn clone(&self) -> Self {
        let source = self.as_slice();
        match Self::from_fn(self.len, |i| source[i].clone()) {
            Ok(slots) => slots,
            // The layout already fit once, so only the allocator can fail here.
            Err(_) => handle_alloc_error(Layout::for_value(source)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RawSlots<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.len));
            let layout = Layout::array::<T>(self.len).unwrap_unchecked();
            if layout.size() != 0 {
                dealloc(self.data.as_ptr().cast(), layout);
            }
        }
    }
}
