//! Fixed-length contiguous element buffers.
//!
//! A [`FlatArray`] is the fundamental storage unit of every grid. It is
//! allocated to full length at creation, never grows or shrinks, and is
//! released when dropped.

use std::fmt;
use std::mem;

use locality_core::GridError;

/// A fixed-length, exclusively owned buffer of `T`.
///
/// Elements start out as `T::default()`. The element size is
/// `size_of::<T>()`; zero-sized element types are rejected because a
/// buffer of them has no storage to lay out.
#[derive(Clone, PartialEq, Eq)]
pub struct FlatArray<T> {
    data: Box<[T]>,
}

impl<T> FlatArray<T> {
    /// Build an array of `length` elements produced by `f(index)`.
    pub fn from_fn(length: usize, f: impl FnMut(usize) -> T) -> Result<Self, GridError> {
        check_layout::<T>(length)?;
        Ok(Self {
            data: (0..length).map(f).collect(),
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Bytes held by the backing storage.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * mem::size_of::<T>()
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, GridError> {
        let length = self.data.len();
        self.data
            .get(index)
            .ok_or(GridError::IndexOutOfRange { index, length })
    }

    /// Mutable reference to the element at `index`.
    pub fn at(&mut self, index: usize) -> Result<&mut T, GridError> {
        let length = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, length })
    }

    /// All elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements in storage order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Clone + Default> FlatArray<T> {
    /// Allocate `length` default-initialised elements.
    ///
    /// Fails with [`GridError::InvalidArgument`] if `T` is zero-sized or
    /// `length` elements would exceed `isize::MAX` bytes.
    pub fn new(length: usize) -> Result<Self, GridError> {
        check_layout::<T>(length)?;
        Ok(Self {
            data: vec![T::default(); length].into_boxed_slice(),
        })
    }
}

impl<T> fmt::Debug for FlatArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatArray")
            .field("len", &self.data.len())
            .field("element_size", &mem::size_of::<T>())
            .finish()
    }
}

fn check_layout<T>(length: usize) -> Result<(), GridError> {
    let size = mem::size_of::<T>();
    if size == 0 {
        return Err(GridError::InvalidArgument {
            name: "element_size",
            value: 0,
            expected: "a non-zero-sized element type",
        });
    }
    match length.checked_mul(size) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(GridError::InvalidArgument {
            name: "length",
            value: length as u64,
            expected: "a buffer no larger than isize::MAX bytes",
        }),
    }
}
