//! # Bounds-Checked Copy
//!
//! Copies exactly `requested` bytes from a caller buffer into a freshly
//! allocated one. A single `usize` length drives both the allocation and the
//! copy, and every range check runs before anything is allocated.
//!
//! ## Check order
//!
//! 1. absent input with `requested > 0` → [`CopyError::NullInput`]
//! 2. `requested == 0` → empty buffer
//! 3. `requested + overhead > max` → [`CopyError::SizeOverflow`]
//! 4. `requested > input.len()` → [`CopyError::SourceTooShort`]

use super::errors::CopyError;
use super::width::{SizeWidth, SizeWidthKind};

/// Allocation bounds for a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyLimits {
    /// Largest allocation, terminator included.
    pub max: u128,
    /// Append a NUL byte after the copied data.
    pub terminator: bool,
}

impl CopyLimits {
    /// Limits of size width `W`, without a terminator.
    pub fn for_width<W: SizeWidth>() -> Self {
        Self {
            max: W::MAX,
            terminator: false,
        }
    }

    /// Limits of a runtime-selected width, without a terminator.
    pub fn for_kind(kind: SizeWidthKind) -> Self {
        Self {
            max: kind.max(),
            terminator: false,
        }
    }

    /// Set whether a NUL terminator is appended.
    pub fn with_terminator(mut self, terminator: bool) -> Self {
        self.terminator = terminator;
        self
    }

    /// Fixed bytes added to every non-empty allocation.
    pub fn overhead(&self) -> usize {
        usize::from(self.terminator)
    }

    /// Largest `requested` length these limits accept.
    pub fn max_request(&self) -> u128 {
        self.max.saturating_sub(self.overhead() as u128)
    }
}

/// Owned result of a bounds-checked copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundedBuffer {
    data: Vec<u8>,
    len: usize,
    terminated: bool,
}

impl BoundedBuffer {
    /// Explicit zero-length buffer. Carries no terminator and owns no
    /// allocation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of copied bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if nothing was copied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if a NUL byte follows the copied data.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Exactly the copied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Copied bytes plus the NUL terminator, if one was appended.
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.terminated.then_some(self.data.as_slice())
    }

    /// Bytes allocated for the buffer, terminator included.
    pub fn allocated_len(&self) -> usize {
        self.data.len()
    }

    /// Take the copied bytes, dropping any terminator.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.len);
        self.data
    }
}

impl AsRef<[u8]> for BoundedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Copy `requested` bytes from `input` under explicit `limits`.
pub fn safe_copy_with(
    limits: CopyLimits,
    input: Option<&[u8]>,
    requested: usize,
) -> Result<BoundedBuffer, CopyError> {
    let input = match input {
        Some(input) => input,
        None if requested == 0 => return Ok(BoundedBuffer::empty()),
        None => return Err(CopyError::NullInput { requested }),
    };
    if requested == 0 {
        return Ok(BoundedBuffer::empty());
    }

    let overhead = limits.overhead();
    let total = requested
        .checked_add(overhead)
        .filter(|total| *total as u128 <= limits.max)
        .ok_or(CopyError::SizeOverflow {
            requested,
            overhead,
            max: limits.max,
        })?;

    let source = input.get(..requested).ok_or(CopyError::SourceTooShort {
        requested,
        available: input.len(),
    })?;

    let mut data = Vec::new();
    data.try_reserve_exact(total)
        .map_err(|_| CopyError::AllocationFailed { bytes: total })?;
    data.extend_from_slice(source);
    if limits.terminator {
        data.push(0);
    }

    Ok(BoundedBuffer {
        data,
        len: requested,
        terminated: limits.terminator,
    })
}

/// Copy `requested` bytes from `input`, bounded by size width `W`.
pub fn safe_copy<W: SizeWidth>(
    input: Option<&[u8]>,
    requested: usize,
) -> Result<BoundedBuffer, CopyError> {
    safe_copy_with(CopyLimits::for_width::<W>(), input, requested)
}

/// Like [`safe_copy`], but appends a NUL terminator that counts against
/// `W::MAX`.
pub fn safe_copy_terminated<W: SizeWidth>(
    input: Option<&[u8]>,
    requested: usize,
) -> Result<BoundedBuffer, CopyError> {
    safe_copy_with(CopyLimits::for_width::<W>().with_terminator(true), input, requested)
}
