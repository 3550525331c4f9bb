use crate::stream::PastFrameObjStream;
use crate::{Result, TrackerMetaError};
use std::ffi::c_void;
use tracker_meta_sys::NvDsPastFrameObjBatch;

/// Safe wrapper for a tracker past-frame object batch
///
/// This struct provides read-only access to the root record of past-frame
/// data for one processed batch. The underlying memory is owned by the
/// tracker plugin; the wrapper never copies or frees it.
pub struct PastFrameObjBatch {
    /// Raw pointer to the C structure
    raw: *mut NvDsPastFrameObjBatch,
}

impl PastFrameObjBatch {
    /// Reinterpret an untyped pointer as a past-frame object batch
    ///
    /// This is the unchecked escape hatch for callers that obtained the
    /// batch address through an untyped channel. No validation of any kind
    /// is performed, not even a null check.
    ///
    /// # Safety
    /// The pointer must reference live memory laid out as
    /// `NvDsPastFrameObjBatch` and populated by the tracker plugin, and the
    /// backing buffer must outlive the wrapper and every view derived from
    /// it. Passing a pointer of any other layout is undefined behavior, not
    /// a reportable error.
    pub unsafe fn cast(ptr: *mut c_void) -> Self {
        Self {
            raw: ptr as *mut NvDsPastFrameObjBatch,
        }
    }

    /// Create from a raw pointer
    ///
    /// # Safety
    /// The caller must ensure the pointer, when not null, references a valid
    /// `NvDsPastFrameObjBatch` that outlives the wrapper and every view
    /// derived from it.
    pub unsafe fn from_raw(raw: *mut NvDsPastFrameObjBatch) -> Result<Self> {
        if raw.is_null() {
            return Err(TrackerMetaError::null_pointer("PastFrameObjBatch::from_raw"));
        }

        Ok(Self { raw })
    }

    /// Get the raw pointer
    ///
    /// # Safety
    /// This returns the raw C pointer. Use with caution.
    pub fn as_raw(&self) -> *mut NvDsPastFrameObjBatch {
        self.raw
    }

    /// Get the raw pointer as a reference
    ///
    /// # Safety
    /// This returns a reference to the raw C structure. Use with caution.
    pub unsafe fn as_ref(&self) -> &NvDsPastFrameObjBatch {
        &*self.raw
    }

    /// Get the number of blocks allocated for the stream list
    pub fn num_allocated(&self) -> u32 {
        unsafe { (*self.raw).numAllocated }
    }

    /// Get the number of filled blocks in the stream list
    pub fn num_filled(&self) -> u32 {
        unsafe { (*self.raw).numFilled }
    }

    /// Get the number of valid stream entries
    ///
    /// This is always the filled count, never the allocated capacity.
    pub fn len(&self) -> usize {
        self.num_filled() as usize
    }

    /// Check if the batch has no filled stream entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the stream entry at the given position
    ///
    /// Only indices below the filled count are valid; the slots between the
    /// filled count and the allocated capacity hold stale memory and are
    /// never handed out.
    pub fn get(&self, index: usize) -> Result<PastFrameObjStream> {
        let filled = self.len();
        if index >= filled {
            return Err(TrackerMetaError::index_out_of_range(index, filled));
        }

        // In range of the filled prefix, so the element pointer is valid.
        let element = unsafe { (*self.raw).list.add(index) };
        Ok(unsafe { PastFrameObjStream::from_parts(element, self) })
    }

    /// Iterate over the filled stream entries in array order
    ///
    /// The iterator is lazy and restartable; each yielded element is a
    /// non-owning view that keeps this batch wrapper reachable.
    pub fn streams(&self) -> StreamIter {
        StreamIter {
            batch: self.clone(),
            index: 0,
        }
    }
}

impl Clone for PastFrameObjBatch {
    fn clone(&self) -> Self {
        // Create a shallow copy - the underlying memory is not duplicated
        Self { raw: self.raw }
    }
}

impl std::fmt::Debug for PastFrameObjBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PastFrameObjBatch")
            .field("num_allocated", &self.num_allocated())
            .field("num_filled", &self.num_filled())
            .finish()
    }
}

/// Iterator over the filled stream entries of a batch
pub struct StreamIter {
    batch: PastFrameObjBatch,
    index: usize,
}

impl Iterator for StreamIter {
    type Item = PastFrameObjStream;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.batch.get(self.index).ok()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StreamIter {}
