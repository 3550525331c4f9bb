use crate::batch::PastFrameObjBatch;
use crate::object_list::PastFrameObjList;
use crate::{Result, TrackerMetaError};
use tracker_meta_sys::NvDsPastFrameObjStream;

/// Safe wrapper for a per-stream list of reappeared tracked objects
///
/// One entry per camera stream, listing the objects the tracker
/// re-identified after occlusion or loss. Holds a back-reference to the
/// owning batch so the parent stays reachable while this view exists.
pub struct PastFrameObjStream {
    /// Raw pointer to the C structure
    raw: *mut NvDsPastFrameObjStream,
    _batch: PastFrameObjBatch,
}

impl PastFrameObjStream {
    /// Create a view over an element of the batch's filled prefix
    ///
    /// # Safety
    /// The pointer must reference a valid element inside the batch's stream
    /// array.
    pub(crate) unsafe fn from_parts(
        raw: *mut NvDsPastFrameObjStream,
        batch: &PastFrameObjBatch,
    ) -> Self {
        Self {
            raw,
            _batch: batch.clone(),
        }
    }

    /// Get the raw pointer
    ///
    /// # Safety
    /// This returns the raw C pointer. Use with caution.
    pub fn as_raw(&self) -> *mut NvDsPastFrameObjStream {
        self.raw
    }

    /// Get the raw pointer as a reference
    ///
    /// # Safety
    /// This returns a reference to the raw C structure. Use with caution.
    pub unsafe fn as_ref(&self) -> &NvDsPastFrameObjStream {
        &*self.raw
    }

    /// Get the batch this stream entry belongs to
    pub fn batch(&self) -> PastFrameObjBatch {
        self._batch.clone()
    }

    /// Get the stream id, matching the frame metadata's pad index
    pub fn stream_id(&self) -> u32 {
        unsafe { (*self.raw).streamID }
    }

    /// Get the stream id used inside the tracker plugin
    ///
    /// Not guaranteed to equal [`stream_id`](Self::stream_id).
    pub fn surface_stream_id(&self) -> u64 {
        unsafe { (*self.raw).surfaceStreamID }
    }

    /// Get the maximum number of objects allocated
    pub fn num_allocated(&self) -> u32 {
        unsafe { (*self.raw).numAllocated }
    }

    /// Get the number of objects filled in for this frame
    pub fn num_filled(&self) -> u32 {
        unsafe { (*self.raw).numFilled }
    }

    /// Get the number of valid object entries
    pub fn len(&self) -> usize {
        self.num_filled() as usize
    }

    /// Check if the stream entry has no filled objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the object history at the given position
    pub fn get(&self, index: usize) -> Result<PastFrameObjList> {
        let filled = self.len();
        if index >= filled {
            return Err(TrackerMetaError::index_out_of_range(index, filled));
        }

        let element = unsafe { (*self.raw).list.add(index) };
        Ok(unsafe { PastFrameObjList::from_parts(element, self) })
    }

    /// Iterate over the filled object histories in array order
    pub fn objects(&self) -> ObjectListIter {
        ObjectListIter {
            stream: self.clone(),
            index: 0,
        }
    }
}

impl Clone for PastFrameObjStream {
    fn clone(&self) -> Self {
        // Create a shallow copy - the underlying memory is not duplicated
        Self {
            raw: self.raw,
            _batch: self._batch.clone(),
        }
    }
}

impl std::fmt::Debug for PastFrameObjStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PastFrameObjStream")
            .field("stream_id", &self.stream_id())
            .field("surface_stream_id", &self.surface_stream_id())
            .field("num_allocated", &self.num_allocated())
            .field("num_filled", &self.num_filled())
            .finish()
    }
}

/// Iterator over the filled object histories of a stream entry
pub struct ObjectListIter {
    stream: PastFrameObjStream,
    index: usize,
}

impl Iterator for ObjectListIter {
    type Item = PastFrameObjList;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stream.get(self.index).ok()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ObjectListIter {}
