use crate::past_frame_obj::PastFrameObj;
use crate::stream::PastFrameObjStream;
use crate::{Result, TrackerMetaError};
use tracker_meta_sys::{NvDsPastFrameObjList, MAX_LABEL_SIZE};

/// Safe wrapper for one tracked object's past-frame history
///
/// Carries the tracking identity of the object and its observations across
/// past frames. Holds a back-reference to the owning stream entry (and
/// through it the batch) so the parent chain stays reachable while this
/// view exists.
pub struct PastFrameObjList {
    /// Raw pointer to the C structure
    raw: *mut NvDsPastFrameObjList,
    _stream: PastFrameObjStream,
}

impl PastFrameObjList {
    /// Create a view over an element of the stream entry's filled prefix
    ///
    /// # Safety
    /// The pointer must reference a valid element inside the stream entry's
    /// object array.
    pub(crate) unsafe fn from_parts(
        raw: *mut NvDsPastFrameObjList,
        stream: &PastFrameObjStream,
    ) -> Self {
        Self {
            raw,
            _stream: stream.clone(),
        }
    }

    /// Get the raw pointer
    ///
    /// # Safety
    /// This returns the raw C pointer. Use with caution.
    pub fn as_raw(&self) -> *mut NvDsPastFrameObjList {
        self.raw
    }

    /// Get the raw pointer as a reference
    ///
    /// # Safety
    /// This returns a reference to the raw C structure. Use with caution.
    pub unsafe fn as_ref(&self) -> &NvDsPastFrameObjList {
        &*self.raw
    }

    /// Get the stream entry this object history belongs to
    pub fn stream(&self) -> PastFrameObjStream {
        self._stream.clone()
    }

    /// Get the object tracking id, stable across frames
    pub fn unique_id(&self) -> u64 {
        unsafe { (*self.raw).uniqueId }
    }

    /// Get the semantic class id of the object
    pub fn class_id(&self) -> u16 {
        unsafe { (*self.raw).classId }
    }

    /// Get the raw class label buffer
    ///
    /// This is the canonical label accessor: always exactly
    /// [`MAX_LABEL_SIZE`] bytes, with no NUL-terminator interpretation. The
    /// upstream buffer is not guaranteed to contain a NUL within its width,
    /// so it must not be read as a C string.
    pub fn label_bytes(&self) -> &[u8; MAX_LABEL_SIZE] {
        // c_char and u8 have identical layout; the lifetime is tied to the
        // wrapper borrow.
        unsafe { &*((*self.raw).objLabel.as_ptr() as *const [u8; MAX_LABEL_SIZE]) }
    }

    /// Get the class label as text
    ///
    /// Fixed decoding rule: the buffer is truncated at the first NUL byte
    /// (the whole buffer is used if it contains none) and decoded as UTF-8
    /// with lossy replacement of invalid sequences.
    pub fn label(&self) -> String {
        let bytes = self.label_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(MAX_LABEL_SIZE);
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }

    /// Get the number of past frames this object appeared in
    pub fn num_obj(&self) -> u32 {
        unsafe { (*self.raw).numObj }
    }

    /// Get the number of valid past-frame observations
    pub fn len(&self) -> usize {
        self.num_obj() as usize
    }

    /// Check if the object history has no observations
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the past-frame observation at the given position
    pub fn get(&self, index: usize) -> Result<PastFrameObj> {
        let filled = self.len();
        if index >= filled {
            return Err(TrackerMetaError::index_out_of_range(index, filled));
        }

        let element = unsafe { (*self.raw).list.add(index) };
        Ok(unsafe { PastFrameObj::from_parts(element, self) })
    }

    /// Iterate over the past-frame observations in array order
    pub fn frames(&self) -> PastFrameObjIter {
        PastFrameObjIter {
            list: self.clone(),
            index: 0,
        }
    }
}

impl Clone for PastFrameObjList {
    fn clone(&self) -> Self {
        // Create a shallow copy - the underlying memory is not duplicated
        Self {
            raw: self.raw,
            _stream: self._stream.clone(),
        }
    }
}

impl std::fmt::Debug for PastFrameObjList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PastFrameObjList")
            .field("unique_id", &self.unique_id())
            .field("class_id", &self.class_id())
            .field("label", &self.label())
            .field("num_obj", &self.num_obj())
            .finish()
    }
}

/// Iterator over the past-frame observations of one object
pub struct PastFrameObjIter {
    list: PastFrameObjList,
    index: usize,
}

impl Iterator for PastFrameObjIter {
    type Item = PastFrameObj;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index).ok()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PastFrameObjIter {}
