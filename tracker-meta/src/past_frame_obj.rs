use crate::object_list::PastFrameObjList;
use crate::types::RectParams;
use tracker_meta_sys::NvDsPastFrameObj;

/// Safe wrapper for one historical observation of a tracked object
///
/// The leaf record of the past-frame hierarchy: a single frame the object
/// was (re-)identified in, with its bounding box and confidence. Holds a
/// back-reference to the owning object history.
pub struct PastFrameObj {
    /// Raw pointer to the C structure
    raw: *mut NvDsPastFrameObj,
    _list: PastFrameObjList,
}

impl PastFrameObj {
    /// Create a view over an element of the object history's array
    ///
    /// # Safety
    /// The pointer must reference a valid element inside the object
    /// history's observation array.
    pub(crate) unsafe fn from_parts(raw: *mut NvDsPastFrameObj, list: &PastFrameObjList) -> Self {
        Self {
            raw,
            _list: list.clone(),
        }
    }

    /// Get the raw pointer
    ///
    /// # Safety
    /// This returns the raw C pointer. Use with caution.
    pub fn as_raw(&self) -> *mut NvDsPastFrameObj {
        self.raw
    }

    /// Get the raw pointer as a reference
    ///
    /// # Safety
    /// This returns a reference to the raw C structure. Use with caution.
    pub unsafe fn as_ref(&self) -> &NvDsPastFrameObj {
        &*self.raw
    }

    /// Get the object history this observation belongs to
    pub fn object_list(&self) -> PastFrameObjList {
        self._list.clone()
    }

    /// Get the frame number the object appeared in
    pub fn frame_num(&self) -> u32 {
        unsafe { (*self.raw).frameNum }
    }

    /// Get the bounding box, in tracker coordinate space
    pub fn bbox(&self) -> RectParams {
        RectParams::from(unsafe { &(*self.raw).tBbox })
    }

    /// Get the tracker confidence of the object in this frame
    pub fn confidence(&self) -> f32 {
        unsafe { (*self.raw).confidence }
    }

    /// Get the number of frames the object has been tracked for
    pub fn age(&self) -> u32 {
        unsafe { (*self.raw).age }
    }
}

impl Clone for PastFrameObj {
    fn clone(&self) -> Self {
        // Create a shallow copy - the underlying memory is not duplicated
        Self {
            raw: self.raw,
            _list: self._list.clone(),
        }
    }
}

impl std::fmt::Debug for PastFrameObj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PastFrameObj")
            .field("frame_num", &self.frame_num())
            .field("bbox", &self.bbox())
            .field("confidence", &self.confidence())
            .field("age", &self.age())
            .finish()
    }
}
