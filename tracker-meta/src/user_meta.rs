use crate::batch::PastFrameObjBatch;
use crate::{Result, TrackerMetaError};
use log::trace;
use tracker_meta_sys::{NvDsUserMeta, NvDsMetaType_NVDS_TRACKER_PAST_FRAME_META};

/// Safe wrapper for a generic user metadata container
///
/// The pipeline attaches side-channel data to a batch through this wrapper,
/// disambiguated by a type tag. This binding only ever checks the tag and,
/// on a match, reinterprets the payload as a past-frame object batch.
pub struct UserMeta {
    /// Raw pointer to the C structure
    raw: *mut NvDsUserMeta,
}

impl UserMeta {
    /// Create from a raw pointer
    ///
    /// A null pointer is the one checked failure of this layer: user
    /// metadata is a required input here, so absence is reported as an
    /// error rather than silently tolerated.
    ///
    /// # Safety
    /// The caller must ensure the pointer, when not null, references a valid
    /// `NvDsUserMeta` that outlives the wrapper and every view derived from
    /// it.
    pub unsafe fn from_raw(raw: *mut NvDsUserMeta) -> Result<Self> {
        if raw.is_null() {
            return Err(TrackerMetaError::null_pointer("UserMeta::from_raw"));
        }

        Ok(Self { raw })
    }

    /// Get the raw pointer
    ///
    /// # Safety
    /// This returns the raw C pointer. Use with caution.
    pub fn as_raw(&self) -> *mut NvDsUserMeta {
        self.raw
    }

    /// Get the raw pointer as a reference
    ///
    /// # Safety
    /// This returns a reference to the raw C structure. Use with caution.
    pub unsafe fn as_ref(&self) -> &NvDsUserMeta {
        &*self.raw
    }

    /// Get the metadata type tag
    pub fn meta_type(&self) -> i32 {
        unsafe { (*self.raw).base_meta.meta_type }
    }

    /// Get the untyped payload pointer
    pub fn user_meta_data(&self) -> *mut std::ffi::c_void {
        unsafe { (*self.raw).user_meta_data }
    }

    /// Check if this user metadata has a payload
    pub fn has_user_data(&self) -> bool {
        !self.user_meta_data().is_null()
    }

    /// Check if this user metadata carries a past-frame object batch
    ///
    /// Predicate-only form of [`past_frame_batch`](Self::past_frame_batch)
    /// for callers that want to branch without extracting. No side effects.
    pub fn is_past_frame_batch(&self) -> bool {
        self.meta_type() == NvDsMetaType_NVDS_TRACKER_PAST_FRAME_META
    }

    /// Get the past-frame object batch if this user metadata carries one
    ///
    /// A non-matching tag is a valid negative result, not an error: the
    /// pipeline attaches many kinds of user metadata and callers probe each
    /// container in turn. Returns `None` as well when the tag matches but
    /// the payload pointer is null.
    pub fn past_frame_batch(&self) -> Option<PastFrameObjBatch> {
        if !self.is_past_frame_batch() {
            trace!(
                "user meta type {} is not past-frame tracker meta",
                self.meta_type()
            );
            return None;
        }

        let data_ptr = self.user_meta_data();
        if data_ptr.is_null() {
            return None;
        }

        // Tag verified and the payload is not null.
        Some(unsafe { PastFrameObjBatch::cast(data_ptr) })
    }
}

impl Clone for UserMeta {
    fn clone(&self) -> Self {
        // Create a shallow copy - the underlying memory is not duplicated
        Self { raw: self.raw }
    }
}

impl std::fmt::Debug for UserMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserMeta")
            .field("meta_type", &self.meta_type())
            .field("has_user_data", &self.has_user_data())
            .finish()
    }
}
