//! Shared test utilities: hand-constructed tracker memory layouts.
//!
//! The tracker plugin is closed source, so the tests stand in for it by
//! building the exact `NvDsPastFrameObj*` memory layout themselves. The
//! fixture owns every allocation and wires the interior pointers, playing
//! the single-writer role the tracker has in production; slots between the
//! filled count and the allocated capacity are filled with sentinel values
//! that make any out-of-bounds traversal visible in the assertions.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::sync::Once;

use tracker_meta::sys::{
    NvDsBaseMeta, NvDsMetaType, NvDsPastFrameObj, NvDsPastFrameObjBatch, NvDsPastFrameObjList,
    NvDsPastFrameObjStream, NvDsUserMeta, NvOSD_ColorParams, NvOSD_RectParams, MAX_LABEL_SIZE,
};

static INIT: Once = Once::new();

/// One-time logger initialization for all integration tests.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::try_init();
    });
}

/// Sentinel written into allocated-but-unfilled slots. Any test that sees
/// this value traversed a slot the binding must never read.
pub const TAIL_SENTINEL: u32 = 0xDEAD_BEEF;

pub struct ObjSpec {
    pub frame_num: u32,
    pub bbox: (f32, f32, f32, f32),
    pub confidence: f32,
    pub age: u32,
}

pub struct ListSpec {
    pub unique_id: u64,
    pub class_id: u16,
    pub label: &'static [u8],
    pub objs: Vec<ObjSpec>,
}

pub struct StreamSpec {
    pub stream_id: u32,
    pub surface_stream_id: u64,
    pub lists: Vec<ListSpec>,
}

const NO_COLOR: NvOSD_ColorParams = NvOSD_ColorParams {
    red: 0.0,
    green: 0.0,
    blue: 0.0,
    alpha: 0.0,
};

pub fn rect(left: f32, top: f32, width: f32, height: f32) -> NvOSD_RectParams {
    NvOSD_RectParams {
        left,
        top,
        width,
        height,
        border_width: 0,
        border_color: NO_COLOR,
        has_bg_color: 0,
        reserved: 0,
        bg_color: NO_COLOR,
        has_color_info: 0,
        color_id: 0,
    }
}

/// Copy label bytes into a fixed-width buffer, zero-padded. The label is
/// written verbatim, without appending a NUL, so a `MAX_LABEL_SIZE`-byte
/// input produces an unterminated buffer like the tracker can.
pub fn label_buf(label: &[u8]) -> [c_char; MAX_LABEL_SIZE] {
    assert!(label.len() <= MAX_LABEL_SIZE);
    let mut buf = [0 as c_char; MAX_LABEL_SIZE];
    for (dst, src) in buf.iter_mut().zip(label) {
        *dst = *src as c_char;
    }
    buf
}

/// Owning fixture for one batch. Interior pointers reference the boxed
/// arrays below, which stay pinned on the heap for the fixture's lifetime.
pub struct Fixture {
    batch: Box<NvDsPastFrameObjBatch>,
    _streams: Box<[NvDsPastFrameObjStream]>,
    _lists: Vec<Box<[NvDsPastFrameObjList]>>,
    _objs: Vec<Box<[NvDsPastFrameObj]>>,
}

impl Fixture {
    /// Build a batch with the given streams plus `extra_capacity` sentinel
    /// slots at the batch and stream levels (allocated, never filled).
    pub fn build(specs: Vec<StreamSpec>, extra_capacity: u32) -> Self {
        let mut all_objs = Vec::new();
        let mut all_lists = Vec::new();
        let mut streams = Vec::new();

        for spec in &specs {
            let mut lists = Vec::new();
            for list_spec in &spec.lists {
                let objs: Box<[NvDsPastFrameObj]> = list_spec
                    .objs
                    .iter()
                    .map(|o| NvDsPastFrameObj {
                        frameNum: o.frame_num,
                        tBbox: rect(o.bbox.0, o.bbox.1, o.bbox.2, o.bbox.3),
                        confidence: o.confidence,
                        age: o.age,
                    })
                    .collect();

                lists.push(NvDsPastFrameObjList {
                    list: objs.as_ptr() as *mut NvDsPastFrameObj,
                    numObj: objs.len() as u32,
                    uniqueId: list_spec.unique_id,
                    classId: list_spec.class_id,
                    objLabel: label_buf(list_spec.label),
                });
                all_objs.push(objs);
            }

            let filled = lists.len() as u32;
            for _ in 0..extra_capacity {
                lists.push(NvDsPastFrameObjList {
                    list: std::ptr::null_mut(),
                    numObj: TAIL_SENTINEL,
                    uniqueId: TAIL_SENTINEL as u64,
                    classId: 0,
                    objLabel: [0; MAX_LABEL_SIZE],
                });
            }
            let lists: Box<[NvDsPastFrameObjList]> = lists.into_boxed_slice();

            streams.push(NvDsPastFrameObjStream {
                list: lists.as_ptr() as *mut NvDsPastFrameObjList,
                streamID: spec.stream_id,
                surfaceStreamID: spec.surface_stream_id,
                numAllocated: filled + extra_capacity,
                numFilled: filled,
            });
            all_lists.push(lists);
        }

        let filled = streams.len() as u32;
        for _ in 0..extra_capacity {
            streams.push(NvDsPastFrameObjStream {
                list: std::ptr::null_mut(),
                streamID: TAIL_SENTINEL,
                surfaceStreamID: TAIL_SENTINEL as u64,
                numAllocated: 0,
                numFilled: TAIL_SENTINEL,
            });
        }
        let streams: Box<[NvDsPastFrameObjStream]> = streams.into_boxed_slice();

        let batch = Box::new(NvDsPastFrameObjBatch {
            list: streams.as_ptr() as *mut NvDsPastFrameObjStream,
            numAllocated: filled + extra_capacity,
            numFilled: filled,
        });

        Self {
            batch,
            _streams: streams,
            _lists: all_lists,
            _objs: all_objs,
        }
    }

    pub fn batch_ptr(&self) -> *mut NvDsPastFrameObjBatch {
        self.batch.as_ref() as *const NvDsPastFrameObjBatch as *mut NvDsPastFrameObjBatch
    }

    pub fn as_void_ptr(&self) -> *mut c_void {
        self.batch_ptr() as *mut c_void
    }
}

/// Wrap a payload pointer in a user metadata container with the given tag.
pub fn user_meta(meta_type: NvDsMetaType, payload: *mut c_void) -> Box<NvDsUserMeta> {
    Box::new(NvDsUserMeta {
        base_meta: NvDsBaseMeta {
            batch_meta: std::ptr::null_mut(),
            meta_type,
            uContext: std::ptr::null_mut(),
            copy_func: None,
            release_func: None,
        },
        user_meta_data: payload,
    })
}
