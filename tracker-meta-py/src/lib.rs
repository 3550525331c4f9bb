//! Python bindings for DeepStream tracker past-frame metadata.
//!
//! Exposes the `tracker-meta` wrappers to Python with the usual container
//! protocols: every container level supports `len()`, indexing (raising
//! `IndexError` past the filled count) and iteration. Raw tracker memory
//! enters through integer handles, either via `PastFrameObjBatch.cast` or
//! via `UserMeta.from_handle(...).past_frame_batch()`.

pub mod past_frame;

use pyo3::prelude::*;

use past_frame::{
    PastFrameObj, PastFrameObjBatch, PastFrameObjBatchIterator, PastFrameObjList,
    PastFrameObjListIterator, PastFrameObjStream, PastFrameObjStreamIterator, RectParams, UserMeta,
};

/// Returns the version of the package set in Cargo.toml
#[pyfunction]
pub fn version() -> String {
    tracker_meta::version()
}

#[pymodule(gil_used = false)]
fn tracker_meta_py(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;

    m.add_class::<UserMeta>()?;
    m.add_class::<PastFrameObjBatch>()?;
    m.add_class::<PastFrameObjBatchIterator>()?;
    m.add_class::<PastFrameObjStream>()?;
    m.add_class::<PastFrameObjStreamIterator>()?;
    m.add_class::<PastFrameObjList>()?;
    m.add_class::<PastFrameObjListIterator>()?;
    m.add_class::<PastFrameObj>()?;
    m.add_class::<RectParams>()?;

    m.add(
        "MAX_LABEL_SIZE",
        tracker_meta::sys::MAX_LABEL_SIZE,
    )?;
    m.add(
        "NVDS_TRACKER_PAST_FRAME_META",
        tracker_meta::sys::NvDsMetaType_NVDS_TRACKER_PAST_FRAME_META,
    )?;

    Ok(())
}
