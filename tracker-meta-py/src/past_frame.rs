use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use std::ffi::c_void;
use tracker_meta::sys::NvDsUserMeta;
use tracker_meta::TrackerMetaError;

fn to_py_err(e: TrackerMetaError) -> PyErr {
    match e {
        TrackerMetaError::IndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        TrackerMetaError::NullPointer(_) => PyValueError::new_err(e.to_string()),
    }
}

/// Bounding box of a tracked object, in tracker coordinate space.
#[pyclass]
#[derive(Clone, Copy, Debug)]
pub struct RectParams(pub(crate) tracker_meta::RectParams);

#[pymethods]
impl RectParams {
    #[getter]
    fn left(&self) -> f32 {
        self.0.left
    }

    #[getter]
    fn top(&self) -> f32 {
        self.0.top
    }

    #[getter]
    fn width(&self) -> f32 {
        self.0.width
    }

    #[getter]
    fn height(&self) -> f32 {
        self.0.height
    }

    #[getter]
    fn right(&self) -> f32 {
        self.0.right()
    }

    #[getter]
    fn bottom(&self) -> f32 {
        self.0.bottom()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Root record of past-frame data for one processed batch.
#[pyclass(unsendable)]
pub struct PastFrameObjBatch(pub(crate) tracker_meta::PastFrameObjBatch);

#[pymethods]
impl PastFrameObjBatch {
    /// Reinterpret a raw memory handle as a past-frame object batch.
    ///
    /// No validation is performed; the handle must point at memory the
    /// tracker plugin populated with this exact layout, and the batch must
    /// stay alive for as long as the returned object or anything derived
    /// from it is used.
    #[staticmethod]
    fn cast(handle: usize) -> Self {
        Self(unsafe { tracker_meta::PastFrameObjBatch::cast(handle as *mut c_void) })
    }

    #[getter]
    fn num_filled(&self) -> u32 {
        self.0.num_filled()
    }

    #[getter]
    fn num_allocated(&self) -> u32 {
        self.0.num_allocated()
    }

    #[getter]
    fn memory_handle(&self) -> usize {
        self.0.as_raw() as usize
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __getitem__(&self, index: usize) -> PyResult<PastFrameObjStream> {
        self.0.get(index).map(PastFrameObjStream).map_err(to_py_err)
    }

    fn __iter__(&self) -> PastFrameObjBatchIterator {
        PastFrameObjBatchIterator(self.0.streams())
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

#[pyclass(unsendable)]
pub struct PastFrameObjBatchIterator(tracker_meta::StreamIter);

#[pymethods]
impl PastFrameObjBatchIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self) -> Option<PastFrameObjStream> {
        self.0.next().map(PastFrameObjStream)
    }
}

/// Per-stream list of objects that reappeared after occlusion or loss.
#[pyclass(unsendable)]
pub struct PastFrameObjStream(pub(crate) tracker_meta::PastFrameObjStream);

#[pymethods]
impl PastFrameObjStream {
    #[getter]
    fn stream_id(&self) -> u32 {
        self.0.stream_id()
    }

    #[getter]
    fn surface_stream_id(&self) -> u64 {
        self.0.surface_stream_id()
    }

    #[getter]
    fn num_filled(&self) -> u32 {
        self.0.num_filled()
    }

    #[getter]
    fn num_allocated(&self) -> u32 {
        self.0.num_allocated()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __getitem__(&self, index: usize) -> PyResult<PastFrameObjList> {
        self.0.get(index).map(PastFrameObjList).map_err(to_py_err)
    }

    fn __iter__(&self) -> PastFrameObjStreamIterator {
        PastFrameObjStreamIterator(self.0.objects())
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

#[pyclass(unsendable)]
pub struct PastFrameObjStreamIterator(tracker_meta::ObjectListIter);

#[pymethods]
impl PastFrameObjStreamIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self) -> Option<PastFrameObjList> {
        self.0.next().map(PastFrameObjList)
    }
}

/// One tracked object's appearances across past frames.
#[pyclass(unsendable)]
pub struct PastFrameObjList(pub(crate) tracker_meta::PastFrameObjList);

#[pymethods]
impl PastFrameObjList {
    #[getter]
    fn unique_id(&self) -> u64 {
        self.0.unique_id()
    }

    #[getter]
    fn class_id(&self) -> u16 {
        self.0.class_id()
    }

    /// The raw class label buffer: always exactly `MAX_LABEL_SIZE` bytes,
    /// with no NUL-terminator interpretation.
    #[getter]
    fn obj_label<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new(py, self.0.label_bytes())
    }

    /// The class label as text, truncated at the first NUL byte and decoded
    /// as UTF-8 with lossy replacement.
    #[getter]
    fn label(&self) -> String {
        self.0.label()
    }

    #[getter]
    fn num_obj(&self) -> u32 {
        self.0.num_obj()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __getitem__(&self, index: usize) -> PyResult<PastFrameObj> {
        self.0.get(index).map(PastFrameObj).map_err(to_py_err)
    }

    fn __iter__(&self) -> PastFrameObjListIterator {
        PastFrameObjListIterator(self.0.frames())
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

#[pyclass(unsendable)]
pub struct PastFrameObjListIterator(tracker_meta::PastFrameObjIter);

#[pymethods]
impl PastFrameObjListIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self) -> Option<PastFrameObj> {
        self.0.next().map(PastFrameObj)
    }
}

/// One historical observation of a tracked object.
#[pyclass(unsendable)]
pub struct PastFrameObj(pub(crate) tracker_meta::PastFrameObj);

#[pymethods]
impl PastFrameObj {
    #[getter]
    fn frame_num(&self) -> u32 {
        self.0.frame_num()
    }

    #[getter]
    fn bbox(&self) -> RectParams {
        RectParams(self.0.bbox())
    }

    #[getter]
    fn confidence(&self) -> f32 {
        self.0.confidence()
    }

    #[getter]
    fn age(&self) -> u32 {
        self.0.age()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Generic user metadata container attached by the pipeline
///
/// See [`tracker_meta::UserMeta`] for the extraction contract.
#[pyclass(unsendable)]
pub struct UserMeta(pub(crate) tracker_meta::UserMeta);

#[pymethods]
impl UserMeta {
    /// Wrap a raw user metadata handle.
    ///
    /// Raises `ValueError` on a zero handle; user metadata is a required
    /// input here.
    #[staticmethod]
    fn from_handle(handle: usize) -> PyResult<Self> {
        unsafe { tracker_meta::UserMeta::from_raw(handle as *mut NvDsUserMeta) }
            .map(Self)
            .map_err(to_py_err)
    }

    #[getter]
    fn meta_type(&self) -> i32 {
        self.0.meta_type()
    }

    /// Check whether this user metadata carries a past-frame object batch.
    fn is_past_frame_batch(&self) -> bool {
        self.0.is_past_frame_batch()
    }

    /// Extract the past-frame object batch, or `None` when this container
    /// carries something else.
    fn past_frame_batch(&self) -> Option<PastFrameObjBatch> {
        self.0.past_frame_batch().map(PastFrameObjBatch)
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}
