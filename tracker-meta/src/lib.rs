//! Safe Rust API for NVIDIA DeepStream tracker past-frame metadata
//!
//! This crate wraps the `NvDsPastFrameObj*` structures the tracker plugin
//! attaches to a processed batch: re-identification history for objects
//! that disappeared and reappeared within the tracking window.
//!
//! All wrappers are non-owning views over memory allocated and freed by the
//! tracker as part of its buffer-pool lifecycle. Every child view holds a
//! back-reference to its parent wrapper, so a parent is never dropped while
//! a derived view is still reachable on the Rust side; keeping any view past
//! the tracker's own buffer lifetime is a documented external contract the
//! binding cannot enforce.
//!
//! # Example
//!
//! ```no_run
//! use tracker_meta::UserMeta;
//!
//! # fn example(raw: *mut tracker_meta::sys::NvDsUserMeta) -> tracker_meta::Result<()> {
//! let user_meta = unsafe { UserMeta::from_raw(raw)? };
//! if let Some(batch) = user_meta.past_frame_batch() {
//!     for stream in batch.streams() {
//!         for object in stream.objects() {
//!             for frame in object.frames() {
//!                 println!(
//!                     "object {} seen in frame {} at {:?}",
//!                     object.unique_id(),
//!                     frame.frame_num(),
//!                     frame.bbox()
//!                 );
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod object_list;
pub mod past_frame_obj;
pub mod stream;
pub mod types;
pub mod user_meta;

pub use batch::{PastFrameObjBatch, StreamIter};
pub use error::TrackerMetaError;
pub use object_list::{PastFrameObjIter, PastFrameObjList};
pub use past_frame_obj::PastFrameObj;
pub use stream::{ObjectListIter, PastFrameObjStream};
pub use types::RectParams;
pub use user_meta::UserMeta;

/// Result type for past-frame metadata operations
pub type Result<T> = std::result::Result<T, TrackerMetaError>;

/// Re-export the raw sys crate for advanced usage
pub use tracker_meta_sys as sys;

pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
