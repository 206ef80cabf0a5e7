//! Continuous geometry over a gridrail [`TrackGraph`](gridrail_track::TrackGraph).
//!
//! A [`PathDetail`] turns a position along one [`PathSeg`] into a world
//! pose ([`PathInfo`]). A [`ContinuousPath`] keeps the short window of
//! segments a single train currently needs, growing it at either end as
//! the train moves and shrinking it again through [`PathIter::prune`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod continuous;
pub mod detail;
pub mod error;
pub mod iter;
pub mod path_seg;

pub use config::GeometryConfig;
pub use continuous::ContinuousPath;
pub use detail::{PathDetail, PathInfo, RoundDetail, SquareDetail};
pub use error::{GeometryConstraint, PathError};
pub use iter::{PathIter, Walk};
pub use path_seg::PathSeg;
