//! Core types for the conv3 stencil convolution.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by the applier, the test fixtures and the benches:
//! runtime grid shapes, owned row-major grids, the 3x3 weight kernel, the
//! edge behavior used for border cells, and the error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod kernel;
pub mod shape;

pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::Grid;
pub use kernel::Kernel3;
pub use shape::Shape;
