//! Catalog of multi-fidelity benchmark problems.
//!
//! Each module defines the batched formulas of one problem and a lazily
//! built, process-wide container exposing them.

pub mod adjustable;
pub mod bohachevsky;
pub mod booth;
pub mod borehole;
pub mod branin;
pub mod currin;
pub mod forrester;
pub mod hartmann6;
pub mod himmelblau;
pub mod park91a;
pub mod park91b;
pub mod six_hump_camelback;

pub use adjustable::*;
pub use bohachevsky::*;
pub use booth::*;
pub use borehole::*;
pub use branin::*;
pub use currin::*;
pub use forrester::*;
pub use hartmann6::*;
pub use himmelblau::*;
pub use park91a::*;
pub use park91b::*;
pub use six_hump_camelback::*;
