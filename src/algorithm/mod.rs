//! Graph algorithms
//!
//! Each family is an extension trait implemented for every [`QueryableGraph`](crate::graph::QueryableGraph).
mod traversal;
pub use self::traversal::*;
mod cycle;
pub use self::cycle::*;
mod closure;
pub use self::closure::*;
mod pre_post;
pub use self::pre_post::*;
mod clone;
pub use self::clone::*;
