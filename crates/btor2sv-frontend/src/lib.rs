//! BTOR2 frontend
//!
//! Reads the line-oriented BTOR2 format into `Line` records. Each record
//! carries the node id, the operation tag, either an own sort declaration
//! (for `sort` lines) or a sort reference, the signed argument ids, any
//! integer immediates (slice bounds, extension counts) and the constant
//! literal for constant nodes.
//!
//! The frontend only checks per-line well-formedness. The BTOR2 format
//! guarantees that a well-formed file lists every node after the nodes it
//! refers to; consumers rely on that ordering and report dangling ids as
//! unbound references rather than re-sorting the graph.

pub mod line;
pub mod parse;

pub use line::{Line, SortDecl, Tag};
pub use parse::{parse, ParseError};
