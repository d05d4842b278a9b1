//! BTOR2 to SystemVerilog translation core.
//!
//! One strictly sequential pass over the parsed line records populates
//! the sort and symbol tables and the emission side tables; the module
//! assembler then renders a single `top` module. Any fatal condition
//! aborts the pass before assembly, so the caller gets either a complete
//! module or an error, never a partial artifact.

pub mod classify;
pub mod error;
pub mod sorts;
pub mod symbols;
pub mod translate;
pub mod verilog;

pub use error::{Result, TranslateError};
pub use sorts::{Sort, SortTable};
pub use symbols::{SymbolKind, SymbolTable};
pub use translate::{translate, Translator, WriteDescriptor};
