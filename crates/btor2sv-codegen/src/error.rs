//! Error types for the translation core.
//!
//! Every error here is fatal to the run: translation aborts on the first
//! one and no partial Verilog is returned.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("multi-dimensional arrays are not supported (sort at id {0})")]
    UnsupportedSortKind(u64),

    #[error("unsupported operation `{tag}` at id {id}")]
    UnsupportedOperation { id: u64, tag: &'static str },

    #[error("array index width {width} at id {id} exceeds the supported range")]
    IndexWidthTooLarge { id: u64, width: u32 },

    #[error("id {target} referenced at id {id} is not a state")]
    NotAState { id: u64, target: u64 },

    #[error("unexpected number of arguments at id {id}: got {got}")]
    ArityError { id: u64, got: usize },

    #[error("array equality is not supported (id {0})")]
    UnsupportedEquality(u64),

    #[error("cannot have an array-typed port at the module interface (id {0})")]
    ArrayAtInterface(u64),

    #[error("reference to unbound id {0}")]
    UnboundReference(u64),

    #[error("id {0} is already bound")]
    DuplicateBinding(u64),

    #[error("malformed input: {0}")]
    MalformedInput(#[from] btor2sv_frontend::ParseError),
}
