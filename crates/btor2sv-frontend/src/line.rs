//! Line records and operation tags for the BTOR2 format.

use std::fmt;
use std::str::FromStr;

/// Every operation keyword defined by BTOR2.
///
/// The set is closed; the translator decides per tag whether it is
/// supported. Keeping the unsupported tags (`rol`, `fair`, the overflow
/// checks, ...) in the enum lets the parser accept any well-formed file
/// and lets the translator report a precise diagnostic instead of a
/// parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    // structure
    Sort,
    Input,
    Output,
    State,
    Init,
    Next,
    Bad,
    Constraint,
    Fair,
    Justice,
    // constants
    Const,
    Constd,
    Consth,
    Zero,
    One,
    Ones,
    // bit-vector operations
    Add,
    And,
    Concat,
    Dec,
    Eq,
    Iff,
    Implies,
    Inc,
    Ite,
    Mul,
    Nand,
    Neg,
    Neq,
    Nor,
    Not,
    Or,
    Read,
    Redand,
    Redor,
    Redxor,
    Rol,
    Ror,
    Sdiv,
    Sext,
    Sgt,
    Sgte,
    Slice,
    Sll,
    Slt,
    Slte,
    Smod,
    Sra,
    Srem,
    Srl,
    Sub,
    Udiv,
    Uext,
    Ugt,
    Ugte,
    Ult,
    Ulte,
    Urem,
    Write,
    Xnor,
    Xor,
    // overflow checks
    Saddo,
    Sdivo,
    Smulo,
    Ssubo,
    Uaddo,
    Umulo,
    Usubo,
}

impl Tag {
    /// The BTOR2 keyword for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Sort => "sort",
            Tag::Input => "input",
            Tag::Output => "output",
            Tag::State => "state",
            Tag::Init => "init",
            Tag::Next => "next",
            Tag::Bad => "bad",
            Tag::Constraint => "constraint",
            Tag::Fair => "fair",
            Tag::Justice => "justice",
            Tag::Const => "const",
            Tag::Constd => "constd",
            Tag::Consth => "consth",
            Tag::Zero => "zero",
            Tag::One => "one",
            Tag::Ones => "ones",
            Tag::Add => "add",
            Tag::And => "and",
            Tag::Concat => "concat",
            Tag::Dec => "dec",
            Tag::Eq => "eq",
            Tag::Iff => "iff",
            Tag::Implies => "implies",
            Tag::Inc => "inc",
            Tag::Ite => "ite",
            Tag::Mul => "mul",
            Tag::Nand => "nand",
            Tag::Neg => "neg",
            Tag::Neq => "neq",
            Tag::Nor => "nor",
            Tag::Not => "not",
            Tag::Or => "or",
            Tag::Read => "read",
            Tag::Redand => "redand",
            Tag::Redor => "redor",
            Tag::Redxor => "redxor",
            Tag::Rol => "rol",
            Tag::Ror => "ror",
            Tag::Sdiv => "sdiv",
            Tag::Sext => "sext",
            Tag::Sgt => "sgt",
            Tag::Sgte => "sgte",
            Tag::Slice => "slice",
            Tag::Sll => "sll",
            Tag::Slt => "slt",
            Tag::Slte => "slte",
            Tag::Smod => "smod",
            Tag::Sra => "sra",
            Tag::Srem => "srem",
            Tag::Srl => "srl",
            Tag::Sub => "sub",
            Tag::Udiv => "udiv",
            Tag::Uext => "uext",
            Tag::Ugt => "ugt",
            Tag::Ugte => "ugte",
            Tag::Ult => "ult",
            Tag::Ulte => "ulte",
            Tag::Urem => "urem",
            Tag::Write => "write",
            Tag::Xnor => "xnor",
            Tag::Xor => "xor",
            Tag::Saddo => "saddo",
            Tag::Sdivo => "sdivo",
            Tag::Smulo => "smulo",
            Tag::Ssubo => "ssubo",
            Tag::Uaddo => "uaddo",
            Tag::Umulo => "umulo",
            Tag::Usubo => "usubo",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "sort" => Tag::Sort,
            "input" => Tag::Input,
            "output" => Tag::Output,
            "state" => Tag::State,
            "init" => Tag::Init,
            "next" => Tag::Next,
            "bad" => Tag::Bad,
            "constraint" => Tag::Constraint,
            "fair" => Tag::Fair,
            "justice" => Tag::Justice,
            "const" => Tag::Const,
            "constd" => Tag::Constd,
            "consth" => Tag::Consth,
            "zero" => Tag::Zero,
            "one" => Tag::One,
            "ones" => Tag::Ones,
            "add" => Tag::Add,
            "and" => Tag::And,
            "concat" => Tag::Concat,
            "dec" => Tag::Dec,
            "eq" => Tag::Eq,
            "iff" => Tag::Iff,
            "implies" => Tag::Implies,
            "inc" => Tag::Inc,
            "ite" => Tag::Ite,
            "mul" => Tag::Mul,
            "nand" => Tag::Nand,
            "neg" => Tag::Neg,
            "neq" => Tag::Neq,
            "nor" => Tag::Nor,
            "not" => Tag::Not,
            "or" => Tag::Or,
            "read" => Tag::Read,
            "redand" => Tag::Redand,
            "redor" => Tag::Redor,
            "redxor" => Tag::Redxor,
            "rol" => Tag::Rol,
            "ror" => Tag::Ror,
            "sdiv" => Tag::Sdiv,
            "sext" => Tag::Sext,
            "sgt" => Tag::Sgt,
            "sgte" => Tag::Sgte,
            "slice" => Tag::Slice,
            "sll" => Tag::Sll,
            "slt" => Tag::Slt,
            "slte" => Tag::Slte,
            "smod" => Tag::Smod,
            "sra" => Tag::Sra,
            "srem" => Tag::Srem,
            "srl" => Tag::Srl,
            "sub" => Tag::Sub,
            "udiv" => Tag::Udiv,
            "uext" => Tag::Uext,
            "ugt" => Tag::Ugt,
            "ugte" => Tag::Ugte,
            "ult" => Tag::Ult,
            "ulte" => Tag::Ulte,
            "urem" => Tag::Urem,
            "write" => Tag::Write,
            "xnor" => Tag::Xnor,
            "xor" => Tag::Xor,
            "saddo" => Tag::Saddo,
            "sdivo" => Tag::Sdivo,
            "smulo" => Tag::Smulo,
            "ssubo" => Tag::Ssubo,
            "uaddo" => Tag::Uaddo,
            "umulo" => Tag::Umulo,
            "usubo" => Tag::Usubo,
            _ => return Err(()),
        };
        Ok(tag)
    }
}

/// Sort declaration carried by a `sort` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDecl {
    /// `sort bitvec <width>`
    BitVec { width: u32 },
    /// `sort array <index_sort_id> <element_sort_id>`
    Array { index: u64, element: u64 },
}

/// One parsed BTOR2 line.
///
/// A negative entry in `args` denotes the bitwise complement of the node
/// at its absolute value. Immediates (slice bounds, extension counts) are
/// literal integers, never node ids, and live in `imm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: u64,
    pub tag: Tag,
    /// Own sort definition, only for `sort` lines.
    pub sort: Option<SortDecl>,
    /// Sort reference, for every value-producing line that carries one.
    pub sort_ref: Option<u64>,
    pub args: Vec<i64>,
    pub imm: Vec<u64>,
    /// Constant literal for `const`/`constd`/`consth`, radix per tag.
    pub constant: Option<String>,
    /// Optional trailing symbol name (inputs, states, outputs, bad).
    pub symbol: Option<String>,
}
