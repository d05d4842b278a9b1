//! The single-pass translation driver.
//!
//! One `Translator` holds all mutable state for a run. `process` consumes
//! line records in file order, resolves sorts and argument names, invokes
//! the classifier and fills the side tables the module assembler renders
//! afterwards. State is populated monotonically; nothing is rewritten.

use crate::classify::comb_expr;
use crate::error::{Result, TranslateError};
use crate::sorts::{Sort, SortTable};
use crate::symbols::{SymbolKind, SymbolTable};
use btor2sv_frontend::{Line, SortDecl, Tag};
use indexmap::IndexMap;
use tracing::debug;

/// A recorded array point-update, rendered later as a shadow memory that
/// copies the source array and overwrites one element.
#[derive(Debug, Clone)]
pub struct WriteDescriptor {
    pub array: String,
    pub index: String,
    pub element: String,
    pub index_width: u32,
    pub element_width: u32,
}

#[derive(Debug, Default)]
pub struct Translator {
    pub(crate) sorts: SortTable,
    pub(crate) symbols: SymbolTable,
    pub(crate) inputs: Vec<u64>,
    pub(crate) outputs: Vec<u64>,
    pub(crate) states: Vec<u64>,
    pub(crate) wires: Vec<u64>,
    /// Continuous assignments, generated name to expression, in emission
    /// order.
    pub(crate) wire_assigns: IndexMap<String, String>,
    pub(crate) constraints: Vec<String>,
    /// State id to reset-time expression.
    pub(crate) init: IndexMap<u64, String>,
    /// State id to clocked update expression.
    pub(crate) next: IndexMap<u64, String>,
    /// Safety properties, already negated into invariant form.
    pub(crate) props: Vec<String>,
    pub(crate) writes: IndexMap<String, WriteDescriptor>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line record. Fatal errors abort the run; the caller
    /// must not continue feeding lines after an error.
    pub fn process(&mut self, line: &Line) -> Result<()> {
        // A value line inherits the sort it references before anything
        // looks the line up as an argument.
        if line.tag != Tag::Sort {
            if let Some(sort_ref) = line.sort_ref {
                self.sorts.propagate(line.id, sort_ref)?;
            }
        }

        // Tags with no rendering at all are rejected before argument
        // resolution; their arguments need not be value ids.
        match line.tag {
            Tag::Fair
            | Tag::Justice
            | Tag::Smod
            | Tag::Saddo
            | Tag::Sdivo
            | Tag::Smulo
            | Tag::Ssubo
            | Tag::Uaddo
            | Tag::Umulo
            | Tag::Usubo => {
                return Err(TranslateError::UnsupportedOperation {
                    id: line.id,
                    tag: line.tag.as_str(),
                })
            }
            _ => {}
        }

        // Resolve arguments, folding the negative-id complement
        // convention into the expression text.
        let mut args = Vec::with_capacity(line.args.len());
        for &arg in &line.args {
            args.push(self.symbols.resolve(arg.unsigned_abs(), arg < 0)?);
        }

        if let Some(expr) = comb_expr(line, &args, &self.sorts)? {
            let name = format!("w{}", line.id);
            self.wires.push(line.id);
            self.symbols.bind(line.id, name.clone(), SymbolKind::Wire)?;
            self.wire_assigns.insert(name, expr);
            return Ok(());
        }

        match line.tag {
            Tag::Sort => match line.sort {
                Some(SortDecl::BitVec { width }) => self.sorts.declare_bitvec(line.id, width),
                Some(SortDecl::Array { index, element }) => {
                    self.sorts.declare_array(line.id, index, element)?
                }
                None => {
                    return Err(TranslateError::UnsupportedSortKind(line.id));
                }
            },
            Tag::State => {
                let name = format!("s{}", line.id);
                self.states.push(line.id);
                self.symbols.bind(line.id, name, SymbolKind::State)?;
            }
            Tag::Input => {
                let name = format!("i{}", self.inputs.len());
                self.inputs.push(line.id);
                self.symbols.bind(line.id, name, SymbolKind::Input)?;
            }
            Tag::Output => {
                let driver = self.arg_id(line, 0)?;
                let name = format!("o{}", self.outputs.len());
                self.outputs.push(line.id);
                self.symbols.bind(line.id, name.clone(), SymbolKind::Output)?;
                // The output has no sort reference of its own; it takes
                // the driving node's sort.
                self.sorts.propagate(line.id, driver)?;
                self.wire_assigns.insert(name, args[0].clone());
            }
            Tag::Constraint => {
                self.expect_args(line, &args, 1)?;
                self.constraints.push(args[0].clone());
            }
            Tag::Init => {
                self.expect_args(line, &args, 2)?;
                let state = self.state_arg(line)?;
                let value = if self.sorts.sort_of(line.id)?.is_array() {
                    // Array reset supports uniform fill only.
                    format!("'{{default:{}}}", args[1])
                } else {
                    args[1].clone()
                };
                self.init.insert(state, value);
            }
            Tag::Next => {
                self.expect_args(line, &args, 2)?;
                let state = self.state_arg(line)?;
                self.next.insert(state, args[1].clone());
            }
            Tag::Bad => {
                self.expect_args(line, &args, 1)?;
                // The source condition must never hold; the module
                // asserts its negation as an invariant.
                self.props.push(format!("~{}", args[0]));
            }
            Tag::Write => {
                self.expect_args(line, &args, 3)?;
                let (index_width, element_width) = match self.sorts.sort_of(line.id)? {
                    Sort::Array {
                        index_width,
                        element_width,
                    } => (index_width, element_width),
                    Sort::BitVec { .. } => {
                        return Err(TranslateError::UnsupportedSortKind(line.id))
                    }
                };
                let name = format!("write_{}", line.id);
                self.symbols
                    .bind(line.id, name.clone(), SymbolKind::WriteShadow)?;
                self.writes.insert(
                    name,
                    WriteDescriptor {
                        array: args[0].clone(),
                        index: args[1].clone(),
                        element: args[2].clone(),
                        index_width,
                        element_width,
                    },
                );
            }
            tag => {
                return Err(TranslateError::UnsupportedOperation {
                    id: line.id,
                    tag: tag.as_str(),
                })
            }
        }

        Ok(())
    }

    /// First argument of an `init`/`next` line, checked to name a state.
    /// Clocked assignments to inputs or wires are not legal Verilog.
    fn state_arg(&self, line: &Line) -> Result<u64> {
        let target = self.arg_id(line, 0)?;
        if self.symbols.kind_of(target)? != SymbolKind::State {
            return Err(TranslateError::NotAState {
                id: line.id,
                target,
            });
        }
        Ok(target)
    }

    fn arg_id(&self, line: &Line, n: usize) -> Result<u64> {
        line.args
            .get(n)
            .map(|a| a.unsigned_abs())
            .ok_or(TranslateError::ArityError {
                id: line.id,
                got: line.args.len(),
            })
    }

    fn expect_args(&self, line: &Line, args: &[String], n: usize) -> Result<()> {
        if args.len() == n {
            Ok(())
        } else {
            Err(TranslateError::ArityError {
                id: line.id,
                got: args.len(),
            })
        }
    }
}

/// Translate a full, topologically ordered line stream into one Verilog
/// module named `top`.
pub fn translate(lines: &[Line]) -> Result<String> {
    let mut translator = Translator::new();
    for line in lines {
        debug!(id = line.id, tag = %line.tag, "processing line");
        translator.process(line)?;
    }
    translator.emit()
}
