//! Operation classification and expression emission.
//!
//! `comb_expr` is total over the tag set: it returns `Some(expr)` for a
//! line that becomes a combinational wire, `None` for the structural
//! constructs the driver handles itself (sorts, states, properties, ...),
//! and an error for anything the translation cannot express.

use crate::error::{Result, TranslateError};
use crate::sorts::{Sort, SortTable};
use btor2sv_frontend::{Line, Tag};

/// Operators whose Verilog rendering is the plain unsigned form.
/// Dispatch between prefix and infix happens on argument count.
fn unsigned_op(tag: Tag) -> Option<&'static str> {
    let op = match tag {
        Tag::Add => "+",
        Tag::And => "&",
        Tag::Iff => "==",
        Tag::Mul => "*",
        Tag::Neq => "!=",
        Tag::Neg => "-",
        Tag::Not => "~",
        Tag::Or => "|",
        Tag::Redand => "&",
        Tag::Redor => "|",
        Tag::Redxor => "^",
        Tag::Sll => "<<",
        Tag::Sra => ">>>",
        Tag::Srl => ">>",
        Tag::Sub => "-",
        Tag::Udiv => "/",
        Tag::Ugt => ">",
        Tag::Ugte => ">=",
        Tag::Ult => "<",
        Tag::Ulte => "<=",
        Tag::Urem => "%",
        Tag::Xor => "^",
        _ => return None,
    };
    Some(op)
}

/// Operators that require both operands reinterpreted as signed; Verilog
/// comparison and division default to unsigned.
fn signed_op(tag: Tag) -> Option<&'static str> {
    let op = match tag {
        Tag::Sdiv => "/",
        Tag::Sgt => ">",
        Tag::Sgte => ">=",
        Tag::Slt => "<",
        Tag::Slte => "<=",
        Tag::Srem => "%",
        _ => return None,
    };
    Some(op)
}

/// De Morgan operators, stored as the positive form and complemented on
/// emission.
fn negated_op(tag: Tag) -> Option<&'static str> {
    let op = match tag {
        Tag::Nand => "&",
        Tag::Nor => "|",
        Tag::Xnor => "^",
        _ => return None,
    };
    Some(op)
}

fn expect_arity(line: &Line, args: &[String], n: usize) -> Result<()> {
    if args.len() == n {
        Ok(())
    } else {
        Err(TranslateError::ArityError {
            id: line.id,
            got: args.len(),
        })
    }
}

fn own_width(line: &Line, sorts: &SortTable) -> Result<u32> {
    match sorts.sort_of(line.id)? {
        Sort::BitVec { width } => Ok(width),
        Sort::Array { .. } => Err(TranslateError::UnsupportedSortKind(line.id)),
    }
}

fn immediate(line: &Line, n: usize) -> Result<u64> {
    line.imm.get(n).copied().ok_or(TranslateError::ArityError {
        id: line.id,
        got: line.imm.len(),
    })
}

fn constant_literal(line: &Line) -> Result<&str> {
    line.constant.as_deref().ok_or(TranslateError::ArityError {
        id: line.id,
        got: 0,
    })
}

/// Produce the combinational expression for `line`, if it is a
/// combinational construct. `args` are the already resolved (and, for
/// negative ids, already complemented) operand expressions.
pub fn comb_expr(line: &Line, args: &[String], sorts: &SortTable) -> Result<Option<String>> {
    let expr = match line.tag {
        Tag::Slice => {
            expect_arity(line, args, 1)?;
            let hi = immediate(line, 0)?;
            let lo = immediate(line, 1)?;
            format!("{}[{}:{}]", args[0], hi, lo)
        }
        Tag::Sext => {
            expect_arity(line, args, 1)?;
            let count = immediate(line, 0)?;
            let operand = line.args[0].unsigned_abs();
            let msb = match sorts.sort_of(operand)? {
                Sort::BitVec { width } => width - 1,
                Sort::Array { .. } => return Err(TranslateError::UnsupportedSortKind(line.id)),
            };
            let msb_bit = format!("{}[{}:{}]", args[0], msb, msb);
            format!("{{{{{}{{{}}}}}, {}}}", count, msb_bit, args[0])
        }
        Tag::Uext => {
            expect_arity(line, args, 1)?;
            let count = immediate(line, 0)?;
            if count == 0 {
                // A zero-width literal is not legal Verilog; the operand
                // passes through unchanged.
                args[0].clone()
            } else {
                let zeros = format!("{}'b{}", count, "0".repeat(count as usize));
                format!("{{{}, {}}}", zeros, args[0])
            }
        }
        Tag::Rol | Tag::Ror => {
            return Err(TranslateError::UnsupportedOperation {
                id: line.id,
                tag: line.tag.as_str(),
            })
        }
        Tag::Inc => {
            expect_arity(line, args, 1)?;
            format!("{} + {}'d1", args[0], own_width(line, sorts)?)
        }
        Tag::Dec => {
            expect_arity(line, args, 1)?;
            format!("{} - {}'d1", args[0], own_width(line, sorts)?)
        }
        Tag::Eq => {
            expect_arity(line, args, 2)?;
            let lhs = line.args[0].unsigned_abs();
            let rhs = line.args[1].unsigned_abs();
            if sorts.sort_of(lhs)?.is_array() || sorts.sort_of(rhs)?.is_array() {
                return Err(TranslateError::UnsupportedEquality(line.id));
            }
            format!("{} == {}", args[0], args[1])
        }
        Tag::Implies => {
            expect_arity(line, args, 2)?;
            format!("~{} || {}", args[0], args[1])
        }
        Tag::Concat => {
            expect_arity(line, args, 2)?;
            format!("{{{}, {}}}", args[0], args[1])
        }
        Tag::Ite => {
            expect_arity(line, args, 3)?;
            format!("{} ? {} : {}", args[0], args[1], args[2])
        }
        Tag::Read => {
            expect_arity(line, args, 2)?;
            format!("{}[{}]", args[0], args[1])
        }
        Tag::Const => format!("{}'b{}", own_width(line, sorts)?, constant_literal(line)?),
        Tag::Constd => {
            let width = own_width(line, sorts)?;
            let lit = constant_literal(line)?;
            // The sign must precede the size prefix; `8'd-5` is not
            // legal Verilog.
            match lit.strip_prefix('-') {
                Some(digits) => format!("-{}'d{}", width, digits),
                None => format!("{}'d{}", width, lit),
            }
        }
        Tag::Consth => format!("{}'h{}", own_width(line, sorts)?, constant_literal(line)?),
        Tag::Zero => format!("{}'d0", own_width(line, sorts)?),
        Tag::One => format!("{}'d1", own_width(line, sorts)?),
        Tag::Ones => {
            let width = own_width(line, sorts)?;
            format!("{}'b{}", width, "1".repeat(width as usize))
        }
        tag => {
            if let Some(op) = unsigned_op(tag) {
                match args {
                    [a] => format!("{}{}", op, a),
                    [a, b] => format!("{} {} {}", a, op, b),
                    _ => {
                        return Err(TranslateError::ArityError {
                            id: line.id,
                            got: args.len(),
                        })
                    }
                }
            } else if let Some(op) = signed_op(tag) {
                expect_arity(line, args, 2)?;
                format!("($signed({}) {} $signed({}))", args[0], op, args[1])
            } else if let Some(op) = negated_op(tag) {
                expect_arity(line, args, 2)?;
                format!("~({} {} {})", args[0], op, args[1])
            } else {
                return Ok(None);
            }
        }
    };
    Ok(Some(expr))
}
