//! Parser for the line-oriented BTOR2 format.
//!
//! Comments run from `;` to the end of the line; blank lines are skipped.
//! Each remaining line is `<id> <keyword> ...` with a per-keyword shape.

use crate::line::{Line, SortDecl, Tag};
use std::str::FromStr;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, got `{got}`")]
    Expected {
        line: usize,
        expected: &'static str,
        got: String,
    },

    #[error("line {line}: missing {expected}")]
    Missing { line: usize, expected: &'static str },

    #[error("line {line}: unknown operation `{keyword}`")]
    UnknownTag { line: usize, keyword: String },

    #[error("line {line}: trailing tokens after `{after}`")]
    TrailingTokens { line: usize, after: String },
}

/// Parse a whole BTOR2 source text into line records.
pub fn parse(source: &str) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = match raw.find(';') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        lines.push(parse_line(idx + 1, text)?);
    }
    Ok(lines)
}

/// Parse a single non-empty, comment-stripped line.
pub fn parse_line(lineno: usize, text: &str) -> Result<Line> {
    let mut cursor = Cursor::new(lineno, text);

    let id = cursor.uint("node id")?;
    let keyword = cursor.token("operation keyword")?;
    let tag = Tag::from_str(keyword).map_err(|_| ParseError::UnknownTag {
        line: lineno,
        keyword: keyword.to_string(),
    })?;

    let mut line = Line {
        id,
        tag,
        sort: None,
        sort_ref: None,
        args: Vec::new(),
        imm: Vec::new(),
        constant: None,
        symbol: None,
    };

    match tag {
        Tag::Sort => {
            let kind = cursor.token("sort kind")?;
            line.sort = Some(match kind {
                "bitvec" => {
                    let width = cursor.uint("bit-vector width")?;
                    if width == 0 || width > u64::from(u32::MAX) {
                        return Err(ParseError::Expected {
                            line: lineno,
                            expected: "bit-vector width in 1..=4294967295",
                            got: width.to_string(),
                        });
                    }
                    SortDecl::BitVec {
                        width: width as u32,
                    }
                }
                "array" => SortDecl::Array {
                    index: cursor.uint("index sort id")?,
                    element: cursor.uint("element sort id")?,
                },
                other => {
                    return Err(ParseError::Expected {
                        line: lineno,
                        expected: "`bitvec` or `array`",
                        got: other.to_string(),
                    })
                }
            });
            cursor.finish()?;
        }
        Tag::Input | Tag::State => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            line.symbol = cursor.rest_as_symbol();
        }
        Tag::Const | Tag::Constd | Tag::Consth => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            let lit = cursor.token("constant literal")?;
            check_radix(lineno, tag, lit)?;
            line.constant = Some(lit.to_string());
            cursor.finish()?;
        }
        Tag::Zero | Tag::One | Tag::Ones => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            cursor.finish()?;
        }
        // Property-like lines carry node arguments but no sort reference.
        Tag::Output | Tag::Bad | Tag::Constraint | Tag::Fair => {
            line.args.push(cursor.int("node argument")?);
            line.symbol = cursor.rest_as_symbol();
        }
        Tag::Justice => {
            // `justice <num> <ids...>`; kept verbatim, rejected downstream.
            while let Some(arg) = cursor.maybe_int() {
                line.args.push(arg);
            }
            line.symbol = cursor.rest_as_symbol();
        }
        Tag::Slice => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            line.args.push(cursor.int("node argument")?);
            line.imm.push(cursor.uint("upper bit index")?);
            line.imm.push(cursor.uint("lower bit index")?);
            cursor.finish()?;
        }
        Tag::Sext | Tag::Uext => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            line.args.push(cursor.int("node argument")?);
            line.imm.push(cursor.uint("extension width")?);
            cursor.finish()?;
        }
        _ => {
            line.sort_ref = Some(cursor.uint("sort id")?);
            while let Some(arg) = cursor.maybe_int() {
                line.args.push(arg);
            }
            line.symbol = cursor.rest_as_symbol();
        }
    }

    Ok(line)
}

fn check_radix(lineno: usize, tag: Tag, lit: &str) -> Result<()> {
    let (expected, body) = match tag {
        Tag::Const => ("binary literal", lit),
        Tag::Constd => ("decimal literal", lit.strip_prefix('-').unwrap_or(lit)),
        Tag::Consth => ("hexadecimal literal", lit),
        _ => return Ok(()),
    };
    let ok = !body.is_empty()
        && body.chars().all(|c| match tag {
            Tag::Const => c == '0' || c == '1',
            Tag::Constd => c.is_ascii_digit(),
            _ => c.is_ascii_hexdigit(),
        });
    if ok {
        Ok(())
    } else {
        Err(ParseError::Expected {
            line: lineno,
            expected,
            got: lit.to_string(),
        })
    }
}

/// Whitespace token cursor over one line.
struct Cursor<'a> {
    line: usize,
    tokens: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
    last: String,
}

impl<'a> Cursor<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Cursor {
            line,
            tokens: text.split_whitespace().peekable(),
            last: String::new(),
        }
    }

    fn token(&mut self, expected: &'static str) -> Result<&'a str> {
        match self.tokens.next() {
            Some(tok) => {
                self.last = tok.to_string();
                Ok(tok)
            }
            None => Err(ParseError::Missing {
                line: self.line,
                expected,
            }),
        }
    }

    fn uint(&mut self, expected: &'static str) -> Result<u64> {
        let tok = self.token(expected)?;
        tok.parse().map_err(|_| ParseError::Expected {
            line: self.line,
            expected,
            got: tok.to_string(),
        })
    }

    fn int(&mut self, expected: &'static str) -> Result<i64> {
        let tok = self.token(expected)?;
        tok.parse().map_err(|_| ParseError::Expected {
            line: self.line,
            expected,
            got: tok.to_string(),
        })
    }

    /// Consume the next token only if it parses as a signed integer.
    fn maybe_int(&mut self) -> Option<i64> {
        let parsed = self.tokens.peek().and_then(|tok| tok.parse().ok());
        if parsed.is_some() {
            if let Some(tok) = self.tokens.next() {
                self.last = tok.to_string();
            }
        }
        parsed
    }

    /// Remaining tokens, joined, as an optional symbol name.
    fn rest_as_symbol(&mut self) -> Option<String> {
        let rest: Vec<&str> = self.tokens.by_ref().collect();
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.tokens.next().is_some() {
            Err(ParseError::TrailingTokens {
                line: self.line,
                after: self.last.clone(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bitvec_sort() {
        let lines = parse("1 sort bitvec 8\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, 1);
        assert_eq!(lines[0].tag, Tag::Sort);
        assert_eq!(lines[0].sort, Some(SortDecl::BitVec { width: 8 }));
    }

    #[test]
    fn test_parse_zero_width_sort_rejected() {
        let err = parse("1 sort bitvec 0\n").unwrap_err();
        assert!(matches!(err, ParseError::Expected { line: 1, .. }));
    }

    #[test]
    fn test_parse_overwide_sort_rejected() {
        let err = parse("1 sort bitvec 4294967296\n").unwrap_err();
        assert!(matches!(err, ParseError::Expected { line: 1, .. }));
    }

    #[test]
    fn test_parse_array_sort() {
        let lines = parse("3 sort array 1 2\n").unwrap();
        assert_eq!(
            lines[0].sort,
            Some(SortDecl::Array {
                index: 1,
                element: 2
            })
        );
    }

    #[test]
    fn test_parse_input_with_symbol() {
        let lines = parse("2 input 1 reset_line\n").unwrap();
        assert_eq!(lines[0].tag, Tag::Input);
        assert_eq!(lines[0].sort_ref, Some(1));
        assert_eq!(lines[0].symbol.as_deref(), Some("reset_line"));
    }

    #[test]
    fn test_parse_const_literals() {
        let lines = parse("4 const 1 1010\n5 constd 1 42\n6 consth 1 ff\n").unwrap();
        assert_eq!(lines[0].constant.as_deref(), Some("1010"));
        assert_eq!(lines[1].constant.as_deref(), Some("42"));
        assert_eq!(lines[2].constant.as_deref(), Some("ff"));
    }

    #[test]
    fn test_parse_bad_radix_rejected() {
        let err = parse("4 const 1 1021\n").unwrap_err();
        assert!(matches!(err, ParseError::Expected { line: 1, .. }));
    }

    #[test]
    fn test_parse_negated_argument() {
        let lines = parse("7 and 1 5 -6\n").unwrap();
        assert_eq!(lines[0].args, vec![5, -6]);
    }

    #[test]
    fn test_parse_slice_immediates() {
        let lines = parse("8 slice 1 5 7 4\n").unwrap();
        assert_eq!(lines[0].args, vec![5]);
        assert_eq!(lines[0].imm, vec![7, 4]);
    }

    #[test]
    fn test_parse_output_has_no_sort_ref() {
        let lines = parse("9 output 5\n").unwrap();
        assert_eq!(lines[0].sort_ref, None);
        assert_eq!(lines[0].args, vec![5]);
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let src = "; a btor2 file\n\n1 sort bitvec 1 ; the boolean sort\n";
        let lines = parse(src).unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_parse_unknown_keyword() {
        let err = parse("1 frobnicate 2\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownTag { .. }));
    }

    #[test]
    fn test_parse_trailing_tokens_rejected() {
        let err = parse("1 sort bitvec 8 extra\n").unwrap_err();
        assert!(matches!(err, ParseError::TrailingTokens { .. }));
    }
}
