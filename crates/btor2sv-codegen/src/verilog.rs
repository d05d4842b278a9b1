//! Module assembly.
//!
//! Renders the populated translation state as one SystemVerilog module.
//! Runs only after the full pass succeeded; every section is emitted in a
//! fixed order and each table is walked in insertion order, so the same
//! input always yields byte-identical text.

use crate::error::{Result, TranslateError};
use crate::sorts::Sort;
use crate::translate::Translator;

/// `[width-1:0]` part select covering a full vector.
fn full_select(width: u32) -> String {
    format!("[{}:0]", width.saturating_sub(1))
}

/// `[depth-1:0]` memory shape for an array with the given index width.
fn depth_select(index_width: u32) -> String {
    let depth = 1u128 << index_width;
    format!("[{}:0]", depth - 1)
}

impl Translator {
    /// Render the final module text.
    pub fn emit(&self) -> Result<String> {
        let mut sv = String::new();

        // Port list: the fixed clock/reset pair, then every declared
        // input and output. Arrays are illegal at the interface.
        sv.push_str("module top(\n    input rst,\n    input clk");
        for &id in &self.inputs {
            let width = self.port_width(id)?;
            sv.push_str(&format!(
                ",\n    input {} {}",
                full_select(width),
                self.symbols.name_of(id)?
            ));
        }
        for &id in &self.outputs {
            let width = self.port_width(id)?;
            sv.push_str(&format!(
                ",\n    output {} {}",
                full_select(width),
                self.symbols.name_of(id)?
            ));
        }
        sv.push_str("\n);\n");

        if !self.states.is_empty() {
            sv.push_str("\n    // states\n");
            for &id in &self.states {
                let name = self.symbols.name_of(id)?;
                match self.sorts.sort_of(id)? {
                    Sort::BitVec { width } => {
                        sv.push_str(&format!("    reg {} {};\n", full_select(width), name));
                    }
                    Sort::Array {
                        index_width,
                        element_width,
                    } => {
                        sv.push_str(&format!(
                            "    reg {} {} {};\n",
                            full_select(element_width),
                            name,
                            depth_select(index_width)
                        ));
                    }
                }
            }
        }

        if !self.wires.is_empty() {
            sv.push_str("\n    // wires\n");
            for &id in &self.wires {
                let name = self.symbols.name_of(id)?;
                match self.sorts.sort_of(id)? {
                    Sort::BitVec { width } => {
                        sv.push_str(&format!("    wire {} {};\n", full_select(width), name));
                    }
                    Sort::Array {
                        index_width,
                        element_width,
                    } => {
                        sv.push_str(&format!(
                            "    wire {} {} {};\n",
                            full_select(element_width),
                            name,
                            depth_select(index_width)
                        ));
                    }
                }
            }
        }

        if !self.writes.is_empty() {
            sv.push_str("\n    // array write shadow memories\n");
            for (name, desc) in &self.writes {
                sv.push_str(&format!(
                    "    logic {} {} {};\n",
                    full_select(desc.element_width),
                    name,
                    depth_select(desc.index_width)
                ));
            }
        }

        if !self.wire_assigns.is_empty() {
            sv.push_str("\n    // continuous assignments\n");
            for (name, expr) in &self.wire_assigns {
                sv.push_str(&format!("    assign {} = {};\n", name, expr));
            }
        }

        // Read-modify-write semantics for array updates: the shadow
        // memory takes a full copy of the source, then the one indexed
        // element is overwritten.
        if !self.writes.is_empty() {
            sv.push_str("\n    // array writes\n    always_comb begin\n");
            for (name, desc) in &self.writes {
                sv.push_str(&format!("        {} = {};\n", name, desc.array));
                sv.push_str(&format!(
                    "        {}[{}] = {};\n",
                    name, desc.index, desc.element
                ));
            }
            sv.push_str("    end\n");
        }

        sv.push_str(&self.emit_clocked_block()?);

        if !self.constraints.is_empty() {
            sv.push_str("\n    // assumptions\n    always @* begin\n");
            for constraint in &self.constraints {
                sv.push_str(&format!("        assume ({});\n", constraint));
            }
            sv.push_str("    end\n");
        }

        if !self.props.is_empty() {
            sv.push_str("\n    // assertions\n    always @* begin\n");
            for prop in &self.props {
                sv.push_str(&format!("        assert ({});\n", prop));
            }
            sv.push_str("    end\n");
        }

        sv.push_str("\nendmodule\n");
        Ok(sv)
    }

    /// The synchronous update block. Reset is synchronous and dominates
    /// the same-cycle next-state update; when only one of init/next is
    /// recorded the block degenerates to a plain conditional or a plain
    /// assignment list, both well-formed.
    fn emit_clocked_block(&self) -> Result<String> {
        if self.init.is_empty() && self.next.is_empty() {
            return Ok(String::new());
        }

        let mut sv = String::new();
        sv.push_str("\n    // state updates and reset\n");
        sv.push_str("    always @(posedge clk) begin\n");

        if !self.init.is_empty() {
            sv.push_str("        if (rst) begin\n");
            for (&state, value) in &self.init {
                sv.push_str(&format!(
                    "            {} <= {};\n",
                    self.symbols.name_of(state)?,
                    value
                ));
            }
            sv.push_str("        end\n");
        }

        match (self.init.is_empty(), self.next.is_empty()) {
            (false, false) => {
                sv.push_str("        else begin\n");
                for (&state, value) in &self.next {
                    sv.push_str(&format!(
                        "            {} <= {};\n",
                        self.symbols.name_of(state)?,
                        value
                    ));
                }
                sv.push_str("        end\n");
            }
            (true, false) => {
                for (&state, value) in &self.next {
                    sv.push_str(&format!(
                        "        {} <= {};\n",
                        self.symbols.name_of(state)?,
                        value
                    ));
                }
            }
            _ => {}
        }

        sv.push_str("    end\n");
        Ok(sv)
    }

    fn port_width(&self, id: u64) -> Result<u32> {
        match self.sorts.sort_of(id)? {
            Sort::BitVec { width } => Ok(width),
            Sort::Array { .. } => Err(TranslateError::ArrayAtInterface(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TranslateError;
    use crate::translate::translate;
    use btor2sv_frontend::parse;

    fn run(src: &str) -> Result<String, TranslateError> {
        translate(&parse(src)?)
    }

    #[test]
    fn test_header_has_clock_and_reset_first() {
        let src = "\
1 sort bitvec 1
2 input 1
3 output 2
";
        let verilog = run(src).unwrap();
        assert!(verilog.starts_with("module top(\n    input rst,\n    input clk"));
        assert!(verilog.contains("input [0:0] i0"));
        assert!(verilog.contains("output [0:0] o0"));
        assert!(verilog.ends_with("endmodule\n"));
    }

    #[test]
    fn test_array_at_interface_rejected() {
        let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort array 1 2
4 input 3
";
        let err = run(src).unwrap_err();
        assert!(matches!(err, TranslateError::ArrayAtInterface(4)));
    }

    #[test]
    fn test_array_state_declared_as_memory() {
        let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort array 1 2
4 state 3
5 sort bitvec 1
6 input 5
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("reg [7:0] s4 [15:0];"));
    }

    #[test]
    fn test_init_and_next_share_reset_conditional() {
        let src = "\
1 sort bitvec 8
2 state 1
3 zero 1
4 init 1 2 3
5 inc 1 2
6 next 1 2 5
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("always @(posedge clk) begin"));
        assert!(verilog.contains("if (rst) begin\n            s2 <= w3;"));
        assert!(verilog.contains("else begin\n            s2 <= w5;"));
    }

    #[test]
    fn test_next_without_init_is_unconditional() {
        let src = "\
1 sort bitvec 8
2 state 1
3 inc 1 2
4 next 1 2 3
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("always @(posedge clk) begin\n        s2 <= w3;\n    end"));
        assert!(!verilog.contains("if (rst)"));
    }

    #[test]
    fn test_init_without_next_keeps_reset_guard() {
        let src = "\
1 sort bitvec 8
2 state 1
3 zero 1
4 init 1 2 3
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("if (rst) begin\n            s2 <= w3;\n        end\n    end"));
        assert!(!verilog.contains("else"));
    }

    #[test]
    fn test_array_init_is_uniform_fill() {
        let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort array 1 2
4 state 3
5 zero 2
6 init 3 4 5
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("s4 <= '{default:w5};"));
    }

    #[test]
    fn test_write_block_copies_then_overwrites() {
        let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort array 1 2
4 state 3
5 zero 1
6 one 2
7 write 3 4 5 6
8 read 2 7 5
9 next 3 4 7
";
        let verilog = run(src).unwrap();
        assert!(verilog.contains("logic [7:0] write_7 [15:0];"));
        let copy = verilog.find("write_7 = s4;").expect("copy of source array");
        let overwrite = verilog
            .find("write_7[w5] = w6;")
            .expect("indexed overwrite");
        assert!(copy < overwrite);
        assert!(verilog.contains("assign w8 = write_7[w5];"));
    }

    #[test]
    fn test_no_clocked_block_without_state_bindings() {
        let src = "\
1 sort bitvec 1
2 input 1
3 output 2
";
        let verilog = run(src).unwrap();
        assert!(!verilog.contains("posedge"));
    }
}
