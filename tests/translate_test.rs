//! End-to-end translation tests: BTOR2 source text in, SystemVerilog out.

use btor2sv_codegen::translate;
use btor2sv_frontend::parse;

fn run(src: &str) -> String {
    let lines = parse(src).expect("parse should succeed");
    translate(&lines).expect("translation should succeed")
}

#[test]
fn test_counter_full_module() {
    let src = "\
1 sort bitvec 8
2 input 1
3 state 1
4 add 1 3 2
5 next 1 3 4
6 zero 1
7 init 1 3 6
8 output 3
9 sort bitvec 1
10 ugt 9 3 6
11 bad 10
12 constraint 10
";
    let expected = "\
module top(
    input rst,
    input clk,
    input [7:0] i0,
    output [7:0] o0
);

    // states
    reg [7:0] s3;

    // wires
    wire [7:0] w4;
    wire [7:0] w6;
    wire [0:0] w10;

    // continuous assignments
    assign w4 = s3 + i0;
    assign w6 = 8'd0;
    assign o0 = s3;
    assign w10 = s3 > w6;

    // state updates and reset
    always @(posedge clk) begin
        if (rst) begin
            s3 <= w6;
        end
        else begin
            s3 <= w4;
        end
    end

    // assumptions
    always @* begin
        assume (w10);
    end

    // assertions
    always @* begin
        assert (~w10);
    end

endmodule
";
    assert_eq!(run(src), expected);
}

#[test]
fn test_translation_is_deterministic() {
    let src = "\
1 sort bitvec 4
2 input 1
3 input 1
4 xor 1 2 3
5 nand 1 2 3
6 concat 1 4 5
7 output 6
";
    let first = run(src);
    let second = run(src);
    assert_eq!(first, second);
}

#[test]
fn test_declared_width_matches_sort() {
    // concat of a 4-bit and an 8-bit operand lands in a 12-bit sort and
    // must be declared with exactly that width.
    let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort bitvec 12
4 input 1
5 input 2
6 concat 3 4 5
7 output 6
";
    let verilog = run(src);
    assert!(verilog.contains("wire [11:0] w6;"));
    assert!(verilog.contains("assign w6 = {i0, i1};"));
    assert!(verilog.contains("output [11:0] o0"));
}

#[test]
fn test_binary_constant_roundtrip() {
    let src = "\
1 sort bitvec 4
2 const 1 1010
3 output 2
";
    let verilog = run(src);
    assert!(verilog.contains("assign w2 = 4'b1010;"));
}

#[test]
fn test_nand_emits_complemented_and() {
    let src = "\
1 sort bitvec 1
2 input 1
3 input 1
4 nand 1 2 3
5 output 4
";
    let verilog = run(src);
    assert!(verilog.contains("assign w4 = ~(i0 & i1);"));
}

#[test]
fn test_signed_compare_casts_operands() {
    let src = "\
1 sort bitvec 8
2 input 1
3 input 1
4 sort bitvec 1
5 slt 4 2 3
6 output 5
";
    let verilog = run(src);
    assert!(verilog.contains("assign w5 = ($signed(i0) < $signed(i1));"));
}

#[test]
fn test_bad_property_asserts_negation() {
    let src = "\
1 sort bitvec 1
2 input 1
3 bad 2
";
    let verilog = run(src);
    assert!(verilog.contains("assert (~i0);"));
}

#[test]
fn test_zero_width_extension_is_identity() {
    let src = "\
1 sort bitvec 8
2 input 1
3 uext 1 2 0
4 output 3
";
    let verilog = run(src);
    assert!(verilog.contains("assign w3 = i0;"));
}

#[test]
fn test_write_then_read_goes_through_shadow() {
    let src = "\
1 sort bitvec 4
2 sort bitvec 8
3 sort array 1 2
4 state 3
5 input 1
6 input 2
7 write 3 4 5 6
8 read 2 7 5
9 next 3 4 7
10 output 8
";
    let verilog = run(src);
    // Copy first, single-element overwrite second, read from the shadow.
    let copy = verilog.find("write_7 = s4;").expect("shadow copy");
    let overwrite = verilog.find("write_7[i0] = i1;").expect("shadow overwrite");
    assert!(copy < overwrite);
    assert!(verilog.contains("assign w8 = write_7[i0];"));
    assert!(verilog.contains("s4 <= write_7;"));
}

#[test]
fn test_implication_and_ite() {
    let src = "\
1 sort bitvec 1
2 input 1
3 input 1
4 implies 1 2 3
5 ite 1 4 2 3
6 output 5
";
    let verilog = run(src);
    assert!(verilog.contains("assign w4 = ~i0 || i1;"));
    assert!(verilog.contains("assign w5 = w4 ? i0 : i1;"));
}

#[test]
fn test_sign_extension_replicates_msb() {
    let src = "\
1 sort bitvec 8
2 input 1
3 sort bitvec 12
4 sext 3 2 4
5 output 4
";
    let verilog = run(src);
    assert!(verilog.contains("assign w4 = {{4{i0[7:7]}}, i0};"));
}

#[test]
fn test_slice_selects_bit_range() {
    let src = "\
1 sort bitvec 8
2 input 1
3 sort bitvec 4
4 slice 3 2 7 4
5 output 4
";
    let verilog = run(src);
    assert!(verilog.contains("assign w4 = i0[7:4];"));
}
