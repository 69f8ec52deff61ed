use test_strategy::proptest;

use uvm_asm::decoder::{Decoder, UvmDecoder};
use uvm_asm::encoder::{encode, OverflowPolicy};
use uvm_asm::{assemble, Op};

#[proptest]
fn decode_recovers_in_range_operand(#[strategy(0usize..4)] which: usize, value: u32) {
    let op = Op::ALL[which];
    let value = value & op.desc().field_mask();
    let bytes = encode(op, value.into(), OverflowPolicy::Reject).unwrap();
    assert_eq!(bytes.len(), op.desc().len);
    let d = UvmDecoder::new().decode(&bytes).unwrap();
    assert_eq!(d.op, op);
    assert_eq!(d.operand, value);
    assert_eq!(d.len, bytes.len());
}

#[proptest]
fn decimal_and_hex_source_assemble_identically(#[strategy(0u32..=0xFF_FFFF)] value: u32) {
    let dec = assemble(&format!("SUB {value}")).unwrap();
    let hex = assemble(&format!("SUB {value:#x}")).unwrap();
    assert_eq!(dec, hex);
}
