use serde::{Deserialize, Serialize};

/// The four UVM instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Load a constant into the accumulator.
    Load,
    /// Read a value from memory at an offset.
    Read,
    /// Write the accumulator to memory.
    Write,
    /// Subtract a memory operand from the accumulator.
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub opcode: u8,
    /// Width of the operand field ("field B") in bits.
    pub field_bits: u32,
    /// Total encoded length in bytes, opcode included.
    pub len: usize,
}

impl OpcodeDesc {
    pub const fn field_mask(&self) -> u32 {
        (1u32 << self.field_bits) - 1
    }
}

pub static LOAD: OpcodeDesc = OpcodeDesc {
    op: Op::Load,
    mnemonic: "LOAD",
    opcode: 0xCA,
    field_bits: 24,
    len: 4,
};

pub static READ: OpcodeDesc = OpcodeDesc {
    op: Op::Read,
    mnemonic: "READ",
    opcode: 0x9C,
    field_bits: 16,
    len: 3,
};

pub static WRITE: OpcodeDesc = OpcodeDesc {
    op: Op::Write,
    mnemonic: "WRITE",
    opcode: 0x5D,
    field_bits: 24,
    len: 4,
};

pub static SUB: OpcodeDesc = OpcodeDesc {
    op: Op::Sub,
    mnemonic: "SUB",
    opcode: 0xAF,
    field_bits: 24,
    len: 4,
};

/// Every descriptor, for lookups by mnemonic or opcode. Order is not significant.
pub static TABLE: [&OpcodeDesc; 4] = [&LOAD, &READ, &WRITE, &SUB];

impl Op {
    pub const ALL: [Op; 4] = [Op::Load, Op::Read, Op::Write, Op::Sub];

    pub fn desc(self) -> &'static OpcodeDesc {
        match self {
            Op::Load => &LOAD,
            Op::Read => &READ,
            Op::Write => &WRITE,
            Op::Sub => &SUB,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }

    /// Look up an upper-cased mnemonic.
    pub fn from_mnemonic(s: &str) -> Option<Op> {
        TABLE.iter().find(|d| d.mnemonic == s).map(|d| d.op)
    }

    pub fn from_opcode(opcode: u8) -> Option<Op> {
        TABLE.iter().find(|d| d.opcode == opcode).map(|d| d.op)
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A case-normalized mnemonic as it appeared in source. Anything outside the
/// instruction set is kept verbatim so it can be reported later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mnemonic {
    Known(Op),
    Unsupported(String),
}

impl Mnemonic {
    /// `s` must already be upper-cased.
    pub fn parse(s: &str) -> Self {
        match Op::from_mnemonic(s) {
            Some(op) => Mnemonic::Known(op),
            None => Mnemonic::Unsupported(s.to_string()),
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mnemonic::Known(op) => op.fmt(f),
            Mnemonic::Unsupported(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_consistent_with_desc() {
        for op in Op::ALL {
            let d = op.desc();
            assert_eq!(d.op, op);
            assert_eq!(d.len, 1 + (d.field_bits as usize) / 8);
            assert_eq!(Op::from_opcode(d.opcode), Some(op));
            assert_eq!(Op::from_mnemonic(d.mnemonic), Some(op));
        }
    }

    #[test]
    fn table_covers_each_op_once() {
        for op in Op::ALL {
            let hits = TABLE.iter().filter(|d| d.op == op).count();
            assert_eq!(hits, 1, "{op}");
            assert!(TABLE.iter().any(|d| std::ptr::eq(*d, op.desc())));
        }
        let mut opcodes: Vec<u8> = TABLE.iter().map(|d| d.opcode).collect();
        opcodes.sort_unstable();
        opcodes.dedup();
        assert_eq!(opcodes.len(), TABLE.len());
    }

    #[test]
    fn unsupported_mnemonic_is_kept() {
        assert_eq!(Mnemonic::parse("ADD"), Mnemonic::Unsupported("ADD".into()));
        assert_eq!(Mnemonic::parse("SUB"), Mnemonic::Known(Op::Sub));
        assert_eq!(Op::from_opcode(0x00), None);
    }
}
