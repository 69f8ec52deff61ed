//! Reference encodings for the UVM instruction set and the sample program
//! built around them.
//!
//! Operand bytes follow the opcode least-significant first. Older notes on
//! this format describe the operand as most-significant first; these vectors
//! are authoritative and the encoder follows them.

use crate::assembler::Assembler;
use crate::error::AsmError;

pub const CANONICAL: &[(&str, &[u8])] = &[
    ("LOAD 553", &[0xCA, 0x29, 0x02, 0x00]),
    ("READ 268", &[0x9C, 0x0C, 0x01]),
    ("WRITE 617", &[0x5D, 0x69, 0x02, 0x00]),
    ("SUB 455", &[0xAF, 0xC7, 0x01, 0x00]),
];

/// Every canonical vector, once in decimal and once in hex.
pub const SAMPLE_PROGRAM: &str = "\
; UVM sample program
; Each instruction is followed by the bytes it must assemble to.

LOAD 553      ; 0xCA 0x29 0x02 0x00
READ 268      ; 0x9C 0x0C 0x01
WRITE 617     ; 0x5D 0x69 0x02 0x00
SUB 455       ; 0xAF 0xC7 0x01 0x00

; Same values in hex
LOAD 0x229    ; 553
READ 0x10C    ; 268
WRITE 0x269   ; 617
SUB 0x1C7     ; 455
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCheck {
    pub source: &'static str,
    pub expected: &'static [u8],
    pub actual: Result<Vec<u8>, AsmError>,
}

impl VectorCheck {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(bytes) if bytes.as_slice() == self.expected)
    }
}

/// Assemble each canonical vector on its own.
pub fn check(asm: &Assembler) -> Vec<VectorCheck> {
    CANONICAL
        .iter()
        .map(|&(source, expected)| VectorCheck {
            source,
            expected,
            actual: asm.assemble_to_bytes(source).map(|a| a.bytes),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vectors_pass_with_default_config() {
        let results = check(&Assembler::default());
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(VectorCheck::passed));
    }
}
