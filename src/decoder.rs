use serde::{Deserialize, Serialize};

use crate::instructions::Op;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    pub operand: u32,
    pub len: usize,
}

pub trait Decoder {
    /// Decode the instruction at the front of `bytes`.
    fn decode(&self, bytes: &[u8]) -> Option<Decoded>;
}

pub struct UvmDecoder;

impl UvmDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UvmDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for UvmDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<Decoded> {
        let (&opcode, rest) = bytes.split_first()?;
        let op = Op::from_opcode(opcode)?;
        let len = op.desc().len;
        let field = rest.get(..len - 1)?;
        let mut le = [0u8; 4];
        le[..field.len()].copy_from_slice(field);
        Some(Decoded {
            op,
            operand: u32::from_le_bytes(le),
            len,
        })
    }
}

/// Decoded instructions with their byte offsets, stopping at the first
/// offset that does not hold a whole instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub insns: Vec<(usize, Decoded)>,
    /// Offset of the first undecodable byte, if any.
    pub stopped_at: Option<usize>,
}

pub fn decode_all<D: Decoder>(dec: &D, bytes: &[u8]) -> Listing {
    let mut listing = Listing::default();
    let mut off = 0;
    while off < bytes.len() {
        match dec.decode(&bytes[off..]) {
            Some(d) => {
                listing.insns.push((off, d));
                off += d.len;
            }
            None => {
                listing.stopped_at = Some(off);
                break;
            }
        }
    }
    listing
}
