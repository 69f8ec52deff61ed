use std::fmt::Write as _;

use serde::Serialize;

use uvm_asm::decoder::{decode_all, UvmDecoder};

/// One listing row. Bytes that do not start a whole instruction are
/// reported one at a time as `.byte`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub offset: usize,
    pub mnemonic: String,
    pub operand: u32,
    pub bytes: Vec<u8>,
}

pub fn build_listing(bytes: &[u8]) -> Vec<Entry> {
    let listing = decode_all(&UvmDecoder::new(), bytes);
    let mut out: Vec<Entry> = listing
        .insns
        .iter()
        .map(|&(offset, d)| Entry {
            offset,
            mnemonic: d.op.mnemonic().to_string(),
            operand: d.operand,
            bytes: bytes[offset..offset + d.len].to_vec(),
        })
        .collect();
    if let Some(tail) = listing.stopped_at {
        for (i, &b) in bytes[tail..].iter().enumerate() {
            out.push(Entry {
                offset: tail + i,
                mnemonic: ".byte".into(),
                operand: b as u32,
                bytes: vec![b],
            });
        }
    }
    out
}

pub fn render_text(entries: &[Entry], show_bytes: bool) -> String {
    let mut buf = String::new();
    for e in entries {
        let _ = write!(buf, "{:#06x}: ", e.offset);
        if show_bytes {
            for b in &e.bytes {
                let _ = write!(buf, "{b:02x} ");
            }
            // pad to the longest (4-byte) instruction
            for _ in e.bytes.len()..4 {
                buf.push_str("   ");
            }
            buf.push(' ');
        }
        if e.mnemonic == ".byte" {
            let _ = writeln!(buf, ".byte {:#04x}", e.operand);
        } else {
            let _ = writeln!(buf, "{} {}", e.mnemonic, e.operand);
        }
    }
    buf
}
