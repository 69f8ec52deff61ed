use crate::decoder::Decoded;
use crate::resolver::SymbolicCommand;

pub fn fmt_decoded(d: &Decoded) -> String {
    format!("{} {}", d.op, d.operand)
}

/// Stage-one listing: `"0: LOAD 1"`, one line per resolved command.
pub fn fmt_commands(commands: &[SymbolicCommand]) -> Vec<String> {
    commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{i}: {cmd}"))
        .collect()
}

/// `[0xCA, 0x29]` -> `["0xCA", "0x29"]`
pub fn format_bytes_hex(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| format!("0x{b:02X}")).collect()
}

/// Hex tokens, `per_line` to a line.
pub fn hex_dump(bytes: &[u8], per_line: usize) -> Vec<String> {
    format_bytes_hex(bytes)
        .chunks(per_line.max(1))
        .map(|c| c.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::Op;

    #[test]
    fn formats() {
        let d = Decoded { op: Op::Write, operand: 617, len: 4 };
        assert_eq!(fmt_decoded(&d), "WRITE 617");
        assert_eq!(format_bytes_hex(&[0xCA, 0x0C]), vec!["0xCA", "0x0C"]);
    }

    #[test]
    fn dump_wraps_lines() {
        let bytes: Vec<u8> = (0..10).collect();
        let lines = hex_dump(&bytes, 8);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0x08 0x09");
        assert!(hex_dump(&[], 8).is_empty());
    }
}
