use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::instructions::Op;

/// What to do with an operand wider than its field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Keep the low-order bits.
    #[default]
    Mask,
    /// Fail with `FieldOverflow`.
    Reject,
}

/// Encode one instruction: the opcode byte followed by the operand field,
/// least-significant byte first.
pub fn encode(op: Op, operand: u64, policy: OverflowPolicy) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(op.desc().len);
    encode_into(&mut out, op, operand, policy)?;
    Ok(out)
}

/// Like [`encode`], appending to `out`. Nothing is appended on error.
pub fn encode_into(
    out: &mut Vec<u8>,
    op: Op,
    operand: u64,
    policy: OverflowPolicy,
) -> Result<(), EncodeError> {
    let desc = op.desc();
    let field = operand & u64::from(desc.field_mask());
    if field != operand && policy == OverflowPolicy::Reject {
        return Err(EncodeError::FieldOverflow {
            op,
            value: operand,
            bits: desc.field_bits,
        });
    }
    out.push(desc.opcode);
    out.extend_from_slice(&field.to_le_bytes()[..desc.len - 1]);
    Ok(())
}
