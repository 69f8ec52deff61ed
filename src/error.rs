use thiserror::Error;

use crate::instructions::Op;

/// Why a numeric operand could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("no digits")]
    Empty,
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    #[error("value does not fit in 64 bits")]
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{op} operand {value:#x} does not fit in {bits} bits")]
    FieldOverflow { op: Op, value: u64, bits: u32 },
}

/// Everything that can go wrong while assembling a program. Line numbers
/// are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: invalid literal {token:?}: {source}")]
    InvalidLiteral {
        line: usize,
        token: String,
        #[source]
        source: LiteralError,
    },
    #[error("line {line}: unresolved label {label:?}")]
    UnresolvedLabel { line: usize, label: String },
    #[error("line {line}: unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic { line: usize, mnemonic: String },
    #[error("line {line}: {op} takes {expected} operand(s), got {found}")]
    ArityMismatch {
        line: usize,
        op: Op,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {op} operand {value:#x} does not fit in {bits} bits")]
    FieldOverflow {
        line: usize,
        op: Op,
        value: u64,
        bits: u32,
    },
    #[error("line {line}: label {label:?} already defined on line {first}")]
    DuplicateLabel {
        line: usize,
        label: String,
        first: usize,
    },
    #[error("line {line}: invalid label name {label:?}")]
    InvalidLabel { line: usize, label: String },
}

impl AsmError {
    pub fn line(&self) -> usize {
        match self {
            AsmError::InvalidLiteral { line, .. }
            | AsmError::UnresolvedLabel { line, .. }
            | AsmError::UnknownMnemonic { line, .. }
            | AsmError::ArityMismatch { line, .. }
            | AsmError::FieldOverflow { line, .. }
            | AsmError::DuplicateLabel { line, .. }
            | AsmError::InvalidLabel { line, .. } => *line,
        }
    }

    pub(crate) fn from_encode(line: usize, err: EncodeError) -> Self {
        match err {
            EncodeError::FieldOverflow { op, value, bits } => AsmError::FieldOverflow {
                line,
                op,
                value,
                bits,
            },
        }
    }
}

pub type Result<T, E = AsmError> = std::result::Result<T, E>;
