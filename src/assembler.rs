//! Source text to UVM machine code.
//!
//! Stage one ([`Assembler::assemble`]) tokenizes and resolves labels into
//! [`SymbolicCommand`]s. Stage two ([`Assembler::generate`]) parses each
//! operand and encodes it. The configured [`ErrorPolicy`] decides whether a
//! bad command in stage two aborts the run or is dropped with a warning.

use tracing::{debug, warn};

use crate::config::{AsmConfig, ErrorPolicy};
use crate::encoder::encode_into;
use crate::error::{AsmError, Result};
use crate::instructions::Mnemonic;
use crate::number::parse_number;
use crate::resolver::{resolve, SymbolicCommand};

/// Every UVM instruction takes exactly one operand.
pub const ARITY: usize = 1;

/// Stage two output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub bytes: Vec<u8>,
    /// Commands dropped under [`ErrorPolicy::BestEffort`], in source order.
    pub diagnostics: Vec<AsmError>,
}

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    pub cfg: AsmConfig,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    pub fn assemble(&self, source: &str) -> Result<Vec<SymbolicCommand>> {
        resolve(source.lines())
    }

    pub fn generate(&self, commands: &[SymbolicCommand]) -> Result<Assembly> {
        let mut out = Assembly::default();
        for cmd in commands {
            match self.encode_command(cmd, &mut out.bytes) {
                Ok(()) => {}
                Err(err) => match self.cfg.errors {
                    ErrorPolicy::FailFast => return Err(err),
                    ErrorPolicy::BestEffort => {
                        warn!(line = cmd.line, "skipping `{cmd}`: {err}");
                        out.diagnostics.push(err);
                    }
                },
            }
        }
        Ok(out)
    }

    /// Both stages.
    pub fn assemble_to_bytes(&self, source: &str) -> Result<Assembly> {
        let commands = self.assemble(source)?;
        self.generate(&commands)
    }

    fn encode_command(&self, cmd: &SymbolicCommand, out: &mut Vec<u8>) -> Result<()> {
        let op = match &cmd.mnemonic {
            Mnemonic::Known(op) => *op,
            Mnemonic::Unsupported(m) => {
                return Err(AsmError::UnknownMnemonic {
                    line: cmd.line,
                    mnemonic: m.clone(),
                })
            }
        };
        let [token] = cmd.operands.as_slice() else {
            return Err(AsmError::ArityMismatch {
                line: cmd.line,
                op,
                expected: ARITY,
                found: cmd.operands.len(),
            });
        };
        let value = parse_number(token).map_err(|source| AsmError::InvalidLiteral {
            line: cmd.line,
            token: token.clone(),
            source,
        })?;
        let start = out.len();
        encode_into(out, op, value, self.cfg.overflow)
            .map_err(|e| AsmError::from_encode(cmd.line, e))?;
        debug!(line = cmd.line, "{op} {value} -> {:02X?}", &out[start..]);
        Ok(())
    }
}

/// Assemble `source` with the default configuration.
pub fn assemble(source: &str) -> Result<Vec<u8>> {
    Ok(Assembler::default().assemble_to_bytes(source)?.bytes)
}
