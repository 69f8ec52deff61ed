//! Two-pass label resolution.
//!
//! Pass one walks every line, collecting instructions in order and binding
//! each label to the index the next instruction will get. Pass two rewrites
//! operands that name a label into that index as decimal text, so labels may
//! be referenced before they are defined.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{AsmError, Result};
use crate::instructions::Mnemonic;
use crate::number::looks_numeric;
use crate::tokenizer::{tokenize, Line};

/// One instruction in program order, operands still textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicCommand {
    pub mnemonic: Mnemonic,
    pub operands: Vec<String>,
    /// 1-based source line.
    pub line: usize,
}

impl SymbolicCommand {
    /// A copy with each operand passed through `f`.
    fn map_operands<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&String) -> Result<String>,
    {
        Ok(Self {
            mnemonic: self.mnemonic.clone(),
            operands: self.operands.iter().map(f).collect::<Result<_>>()?,
            line: self.line,
        })
    }
}

impl std::fmt::Display for SymbolicCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        for (i, op) in self.operands.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            f.write_str(op)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct LabelDef {
    index: usize,
    line: usize,
}

/// Label name to instruction index.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: HashMap<String, LabelDef>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str, index: usize, line: usize) -> Result<()> {
        if !is_valid_label(name) {
            return Err(AsmError::InvalidLabel {
                line,
                label: name.to_string(),
            });
        }
        if let Some(prev) = self.labels.get(name) {
            return Err(AsmError::DuplicateLabel {
                line,
                label: name.to_string(),
                first: prev.line,
            });
        }
        debug!(label = name, index, line, "label defined");
        self.labels.insert(name.to_string(), LabelDef { index, line });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).map(|d| d.index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn is_valid_label(name: &str) -> bool {
    !name.is_empty()
        && !looks_numeric(name)
        && !name.chars().any(|c| c.is_whitespace() || c == ',')
}

/// Pass one: collect commands and labels.
pub fn collect<'a, I>(lines: I) -> Result<(Vec<SymbolicCommand>, LabelTable)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut commands = Vec::new();
    let mut labels = LabelTable::new();
    for (i, text) in lines.into_iter().enumerate() {
        let line = i + 1;
        match tokenize(text) {
            Line::Blank => {}
            Line::Label(name) => labels.define(&name, commands.len(), line)?,
            Line::Instruction { mnemonic, operands } => commands.push(SymbolicCommand {
                mnemonic: Mnemonic::parse(&mnemonic),
                operands,
                line,
            }),
        }
    }
    Ok((commands, labels))
}

/// Pass two: substitute label operands. Tokens that are neither a label nor
/// shaped like a number cannot be resolved.
pub fn substitute(commands: &[SymbolicCommand], labels: &LabelTable) -> Result<Vec<SymbolicCommand>> {
    commands
        .iter()
        .map(|cmd| {
            cmd.map_operands(|tok| match labels.get(tok) {
                Some(index) => Ok(index.to_string()),
                None if looks_numeric(tok) => Ok(tok.clone()),
                None => Err(AsmError::UnresolvedLabel {
                    line: cmd.line,
                    label: tok.clone(),
                }),
            })
        })
        .collect()
}

pub fn resolve<'a, I>(lines: I) -> Result<Vec<SymbolicCommand>>
where
    I: IntoIterator<Item = &'a str>,
{
    let (commands, labels) = collect(lines)?;
    substitute(&commands, &labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::Op;

    #[test]
    fn label_binds_to_next_instruction() {
        let src = ["; header", "", "LOAD 1", "there:", "", "; gap", "READ 2"];
        let (cmds, labels) = collect(src).unwrap();
        assert_eq!(cmds.len(), 2);
        assert_eq!(labels.get("there"), Some(1));
        assert_eq!(cmds[1].line, 7);
    }

    #[test]
    fn forward_and_backward_references() {
        let src = ["top:", "LOAD end", "SUB top", "end:", "WRITE 5"];
        let cmds = resolve(src).unwrap();
        assert_eq!(cmds[0].operands, vec!["2"]);
        assert_eq!(cmds[1].operands, vec!["0"]);
        assert_eq!(cmds[2].operands, vec!["5"]);
    }

    #[test]
    fn trailing_label_points_past_end() {
        let (_, labels) = collect(["LOAD 1", "done:"]).unwrap();
        assert_eq!(labels.get("done"), Some(1));
    }

    #[test]
    fn unresolved_label_is_an_error() {
        let err = resolve(["LOAD 1", "WRITE nowhere"]).unwrap_err();
        assert_eq!(
            err,
            AsmError::UnresolvedLabel {
                line: 2,
                label: "nowhere".into()
            }
        );
    }

    #[test]
    fn malformed_literal_is_left_for_number_parser() {
        let cmds = resolve(["LOAD 0xZZ"]).unwrap();
        assert_eq!(cmds[0].operands, vec!["0xZZ"]);
    }

    #[test]
    fn duplicate_and_invalid_labels() {
        let err = resolve(["a:", "LOAD 1", "a:"]).unwrap_err();
        assert_eq!(
            err,
            AsmError::DuplicateLabel {
                line: 3,
                label: "a".into(),
                first: 1
            }
        );
        assert!(matches!(resolve([":"]), Err(AsmError::InvalidLabel { line: 1, .. })));
        assert!(matches!(resolve(["9lives:"]), Err(AsmError::InvalidLabel { .. })));
        assert!(matches!(resolve(["two words:"]), Err(AsmError::InvalidLabel { .. })));
    }

    #[test]
    fn unsupported_mnemonics_still_collected() {
        let cmds = resolve(["nop", "load 3"]).unwrap();
        assert_eq!(cmds[0].mnemonic, Mnemonic::Unsupported("NOP".into()));
        assert_eq!(cmds[1].mnemonic, Mnemonic::Known(Op::Load));
        assert_eq!(cmds[1].to_string(), "LOAD 3");
    }
}
