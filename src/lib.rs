pub mod assembler;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod error;
pub mod instructions;
pub mod number;
pub mod resolver;
pub mod tokenizer;
pub mod vectors;

pub use assembler::{assemble, Assembler, Assembly};
pub use config::{AsmConfig, ErrorPolicy, OverflowPolicy};
pub use error::{AsmError, EncodeError, LiteralError};
pub use instructions::{Mnemonic, Op};
pub use resolver::SymbolicCommand;
