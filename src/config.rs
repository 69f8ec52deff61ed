use serde::{Deserialize, Serialize};

pub use crate::encoder::OverflowPolicy;

/// How the assembler reacts to a command it cannot encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first error.
    #[default]
    FailFast,
    /// Warn, drop the command, keep going.
    BestEffort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    pub errors: ErrorPolicy,
    pub overflow: OverflowPolicy,
}

impl AsmConfig {
    pub fn best_effort() -> Self {
        Self {
            errors: ErrorPolicy::BestEffort,
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self {
            errors: ErrorPolicy::FailFast,
            overflow: OverflowPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mask_and_fail_fast() {
        let cfg = AsmConfig::default();
        assert_eq!(cfg.errors, ErrorPolicy::FailFast);
        assert_eq!(cfg.overflow, OverflowPolicy::Mask);
    }

    #[test]
    fn json_round_trip_and_partial() {
        let cfg: AsmConfig = serde_json::from_str(r#"{ "overflow": "reject" }"#).unwrap();
        assert_eq!(cfg, AsmConfig { errors: ErrorPolicy::FailFast, overflow: OverflowPolicy::Reject });
        let text = serde_json::to_string(&AsmConfig::best_effort()).unwrap();
        assert_eq!(text, r#"{"errors":"best-effort","overflow":"mask"}"#);
    }
}
