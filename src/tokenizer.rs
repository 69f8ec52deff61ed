/// Line comment marker.
pub const COMMENT: char = ';';

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Label(String),
    Instruction {
        /// Upper-cased.
        mnemonic: String,
        operands: Vec<String>,
    },
}

pub fn tokenize(line: &str) -> Line {
    let mut s = line.trim();
    if let Some(p) = s.find(COMMENT) {
        s = s[..p].trim();
    }
    if s.is_empty() {
        return Line::Blank;
    }
    if let Some(name) = s.strip_suffix(':') {
        return Line::Label(name.trim().to_string());
    }

    let mut parts = s.split_whitespace();
    let Some(mn) = parts.next() else {
        return Line::Blank;
    };
    let operands = parts
        .flat_map(|p| p.split(','))
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();
    Line::Instruction {
        mnemonic: mn.to_uppercase(),
        operands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(mn: &str, ops: &[&str]) -> Line {
        Line::Instruction {
            mnemonic: mn.to_string(),
            operands: ops.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn blanks_and_comments() {
        assert_eq!(tokenize(""), Line::Blank);
        assert_eq!(tokenize("   \t "), Line::Blank);
        assert_eq!(tokenize("; just a comment"), Line::Blank);
        assert_eq!(tokenize("   ;indented comment"), Line::Blank);
    }

    #[test]
    fn labels() {
        assert_eq!(tokenize("LOOP:"), Line::Label("LOOP".into()));
        assert_eq!(tokenize("  end:   ; trailing"), Line::Label("end".into()));
        assert_eq!(tokenize(":"), Line::Label(String::new()));
    }

    #[test]
    fn instructions() {
        assert_eq!(tokenize("load 553"), instr("LOAD", &["553"]));
        assert_eq!(
            tokenize("  Write 0x269   ; store it"),
            instr("WRITE", &["0x269"])
        );
        assert_eq!(tokenize("SUB"), instr("SUB", &[]));
    }

    #[test]
    fn comma_joined_operands_are_split() {
        assert_eq!(tokenize("READ a,b"), instr("READ", &["a", "b"]));
        assert_eq!(tokenize("READ a, b"), instr("READ", &["a", "b"]));
        assert_eq!(tokenize("READ a,,b,"), instr("READ", &["a", "b"]));
        assert_eq!(tokenize("READ ,"), instr("READ", &[]));
    }

    #[test]
    fn comment_inside_label_line_wins() {
        // The colon is commented out, so this is an instruction line.
        assert_eq!(tokenize("foo ; bar:"), instr("FOO", &[]));
    }
}
