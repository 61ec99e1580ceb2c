use color_print::cformat;
use std::cell::Cell;

// ----------------------------------------------------------------------------
// Line

/// One source line, classified. The line keeps its raw text and comment for
/// diagnostics and the dump listing; `pc` is set iff the line emits a word.
#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    comment: Option<String>,
    pc: Option<u16>,
    bin: Cell<Option<u16>>,
    stmt: Option<Stmt>,
}

impl Line {
    /// Strips the comment, trims, and classifies `raw`.
    /// `pc` is the ROM address this line would occupy.
    pub fn parse(path: &str, idx: usize, raw: &str, pc: u16) -> Self {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        let stmt = Stmt::parse(code.trim());
        let pc = match stmt {
            Some(Stmt::At(_)) | Some(Stmt::Comp { .. }) => Some(pc),
            _ => None,
        };
        Self {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            comment,
            pc,
            bin: Cell::new(None),
            stmt,
        }
    }

    /// (file, 1-based line number, raw text) for diagnostics.
    pub fn info(&self) -> (&str, usize, &str) {
        (&self.path, self.idx + 1, &self.raw)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn stmt(&self) -> Option<&Stmt> {
        self.stmt.as_ref()
    }

    pub fn pc(&self) -> Option<u16> {
        self.pc
    }

    pub fn set_bin(&self, bin: u16) {
        self.bin.set(Some(bin));
    }
}

impl Line {
    pub fn cformat(&self) -> String {
        let pc = match self.pc {
            Some(pc) => cformat!("<green>{:0>4X}</>", pc),
            None => " ".repeat(4),
        };
        let bin = match self.bin.get() {
            Some(bin) => format!("{:016b}", bin),
            None => " ".repeat(16),
        };
        let stmt = match &self.stmt {
            Some(stmt) => stmt.cformat(),
            None => String::new(),
        };
        let comment = match &self.comment {
            Some(comment) => cformat!("<dim>//{}</>", comment),
            None => String::new(),
        };
        format!("| {:>4} | {} | {} | {} {}", self.idx + 1, pc, bin, stmt, comment)
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@target`
    At(Target),
    /// `(NAME)` — binds NAME to the address of the next instruction.
    /// Occupies no ROM address and emits nothing.
    Label(String),
    /// `dest=comp;jump` with dest and jump optional. Mnemonics stay textual
    /// here; they are only encoded in the second pass.
    Comp {
        dest: String,
        comp: String,
        jump: String,
    },
    /// Structurally unrecognizable command. Emits nothing, advances nothing.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Literal(u16),
    Symbol(String),
}

impl Stmt {
    /// Classifies one normalized command. Total: malformed input becomes
    /// `Invalid`, never an error.
    pub fn parse(code: &str) -> Option<Stmt> {
        if code.is_empty() {
            return None;
        }

        // @value
        if let Some(target) = code.strip_prefix('@') {
            if target.is_empty() {
                return Some(Stmt::Invalid);
            }
            if target.chars().all(|c| c.is_ascii_digit()) {
                return match target.parse::<u16>() {
                    Ok(value) => Some(Stmt::At(Target::Literal(value))),
                    Err(_) => Some(Stmt::Invalid),
                };
            }
            return Some(Stmt::At(Target::Symbol(target.to_string())));
        }

        // (label)
        if let Some(name) = code.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if name.is_empty() {
                return Some(Stmt::Invalid);
            }
            return Some(Stmt::Label(name.to_string()));
        }

        // [dest=]comp[;jump]
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (dest, rest),
            None => ("", code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, jump),
            None => (rest, ""),
        };
        if comp.is_empty() {
            return Some(Stmt::Invalid);
        }
        Some(Stmt::Comp {
            dest: dest.to_string(),
            comp: comp.to_string(),
            jump: jump.to_string(),
        })
    }
}

impl Stmt {
    pub fn cformat(&self) -> String {
        match self {
            Stmt::At(Target::Literal(value)) => cformat!("<blue>@</><yellow>{}</>", value),
            Stmt::At(Target::Symbol(name)) => cformat!("<blue>@</><green>{}</>", name),
            Stmt::Label(name) => cformat!("<green>({})</>", name),
            Stmt::Comp { dest, comp, jump } => {
                let dest = match dest.is_empty() {
                    true => String::new(),
                    false => cformat!("<blue>{}=</>", dest),
                };
                let jump = match jump.is_empty() {
                    true => String::new(),
                    false => cformat!("<magenta>;{}</>", jump),
                };
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
            Stmt::Invalid => cformat!("<red,bold>???</>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(Stmt::parse(""), None);
        assert_eq!(Stmt::parse("@21"), Some(Stmt::At(Target::Literal(21))));
        assert_eq!(
            Stmt::parse("@sum"),
            Some(Stmt::At(Target::Symbol("sum".to_string())))
        );
        assert_eq!(
            Stmt::parse("(LOOP)"),
            Some(Stmt::Label("LOOP".to_string()))
        );
        assert_eq!(
            Stmt::parse("D=M+1;JNE"),
            Some(Stmt::Comp {
                dest: "D".to_string(),
                comp: "M+1".to_string(),
                jump: "JNE".to_string(),
            })
        );
        assert_eq!(
            Stmt::parse("0;JMP"),
            Some(Stmt::Comp {
                dest: "".to_string(),
                comp: "0".to_string(),
                jump: "JMP".to_string(),
            })
        );
        assert_eq!(
            Stmt::parse("M=1"),
            Some(Stmt::Comp {
                dest: "M".to_string(),
                comp: "1".to_string(),
                jump: "".to_string(),
            })
        );
    }

    #[test]
    fn classify_invalid() {
        assert_eq!(Stmt::parse("@"), Some(Stmt::Invalid));
        assert_eq!(Stmt::parse("()"), Some(Stmt::Invalid));
        assert_eq!(Stmt::parse("@99999"), Some(Stmt::Invalid));
        assert_eq!(Stmt::parse("D="), Some(Stmt::Invalid));
        // A digit target with a symbol tail is a symbol, not a literal.
        assert_eq!(
            Stmt::parse("@1x"),
            Some(Stmt::At(Target::Symbol("1x".to_string())))
        );
    }

    #[test]
    fn normalize() {
        let line = Line::parse("t.asm", 0, "  D=A  // copy A ", 3);
        assert_eq!(line.pc(), Some(3));
        assert_eq!(
            line.stmt(),
            Some(&Stmt::Comp {
                dest: "D".to_string(),
                comp: "A".to_string(),
                jump: "".to_string(),
            })
        );

        let blank = Line::parse("t.asm", 1, "   // comment only", 4);
        assert_eq!(blank.pc(), None);
        assert_eq!(blank.stmt(), None);
    }
}
