use crate::error::Error;
use crate::msg::Msg;
use crate::parser::{Line, Stmt, Target};
use crate::symbols::Symbols;
use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, symbol::VAR_BASE};

// ----------------------------------------------------------------------------
// Pass 1: parse lines and bind labels to ROM addresses

/// Parses one source file into classified lines, binding every label to the
/// ROM address of the next real instruction. `pc` carries the ROM address
/// across files, so several sources share one address space.
pub fn parse_source(path: &str, src: &str, pc: &mut u16, symbols: &mut Symbols) -> Vec<Line> {
    let mut lines = vec![];
    for (idx, raw) in src.lines().enumerate() {
        let line = Line::parse(path, idx, raw, *pc);
        if line.pc().is_some() {
            *pc += 1;
        }
        if let Some(Stmt::Label(name)) = line.stmt() {
            if !symbols.insert(name, *pc) {
                Msg::Warn(format!(
                    "Re-defined symbol `{}`; keeping the first binding ({})",
                    name,
                    symbols.get(name).unwrap_or(0),
                ))
                .diag(line.info());
            }
        }
        lines.push(line);
    }
    lines
}

// ----------------------------------------------------------------------------
// Pass 2: resolve variables and encode

/// Encodes every emittable line into a 16-bit word, in source order.
/// Symbolic A-instructions not found in the table are variables: they get
/// the next free RAM slot, in first-use order.
///
/// Permissive by default: unknown mnemonics encode as zero bits and invalid
/// lines are skipped, with a warning each. With `strict` both abort instead.
pub fn encode(lines: &[Line], symbols: &mut Symbols, strict: bool) -> Result<Vec<u16>, Error> {
    let mut ram = VAR_BASE;
    let mut words = vec![];
    for line in lines {
        let inst = match line.stmt() {
            Some(Stmt::At(Target::Literal(value))) => Inst::A(*value),
            Some(Stmt::At(Target::Symbol(name))) => {
                let addr = match symbols.get(name) {
                    Some(addr) => addr,
                    None => {
                        symbols.insert(name, ram);
                        ram += 1;
                        ram - 1
                    }
                };
                Inst::A(addr)
            }
            Some(Stmt::Comp { dest, comp, jump }) => Inst::C(
                field(Dest::parse(dest), "dest", dest, strict, line)?,
                field(Comp::parse(comp), "comp", comp, strict, line)?,
                field(Jump::parse(jump), "jump", jump, strict, line)?,
            ),
            Some(Stmt::Invalid) => {
                let (_, _, raw) = line.info();
                let command = raw.trim().to_string();
                if strict {
                    Msg::Error(format!("Cannot parse `{}` as an instruction", command))
                        .diag(line.info());
                    return Err(Error::InvalidCommand(command));
                }
                Msg::Warn(format!("Cannot parse `{}` as an instruction; skipped", command))
                    .diag(line.info());
                continue;
            }
            Some(Stmt::Label(_)) | None => continue,
        };
        let bin = inst.to_bin();
        line.set_bin(bin);
        words.push(bin);
    }
    Ok(words)
}

/// Applies the unknown-mnemonic policy: zero bits plus a warning, or a hard
/// error under `strict`.
fn field<T: Default>(
    parsed: Option<T>,
    kind: &'static str,
    text: &str,
    strict: bool,
    line: &Line,
) -> Result<T, Error> {
    match parsed {
        Some(value) => Ok(value),
        None if strict => {
            Msg::Error(format!("Unknown {} mnemonic `{}`", kind, text)).diag(line.info());
            Err(Error::UnknownMnemonic {
                kind,
                text: text.to_string(),
            })
        }
        None => {
            Msg::Warn(format!(
                "Unknown {} mnemonic `{}`; encoded as zero bits",
                kind, text
            ))
            .diag(line.info());
            Ok(T::default())
        }
    }
}
