use strum::{Display, EnumString};

/// Jump field of a C-instruction (3 bits).
/// The variant order matches the bit encoding: GT = bit 0, EQ = bit 1, LT = bit 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    None,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Jump::None);
        }
        s.parse().ok()
    }

    pub fn bits(self) -> u16 {
        self as u16
    }
}

#[test]
fn test() {
    let table = [
        ("", 0b000),
        ("JGT", 0b001),
        ("JEQ", 0b010),
        ("JGE", 0b011),
        ("JLT", 0b100),
        ("JNE", 0b101),
        ("JLE", 0b110),
        ("JMP", 0b111),
    ];
    for (mnemonic, bits) in table {
        assert_eq!(Jump::parse(mnemonic).unwrap().bits(), bits);
    }
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse("JXX"), None);
    assert_eq!(Jump::JNE.to_string(), "JNE");
}
