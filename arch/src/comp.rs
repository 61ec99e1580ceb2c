use bimap::BiMap;
use once_cell::sync::Lazy;

/// Computation field of a C-instruction (7 bits).
/// The top bit is the operand selector: `0` reads the A register, `1` reads
/// the memory word it addresses. The selector is part of the table data, not
/// extra logic: the M-form of a mnemonic is a distinct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comp(u16);

static COMP_BIN: Lazy<BiMap<&'static str, u16>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u16> = BiMap::new();
    map.insert("0", 0b0101010);
    map.insert("1", 0b0111111);
    map.insert("-1", 0b0111010);
    map.insert("D", 0b0001100);
    map.insert("A", 0b0110000);
    map.insert("!D", 0b0001101);
    map.insert("!A", 0b0110001);
    map.insert("-D", 0b0001111);
    map.insert("-A", 0b0110011);
    map.insert("D+1", 0b0011111);
    map.insert("A+1", 0b0110111);
    map.insert("D-1", 0b0001110);
    map.insert("A-1", 0b0110010);
    map.insert("D+A", 0b0000010);
    map.insert("D-A", 0b0010011);
    map.insert("A-D", 0b0000111);
    map.insert("D&A", 0b0000000);
    map.insert("D|A", 0b0010101);
    map.insert("M", 0b1110000);
    map.insert("!M", 0b1110001);
    map.insert("-M", 0b1110011);
    map.insert("M+1", 0b1110111);
    map.insert("M-1", 0b1110010);
    map.insert("D+M", 0b1000010);
    map.insert("D-M", 0b1010011);
    map.insert("M-D", 0b1000111);
    map.insert("D&M", 0b1000000);
    map.insert("D|M", 0b1010101);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Self> {
        COMP_BIN.get_by_left(s).map(|&bits| Comp(bits))
    }

    pub fn bits(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match COMP_BIN.get_by_right(&self.0) {
            Some(mnemonic) => write!(f, "{}", mnemonic),
            None => write!(f, "{:07b}", self.0),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Comp::parse("0").unwrap().bits(), 0b0101010);
    assert_eq!(Comp::parse("1").unwrap().bits(), 0b0111111);
    assert_eq!(Comp::parse("-1").unwrap().bits(), 0b0111010);
    assert_eq!(Comp::parse("D+A").unwrap().bits(), 0b0000010);
    assert_eq!(Comp::parse("D&A").unwrap().bits(), 0b0000000);
    assert_eq!(Comp::parse("D|M").unwrap().bits(), 0b1010101);
    assert_eq!(Comp::parse("D+D"), None);
    assert_eq!(Comp::parse("d"), None);
    assert_eq!(Comp::parse("M+1").unwrap().to_string(), "M+1");
}

#[test]
fn test_operand_selector() {
    // Each M-form differs from its A-form only in the selector bit.
    let pairs = [
        ("A", "M"),
        ("!A", "!M"),
        ("-A", "-M"),
        ("A+1", "M+1"),
        ("A-1", "M-1"),
        ("D+A", "D+M"),
        ("D-A", "D-M"),
        ("A-D", "M-D"),
        ("D&A", "D&M"),
        ("D|A", "D|M"),
    ];
    for (a_form, m_form) in pairs {
        let a = Comp::parse(a_form).unwrap().bits();
        let m = Comp::parse(m_form).unwrap().bits();
        assert_eq!(m, a | 0b1000000, "{} vs {}", a_form, m_form);
    }
}
