use strum::{Display, EnumString};

/// Destination field of a C-instruction (3 bits).
/// The variant order matches the bit encoding: M = bit 0, D = bit 1, A = bit 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    None,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Dest::None);
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
        ("M", 0b001),
        ("D", 0b010),
        ("MD", 0b011),
        ("A", 0b100),
        ("AM", 0b101),
        ("AD", 0b110),
        ("AMD", 0b111),
    ];
    for (mnemonic, bits) in table {
        assert_eq!(Dest::parse(mnemonic).unwrap().bits(), bits);
    }
    assert_eq!(Dest::parse("X"), None);
    assert_eq!(Dest::parse("md"), None);
    assert_eq!(Dest::MD.to_string(), "MD");
    assert_eq!(Dest::None.to_string(), "");
}
