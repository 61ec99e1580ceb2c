use crate::{comp::Comp, dest::Dest, jump::Jump};

/// A fully resolved instruction, ready to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@addr` — load a 15-bit address into the A register.
    A(u16),
    /// `dest=comp;jump` — ALU computation with optional store and jump.
    C(Dest, Comp, Jump),
}

impl Inst {
    /// Packs the instruction into its 16-bit word.
    /// A: `0` + 15-bit address. C: `111` + comp(7) + dest(3) + jump(3).
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(addr) => addr,
            Inst::C(dest, comp, jump) => {
                (0b111 << 13) | (comp.bits() << 6) | (dest.bits() << 3) | jump.bits()
            }
        }
    }
}

impl std::fmt::Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C(dest, comp, jump) => {
                if *dest != Dest::None {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::None {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_inst() {
        assert_eq!(Inst::A(0).to_bin(), 0b0000000000000000);
        assert_eq!(Inst::A(2).to_bin(), 0b0000000000000010);
        assert_eq!(Inst::A(24576).to_bin(), 0b0110000000000000);
    }

    #[test]
    fn c_inst() {
        let c = |d, c, j| {
            Inst::C(
                Dest::parse(d).unwrap(),
                Comp::parse(c).unwrap(),
                Jump::parse(j).unwrap(),
            )
            .to_bin()
        };
        assert_eq!(c("D", "A", ""), 0b1110110000010000);
        assert_eq!(c("D", "D+A", ""), 0b1110000010010000);
        assert_eq!(c("M", "D", ""), 0b1110001100001000);
        assert_eq!(c("", "0", "JMP"), 0b1110101010000111);
        assert_eq!(c("AMD", "M+1", "JLE"), 0b1111110111111110);
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(42).to_string(), "@42");
        let inst = Inst::C(
            Dest::parse("MD").unwrap(),
            Comp::parse("M+1").unwrap(),
            Jump::parse("JGT").unwrap(),
        );
        assert_eq!(inst.to_string(), "MD=M+1;JGT");
        let inst = Inst::C(
            Dest::parse("").unwrap(),
            Comp::parse("0").unwrap(),
            Jump::parse("JMP").unwrap(),
        );
        assert_eq!(inst.to_string(), "0;JMP");
    }
}
