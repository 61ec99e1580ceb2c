/// Symbols every program can use without declaring them.
/// R0..R15 alias the first sixteen RAM words; SP/LCL/ARG/THIS/THAT overlap
/// R0..R4; SCREEN and KBD are the memory-mapped I/O bases.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", 16384),
    ("KBD", 24576),
];

/// First RAM address free for variables, right after R0..R15.
pub const VAR_BASE: u16 = 16;

#[test]
fn test() {
    assert_eq!(PREDEFINED.len(), 23);
    let get = |name| {
        PREDEFINED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, addr)| *addr)
    };
    assert_eq!(get("SP"), Some(0));
    assert_eq!(get("THAT"), Some(4));
    assert_eq!(get("R15"), Some(15));
    assert_eq!(get("SCREEN"), Some(16384));
    assert_eq!(get("KBD"), Some(24576));
    assert_eq!(get("LOOP"), None);
}
