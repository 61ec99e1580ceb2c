use crate::parser::Line;
use crate::symbols::Symbols;
use color_print::cprintln;

const RULE: &str = "+------+------+------------------+------------------------------";

/// Prints the assembly listing (line, pc, word, statement) and the resolved
/// symbol table.
pub fn print_dump(lines: &[Line], symbols: &Symbols) {
    let mut current = "";
    for line in lines {
        if line.path() != current {
            current = line.path();
            println!("{}", RULE);
            cprintln!("| <underline>{}</>", current);
            println!("{}", RULE);
        }
        println!("{}", line.cformat());
    }
    println!("{}", RULE);
    cprintln!("<bold>Symbols</> (#{})", symbols.len());
    for (name, addr) in symbols.iter() {
        cprintln!("  <yellow>{:>5}</> <green>{}</>", addr, name);
    }
}
