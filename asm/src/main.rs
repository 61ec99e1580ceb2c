use clap::Parser;
use color_print::cprintln;
use hasm::{assemble, error::Error, symbols::Symbols, util};
use std::io::{Read, Write};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(required = true)]
    input: Vec<String>,

    /// Output file (defaults to the first input with a .hack extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the assembly listing and symbol table
    #[clap(short, long)]
    dump: bool,

    /// Fail on unknown mnemonics and unparsable lines instead of warning
    #[clap(short, long)]
    strict: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let mut symbols = Symbols::new();
    let mut lines = vec![];
    let mut pc: u16 = 0;

    let inputs: Vec<String> = args.input.iter().map(|path| complete_input(path)).collect();
    for path in &inputs {
        println!("  < {}", path);
        let mut src = String::new();
        std::fs::File::open(path)
            .map_err(|err| Error::FileOpen(path.clone(), err))?
            .read_to_string(&mut src)
            .map_err(|err| Error::FileRead(path.clone(), err))?;
        lines.extend(assemble::parse_source(path, &src, &mut pc, &mut symbols));
    }

    let words = assemble::encode(&lines, &mut symbols, args.strict)?;

    let out = match &args.output {
        Some(path) => path.clone(),
        None => default_output(&inputs[0]),
    };
    println!("  > {}", out);
    let mut file =
        std::fs::File::create(&out).map_err(|err| Error::FileCreate(out.clone(), err))?;
    for word in &words {
        writeln!(file, "{:016b}", word).map_err(|err| Error::FileWrite(out.clone(), err))?;
    }

    if args.dump {
        util::print_dump(&lines, &symbols);
    }
    Ok(())
}

/// Inputs named without the `.asm` suffix get it appended.
fn complete_input(path: &str) -> String {
    match path.ends_with(".asm") {
        true => path.to_string(),
        false => format!("{}.asm", path),
    }
}

fn default_output(input: &str) -> String {
    match input.strip_suffix(".asm") {
        Some(stem) => format!("{}.hack", stem),
        None => format!("{}.hack", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_completion() {
        assert_eq!(complete_input("add"), "add.asm");
        assert_eq!(complete_input("add.asm"), "add.asm");
        assert_eq!(complete_input("progs/max"), "progs/max.asm");
        assert_eq!(complete_input("notes.txt"), "notes.txt.asm");
    }

    #[test]
    fn output_naming() {
        assert_eq!(default_output("add.asm"), "add.hack");
        assert_eq!(default_output(&complete_input("add")), "add.hack");
        assert_eq!(default_output("out.bin"), "out.bin.hack");
    }
}
