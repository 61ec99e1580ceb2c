use color_print::{cformat, cprintln};

/// Per-line diagnostic. Warnings never abort the translation.
#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
}

impl Msg {
    /// Prints the message with the source location, rustc style.
    pub fn diag(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        let head = match self {
            Msg::Error(msg) => cformat!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cformat!("<yellow,bold>warn</>: {}", msg),
        };
        println!("{}", head);
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
    }
}
