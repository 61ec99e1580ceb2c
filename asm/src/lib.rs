pub mod assemble;
pub mod error;
pub mod msg;
pub mod parser;
pub mod symbols;
pub mod util;
