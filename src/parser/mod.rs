pub mod elpris_parser;

pub use elpris_parser::{ElprisParser, Parser};
