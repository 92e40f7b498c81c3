#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io;

use env_logger::Env;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    chess_rules::repl::repl()
}
