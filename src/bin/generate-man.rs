// Generates the stagedash man page to stdout:
//   cargo run --bin generate-man > stagedash.1

use std::io::Write;

use clap::CommandFactory;
use clap_mangen::Man;

fn main() -> std::io::Result<()> {
    let cmd = stagedash::cli::Cli::command();
    let man = Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    std::io::stdout().write_all(&buffer)
}
