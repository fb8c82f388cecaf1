use std::env::args_os;

use pixmat::{run_operation, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_operation(&arguments) {
        Ok(_) => println!("Operation successful"),
        Err(e) => eprintln!("Operation failed because of: {}", e),
    }
}
