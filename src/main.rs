use std::io::{self, Read};

use pratt::{
    errors::errors::{Error, ErrorTip},
    parser::parser::parse_bytes,
    print,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = Vec::new();
    if let Err(error) = io::stdin().read_to_end(&mut input) {
        println!("Error: failed to read standard input ({})", error);
        return;
    }

    match parse_bytes(&input) {
        Ok(expr) => println!("{}", print(&expr)),
        Err(error) => display_error(&error),
    }
}

fn display_error(error: &Error) {
    /*
        Error: MismatchedParen (Expected `)` to close the group, found EndOfInput)
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
