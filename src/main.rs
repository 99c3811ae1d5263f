use std::{env, fs::read_to_string};

use ibtac_lexer::lexer::lexer::Lexer;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided! Usage: ibtac-lexer <source-file>");
    }

    let file_contents = read_to_string(&args[1]).expect("Failed to read file!");

    let mut lexer = Lexer::new(&file_contents);
    lexer.tokenize();
    lexer.print_tokens();
}
