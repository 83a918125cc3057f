use anyhow::{Context, Result};
use clap::Parser;
use day9::CliArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let nums = day9::read_num(input)
        .with_context(|| format!("Failed to read numbers from given input({}).", input_name))?;

    match day9::find_invalid(&nums, args.preamble) {
        Some(n) => println!(
            "The first number which isn't sum of two of the {} numbers before it is {}.",
            args.preamble, n
        ),
        None => println!("All numbers after the preamble({}) are valid.", args.preamble),
    }

    Ok(())
}
