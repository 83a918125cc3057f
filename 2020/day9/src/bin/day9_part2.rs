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

    let Some(invalid_n) = day9::find_invalid(&nums, args.preamble) else {
        println!("All numbers after the preamble({}) are valid.", args.preamble);
        return Ok(());
    };

    match day9::find_weakness(&nums, invalid_n) {
        Some(weakness) => println!(
            "The encryption weakness(sum of the min and max in range summing to {}) is {}.",
            invalid_n, weakness
        ),
        None => println!(
            "There isn't any contiguous range summing to {} in given numbers.",
            invalid_n
        ),
    }

    Ok(())
}
