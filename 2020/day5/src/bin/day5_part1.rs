use anyhow::{Context, Result};
use clap::Parser;
use day5::CliArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let passes = day5::read_pass(input).with_context(|| {
        format!("Failed to read boarding pass from given input({}).", input_name)
    })?;

    match passes.iter().map(|p| p.id()).max() {
        Some(max_id) => println!(
            "The maximium seat id in given {} boarding pass is {}.",
            passes.len(),
            *max_id
        ),
        None => println!("There isn't any boarding pass in given list."),
    }

    Ok(())
}
