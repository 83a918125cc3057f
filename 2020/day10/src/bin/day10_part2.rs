use anyhow::{Context, Result};
use clap::Parser;
use day10::CliArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let jolts = day10::read_jolts_n(input).with_context(|| {
        format!("Failed to read joltage adapter ratings from given input({}).", input_name)
    })?;
    let adapter_n = jolts.len();
    let chain = day10::chain(jolts)?;

    println!(
        "The count of ways from charging outlet to device(using given {} joltage adapters) are {}.",
        adapter_n,
        day10::arrangements(&chain)
    );

    Ok(())
}
