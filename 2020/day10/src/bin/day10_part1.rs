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

    let diffs = day10::differentials(&chain);
    let diff1_n = diffs.get(&1).copied().unwrap_or(0);
    let diff3_n = diffs.get(&3).copied().unwrap_or(0);
    println!(
        "Using all given {} adapters, differences are {:?}, 1-jolt differences * 3-jolt differences is {}.",
        adapter_n,
        diffs,
        diff1_n * diff3_n
    );

    Ok(())
}
