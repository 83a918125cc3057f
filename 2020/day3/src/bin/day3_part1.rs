use anyhow::{Context, Result};
use clap::Parser;
use day3::{CliArgs, PART1_SLOPE};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let map = day3::read_map(input)
        .with_context(|| format!("Failed to read map from given input({}).", input_name))?;

    println!(
        "Going down {} rows with slope right 3 down 1, the toboggan meets {} trees.",
        map.row_n(),
        map.count_trees(&PART1_SLOPE)
    );

    Ok(())
}
