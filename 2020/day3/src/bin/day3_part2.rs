use anyhow::{Context, Result};
use clap::Parser;
use day3::{CliArgs, PART2_SLOPES};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let map = day3::read_map(input)
        .with_context(|| format!("Failed to read map from given input({}).", input_name))?;

    let tree_counts = PART2_SLOPES
        .iter()
        .map(|slope| map.count_trees(slope))
        .collect::<Vec<_>>();
    println!(
        "The trees met with given {} slopes are {:?}, and their product is {}.",
        PART2_SLOPES.len(),
        tree_counts,
        tree_counts.iter().product::<usize>()
    );

    Ok(())
}
