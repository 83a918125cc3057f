use anyhow::{Context, Result};
use clap::Parser;
use day1::{CliArgs, EXPECT_SUM};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let mut ints = day1::read_ints(input)
        .with_context(|| format!("Failed to read integers from given input({}).", input_name))?;
    ints.sort_unstable();

    if let Some(ns) = day1::find_ints_of_sum(&ints, EXPECT_SUM, 3) {
        let prod = ns.iter().product::<usize>();
        println!(
            "In given inputs, the sum of {:?} is {}, their product is {}.",
            ns, EXPECT_SUM, prod
        );
    } else {
        println!(
            "Can't find 3 numbers whose sum is {} in given inputs.",
            EXPECT_SUM
        );
    }

    Ok(())
}
