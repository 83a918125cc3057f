use anyhow::{Context, Result};
use clap::Parser;
use day4::CliArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let passports = day4::read_pp(input)
        .with_context(|| format!("Failed to read passports from given input({}).", input_name))?;

    let prop_validators = day4::all_validators();
    let valid_counts = passports
        .iter()
        .filter(|pp| pp.is_valid(&prop_validators))
        .count();
    println!(
        "There are {} valid passports in given {} records after using value validation.",
        valid_counts,
        passports.len()
    );

    Ok(())
}
