use anyhow::{Context, Result};
use clap::Parser;
use day2::{CliArgs, SledRentalPolicy};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let pws = day2::read_pws(input)
        .with_context(|| format!("Failed to read passwords from given input({}).", input_name))?;

    let valid_count = day2::count_valid(&SledRentalPolicy, &pws);
    println!(
        "There are {} valid passwords in given {} entries.",
        valid_count,
        pws.len()
    );

    Ok(())
}
