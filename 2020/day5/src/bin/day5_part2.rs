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

    let pass_ids = passes.iter().map(|p| p.id()).collect::<Vec<_>>();
    match day5::find_my_seat(&pass_ids) {
        Some(my_id) => println!(
            "The only missing board pass id in given list is {}.",
            *my_id
        ),
        None => println!("There isn't any missing board pass id between two listed ones."),
    }

    Ok(())
}
