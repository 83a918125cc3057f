use anyhow::{Context, Result};
use clap::Parser;
use day8::{CliArgs, Report};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let code = day8::read_code(input)
        .with_context(|| format!("Failed to read boot code from given input({}).", input_name))?;

    let halt = day8::run_until_loop(&code);
    println!("{}", Report::new(&code, &halt));

    Ok(())
}
