use anyhow::{Context, Result};
use clap::Parser;
use day8::{CliArgs, HaltReason, Report};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let code = day8::read_code(input)
        .with_context(|| format!("Failed to read boot code from given input({}).", input_name))?;

    let halt = day8::run_until_loop(&code);
    if halt.reason == HaltReason::Terminated {
        println!(
            "Boot code needs no repair. {}",
            Report::new(&code, &halt)
        );
        return Ok(());
    }

    log::info!("Trying to fix infinite boot code.");
    match day8::repair(&code) {
        Some(fix) => println!(
            "Exchanged {}(at line #{}) to {}, code run through to end without loop, and the final accumulator value is {}.",
            fix.original,
            fix.inst_ind + 1,
            fix.replacement,
            fix.state.acc
        ),
        None => println!(
            "There's no exchange can make code run through to end without loop. {}",
            Report::new(&code, &halt)
        ),
    }

    Ok(())
}
