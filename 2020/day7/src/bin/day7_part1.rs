use anyhow::{Context, Result};
use clap::Parser;
use day7::{CliArgs, MY_BAG};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let bag_rules = day7::read_br(input)
        .with_context(|| format!("Failed to read bag rules from given input({}).", input_name))?;

    if let Some(contained_n) = bag_rules.container_kinds_n(MY_BAG) {
        println!(
            "There are {} kinds of bag can contain at least one specified {} bag.",
            contained_n, MY_BAG
        );
    } else {
        println!("There's no {} bag in given rules.", MY_BAG);
    }

    Ok(())
}
