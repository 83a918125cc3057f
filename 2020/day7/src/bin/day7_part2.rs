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

    if let Some(contain_n) = bag_rules.contained_bags_n(MY_BAG) {
        let contain_n = contain_n
            .with_context(|| format!("Failed to count bags inside {} bag.", MY_BAG))?;
        println!(
            "According to given rules, one {} bag can contain {} bags in total.",
            MY_BAG, contain_n
        );
    } else {
        println!("There's no {} bag in given rules.", MY_BAG);
    }

    Ok(())
}
