use anyhow::{Context, Result};
use clap::Parser;
use day6::CliArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let input_name = common::describe_input(args.input_path.as_deref());
    let input = common::open_input(args.input_path.as_deref())
        .with_context(|| format!("Failed to open given input({}).", input_name))?;
    let grp_answers = day6::read_ga(input)
        .with_context(|| format!("Failed to read group answers from given input({}).", input_name))?;

    let count_sum = grp_answers.iter().map(|ga| ga.all_app_n()).sum::<usize>();
    log::debug!(
        "Read {} member(s) in total.",
        grp_answers.iter().map(|ga| ga.member_n()).sum::<usize>()
    );
    println!(
        "The sum of counts of questions to which everyone in the group answered \"yes\" in given {} groups is {}.",
        grp_answers.len(),
        count_sum
    );

    Ok(())
}
