use clap::Parser;
use davinci_scripts::cli::{self, MakeChangelogArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_changelog(MakeChangelogArgs::parse()).fancy_unwrap();
}
