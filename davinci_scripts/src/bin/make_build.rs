use clap::Parser;
use davinci_scripts::cli::{self, MakeBuildArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_build(MakeBuildArgs::parse()).fancy_unwrap();
}
