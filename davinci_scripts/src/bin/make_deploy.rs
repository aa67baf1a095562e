use clap::Parser;
use davinci_scripts::cli::{self, MakeDeployArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_deploy(MakeDeployArgs::parse()).fancy_unwrap();
}
