use clap::Parser;
use davinci_scripts::cli::{self, MakeInstallerArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_installer(MakeInstallerArgs::parse()).fancy_unwrap();
}
