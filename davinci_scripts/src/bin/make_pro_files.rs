use clap::Parser;
use davinci_scripts::cli::{self, MakeProFilesArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_pro_files(MakeProFilesArgs::parse()).fancy_unwrap();
}
