use clap::Parser;
use davinci_scripts::cli::{self, MakeDocsArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::make_docs(MakeDocsArgs::parse()).fancy_unwrap();
}
