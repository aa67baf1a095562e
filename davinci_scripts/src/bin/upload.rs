use clap::Parser;
use davinci_scripts::cli::{self, UploadArgs};
use davinci_scripts_common::errors::FancyUnwrap;

fn main() {
    let _logger = cli::init_logging();
    cli::upload(UploadArgs::parse()).fancy_unwrap();
}
