use std::path::Path;

use clap::Parser;
use valkyrie::{app::ValkyrieApp, config::ValkyrieConfig, ValkyrieError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ValkyrieApp::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &ValkyrieApp) -> Result<(), ValkyrieError> {
    let config = ValkyrieConfig::load(args.configuration_file.as_deref().map(Path::new))?;
    args.op.run(&config)
}
