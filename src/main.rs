mod args;
mod batch;

use simple_logger::SimpleLogger;

use crate::args::{Args, Command};

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    match args.command {
        Command::Check(check) => {
            SimpleLogger::new().with_level(check.log.to_level_filter()).init()?;
            batch::run(&check)
        }
    }
}
