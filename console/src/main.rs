mod convert;
mod utils;

use clap::{Parser, Subcommand};
use convert::ConvertArgs;
use flybase_gff::exports::anyhow;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Convert parsed FlyBase GFF3 records into target-model items.
    Convert {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ConvertArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Convert { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
