extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

mod cli;
mod output;
mod reader;
mod score;

use cli::Cli;

fn try_main(cli: &Cli) -> Result<()> {
    let quality = reader::quality_lines(&cli.input)?;
    info!("Read {} quality strings from {}", quality.len(), cli.input);

    let scores: Vec<i64> = quality.iter().map(|q| score::phred_sum(q)).collect();

    output::route(&scores, &cli.destination, &cli.format, cli.output.as_deref())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    // clap would normally exit 2 on a usage error; every failure of this
    // tool exits 1, so parse by hand and keep help/version at exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = try_main(&cli) {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
