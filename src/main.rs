use colored::Colorize;

use clap::{command, Parser};
use fah_teamstats::{run_report, Bootstrap, Error, StatsClient};

/// Print Folding@Home team statistics and member leaderboards
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ids of the teams to report on (defaults to FAH_DEFAULT_TEAM)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    team_ids: Vec<u64>,
}

fn run(args: Args) -> Result<(), Error> {
    let bootstrap = Bootstrap::new()?;
    let client = StatsClient::new(&bootstrap.api_url)?;
    let mut stdout = std::io::stdout();
    run_report(&client, &bootstrap, &args.team_ids, &mut stdout)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        println!("{}", e.to_string().bold().red());
        std::process::exit(1);
    }
}
