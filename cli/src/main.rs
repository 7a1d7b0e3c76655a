use clap::Parser;
use log::info;
use std::process::exit;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML agent config. Defaults to agent.toml
    #[clap(short, long, value_parser)]
    config: Option<String>,

    /// Log level for the run: error, warn, info, or debug
    #[clap(short, long, value_parser, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    println!("[rigwatch] Starting rig status report!");

    match agent::start::start(args.config.as_deref(), &args.log_level) {
        Ok(true) => info!("[rigwatch] Heartbeat delivered to collector"),
        Ok(false) => {
            println!("[rigwatch] Heartbeat was not delivered. See rigwatch.log for the cause")
        }
        Err(err) => {
            println!("[rigwatch] Failed to run agent: {err:?}");
            exit(1);
        }
    }

    println!("[rigwatch] Finished rig status report!");
}
