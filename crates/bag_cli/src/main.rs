use bag_cli::{
    cli::{Args, Output},
    init_logger, run,
};
use clap::Parser;

use log::trace;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger();

    trace!("start");
    let res = run(&args);

    match args.output_format {
        Output::Quiet => {
            res?;
        }
        Output::Stdout => println!("{}", res?),
        Output::Json => {
            let res = res.map_err(|e| format!("{e:#}"));
            println!("{}", serde_json::to_string(&res)?)
        }
        Output::PrettyJson => {
            let res = res.map_err(|e| format!("{e:#}"));
            println!("{}", serde_json::to_string_pretty(&res)?)
        }
    }

    trace!("done");
    Ok(())
}
