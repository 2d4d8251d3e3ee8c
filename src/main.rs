#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! xsigma-headers: generate XSigma configuration headers at build time.

mod cli;
mod commands;
mod header;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use commands::Command;

fn main() {
    let cli = Cli::parse();

    let ctx =
        OutputCtx::new(cli.format, cli.json, cli.no_header, cli.debug).with_dry_run(cli.dry_run);

    if cli.debug && cli.args.len() > 3 {
        let ignored: Vec<String> =
            cli.args[3..].iter().map(|a| a.to_string_lossy().into_owned()).collect();
        eprintln!("[debug] ignoring trailing arguments: {}", ignored.join(" "));
    }

    let t_parse = ctx.timer("parse_command");
    let command = Command::from_cli(&cli);
    drop(t_parse);

    if let Err(err) = command.and_then(|command| commands::dispatch(&command, &ctx)) {
        write_error(&err, &ctx);
        std::process::exit(err.exit_code());
    }
}
