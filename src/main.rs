//! Terminal front end.
//!
//! Run with:
//! `cargo run -- play`
//! `cargo run -- play --ascii --verbose`

use std::io;

use notation_chess::session::game_session::run_session;
use notation_chess::session::session_config::SessionConfig;

const HELP_TEXT: &str = include_str!("../assets/help.txt");

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("play") => {
            let config = SessionConfig::from_args(args[1..].iter().map(String::as_str))?;
            let verbose = config.verbose;
            let stdin = io::stdin();
            let moves = run_session(config, stdin.lock(), io::stdout(), io::stderr())
                .map_err(|err| format!("Session I/O failed: {err}"))?;
            if verbose {
                eprintln!("session ended after {moves} moves");
            }
            Ok(())
        }
        None | Some("help") | Some("--help") | Some("-h") => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        Some(other) => {
            print!("{HELP_TEXT}");
            Err(format!("Unknown command: {other}"))
        }
    }
}
