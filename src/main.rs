use clap::Parser;
use cup_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CUP Processor - SeeYou waypoint and task file tool");
    println!("==================================================");
    println!();
    println!("Parse, check and normalize SeeYou CUP waypoint/task files, including");
    println!("files written by legacy producers with malformed quoting.");
    println!();
    println!("USAGE:");
    println!("    cup-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    check        Parse CUP files and report what they contain");
    println!("    normalize    Rewrite a CUP file in canonical form");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase log verbosity");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check a single file:");
    println!("    cup-processor check turnpoints.cup");
    println!();
    println!("    # Check every .cup file under a directory, dumping JSON:");
    println!("    cup-processor check ~/waypoints --format json");
    println!();
    println!("    # Normalize a file with Windows line endings:");
    println!("    cup-processor normalize legacy.cup -o clean.cup --crlf");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cup-processor <COMMAND> --help");
}
