use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_up_flags() {
    let cli = Cli::parse_from(["mp", "up", "--keep-going", "--dry-run"]);
    match cli.command {
        Commands::Up(args) => {
            assert!(args.keep_going);
            assert!(args.dry_run);
        }
        other => panic!("expected up, got {other:?}"),
    }
}

#[test]
fn test_global_args_after_subcommand() {
    let cli = Cli::parse_from(["mp", "status", "-t", "staging", "--output", "json"]);
    assert_eq!(cli.global.target.as_deref(), Some("staging"));
    match cli.command {
        Commands::Status(args) => assert_eq!(args.output, OutputFormat::Json),
        other => panic!("expected status, got {other:?}"),
    }
}

#[test]
fn test_new_takes_positional_description() {
    let cli = Cli::parse_from(["mp", "new", "add_due_dates"]);
    match cli.command {
        Commands::New(args) => assert_eq!(args.description, "add_due_dates"),
        other => panic!("expected new, got {other:?}"),
    }
}
