use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use ds_skeleton::Mode;
use env_logger::Env;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("destination")
                .help("The directory where the project structure will be created")
                .default_value("."),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Show the planned structure and ask before writing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Show the planned structure without writing anything")
                .action(ArgAction::SetTrue)
                .conflicts_with("preview"),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    handle_scaffold(&matches)
}

fn init_logger(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn handle_scaffold(args: &ArgMatches) -> miette::Result<()> {
    let destination = args
        .get_one::<String>("destination")
        .map(String::as_str)
        .unwrap_or(".");

    let mode = if args.get_flag("dry-run") {
        Mode::DryRun
    } else if args.get_flag("preview") {
        Mode::Preview
    } else {
        Mode::Write
    };

    log::debug!("executing in verbose mode");

    ds_skeleton::api::scaffold(destination, mode)?;

    Ok(())
}
