use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("winspan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Stretch a window across the tallest row of monitors")
        .long_about(
            "winspan finds a window by title and resizes it to cover every monitor that shares \
             the largest work-area height, side by side. Defaults can be set in \
             ~/.winspan/config.toml or ./.winspan/config.toml.",
        )
        .arg(
            Arg::new("window-name")
                .long("window-name")
                .short('w')
                .value_name("TITLE")
                .help("Substring of the window title to match (default: \"Visual Studio Code\")"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .short('a')
                .help("Resize every matching window, not just the first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("border")
                .long("border")
                .short('b')
                .value_name("PX")
                .help("Extra pixels around the region for fine tuning (default: 0)")
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be moved without moving anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
}
