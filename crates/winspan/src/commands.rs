use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use winspan_core::config::{PlacementConfig, TargetConfig, WinspanConfig};
use winspan_core::errors::WinspanError;
use winspan_core::events;
use winspan_core::monitor_ops::survey_monitors;
use winspan_core::placement::{PlacedWindow, compute_placement, place_windows};
use winspan_core::window::MatchMode;
use winspan_core::window_ops::find_windows;
use winspan_core::{DisplayHost, MonitorSurvey, Placement, WindowHandle, default_host};

use crate::table;

/// Everything one run found and did, for `--json`.
#[derive(Debug, Serialize)]
struct SpanReport<'a> {
    title: &'a str,
    all: bool,
    border: i32,
    dry_run: bool,
    windows: &'a [WindowHandle],
    #[serde(flatten)]
    survey: &'a MonitorSurvey,
    placement: Placement,
    moved: &'a [PlacedWindow],
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let json_output = matches.get_flag("json");
    let dry_run = matches.get_flag("dry-run");

    let config = resolve_config(matches)?;
    let title = config.window_name();
    let border = config.border();
    let mode = MatchMode::from_all_flag(config.all());

    info!(
        event = "cli.span_started",
        title = title,
        all = config.all(),
        border = border,
        dry_run = dry_run,
        json_output = json_output
    );

    let host = default_host().map_err(|e| report_failure("access the windowing system", e))?;
    let host: &dyn DisplayHost = host.as_ref();

    let windows =
        find_windows(host, title, mode).map_err(|e| report_failure("find windows", e))?;

    if !json_output {
        println!("Found '{}' window(s):", title);
        for handle in &windows {
            println!("handle={}", handle);
        }
    }

    let survey = survey_monitors(host).map_err(|e| report_failure("find monitors", e))?;

    if !json_output {
        println!("Monitors:");
        table::print_monitors_table(&survey.monitors);
        println!("Resulting region is {}", survey.region);
    }

    let placement = compute_placement(&survey.region, border)
        .map_err(|e| report_failure("compute placement", e))?;

    let moved = if dry_run {
        info!(event = "cli.span_dry_run", window_count = windows.len());
        Vec::new()
    } else {
        place_windows(host, &windows, &survey.region, border)
            .map_err(|e| report_failure("place windows", e))?
    };

    if json_output {
        let report = SpanReport {
            title,
            all: config.all(),
            border,
            dry_run,
            windows: &windows,
            survey: &survey,
            placement,
            moved: &moved,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if dry_run {
        println!(
            "Would move {} window(s) to {}",
            windows.len(),
            format_placement(&placement)
        );
    } else {
        for placed in &moved {
            println!(
                "Moved {} to {}",
                placed.handle,
                format_placement(&placed.placement)
            );
        }
    }

    info!(
        event = "cli.span_completed",
        window_count = windows.len(),
        moved_count = moved.len()
    );
    Ok(())
}

/// Load config files and layer the command-line flags on top.
fn resolve_config(matches: &ArgMatches) -> Result<WinspanConfig, Box<dyn std::error::Error>> {
    let config = WinspanConfig::load_hierarchy()
        .map_err(|e| report_failure("load configuration", e))?
        .merged_with(cli_overrides(matches));

    config
        .validate()
        .map_err(|e| report_failure("validate configuration", e))?;

    Ok(config)
}

/// Build a config layer from the flags that were actually given.
fn cli_overrides(matches: &ArgMatches) -> WinspanConfig {
    WinspanConfig {
        target: TargetConfig {
            window_name: matches.get_one::<String>("window-name").cloned(),
            // `--all` can only switch it on; absence keeps the configured value.
            all: matches.get_flag("all").then_some(true),
        },
        placement: PlacementConfig {
            border: matches.get_one::<i32>("border").copied(),
        },
    }
}

fn format_placement(placement: &Placement) -> String {
    format!(
        "x={}, y={}, {}x{}",
        placement.x, placement.y, placement.width, placement.height
    )
}

/// Tell the user what failed, log it, and hand the error back for `?`.
fn report_failure<E: WinspanError>(action: &str, e: E) -> Box<dyn std::error::Error> {
    eprintln!("Failed to {}: {}", action, e);
    error!(
        event = "cli.span_failed",
        action = action,
        error_code = e.error_code(),
        user_error = e.is_user_error(),
        error = %e
    );
    events::log_app_error(&e);
    Box::new(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    #[test]
    fn test_cli_overrides_only_set_given_flags() {
        let matches = build_cli().try_get_matches_from(["winspan"]).unwrap();
        assert_eq!(cli_overrides(&matches), WinspanConfig::default());
    }

    #[test]
    fn test_cli_overrides_win_over_config() {
        let matches = build_cli()
            .try_get_matches_from(["winspan", "-w", "Firefox", "-a", "-b", "12"])
            .unwrap();

        let file_config = WinspanConfig {
            target: TargetConfig {
                window_name: Some("Notepad".to_string()),
                all: Some(false),
            },
            placement: PlacementConfig { border: Some(3) },
        };

        let merged = file_config.merged_with(cli_overrides(&matches));
        assert_eq!(merged.window_name(), "Firefox");
        assert!(merged.all());
        assert_eq!(merged.border(), 12);
    }

    #[test]
    fn test_absent_all_flag_keeps_configured_value() {
        let matches = build_cli().try_get_matches_from(["winspan"]).unwrap();
        let file_config = WinspanConfig {
            target: TargetConfig {
                window_name: None,
                all: Some(true),
            },
            ..Default::default()
        };

        assert!(file_config.merged_with(cli_overrides(&matches)).all());
    }

    #[test]
    fn test_format_placement() {
        let placement = Placement {
            x: -8,
            y: 0,
            width: 3856,
            height: 1048,
        };
        assert_eq!(format_placement(&placement), "x=-8, y=0, 3856x1048");
    }
}
