// SPDX-License-Identifier: MPL-2.0
use page_selector::app::{self, Flags};
use page_selector::logging::{self, LogConfig, LogFormat};
use page_selector::ui::theming::ThemeMode;

const HELP: &str = "\
Page Selector

USAGE:
  page_selector [OPTIONS]

OPTIONS:
  --config-dir DIR        Directory containing settings.toml
  --theme MODE            light, dark or system (overrides settings.toml)
  --save-theme            Write the --theme value to settings.toml
  --print-selection       Print confirmed page ids to stdout, one per line
  --log-format FORMAT     pretty or compact
  --no-color              Disable ANSI colors in log output
  -v, --verbose           Log selection changes
  -h, --help              Print this help
";

struct Args {
    flags: Flags,
    log: LogConfig,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let no_color = args.contains("--no-color");
    let log_format: Option<LogFormat> = args.opt_value_from_str("--log-format")?;
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
        save_theme: args.contains("--save-theme"),
        print_selection: args.contains("--print-selection"),
    };

    if flags.save_theme && flags.theme.is_none() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: "--save-theme requires --theme".to_string(),
        });
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {:?}", remaining),
        });
    }

    Ok(Some(Args {
        flags,
        log: LogConfig::from_verbose(verbose)
            .with_format(log_format.unwrap_or_default())
            .with_ansi(!no_color),
    }))
}

fn main() -> iced::Result {
    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(&args.log);
    app::run(args.flags)
}
