// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use iced_banner::banner::Style;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_banner=info";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        style: args.opt_value_from_str::<_, Style>("--style")?,
        expandable: args.contains("--expandable"),
        dismiss_delay: args.opt_value_from_str("--dismiss-delay")?,
        single_shot: args.contains("--single-shot"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!(
                "Usage: iced_banner [--style light|dark] [--expandable] \
                 [--dismiss-delay <secs>] [--single-shot] [--config-dir <dir>]"
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
