// SPDX-License-Identifier: MPL-2.0
use apod_gallery::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Browse NASA's Astronomy Picture of the Day feed.

USAGE:
  apod_gallery [OPTIONS]

OPTIONS:
  --lang <ID>           Interface language (e.g. en-US, fr)
  --feed-url <URL>      Feed to read instead of the configured one
  --config-dir <DIR>    Directory holding settings.toml
  --load-on-start       Fetch the feed as soon as the window opens
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        feed_url: args.opt_value_from_str("--feed-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        load_on_start: args.contains("--load-on-start"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apod_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
