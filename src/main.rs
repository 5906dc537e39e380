// SPDX-License-Identifier: MPL-2.0
use local_photos::app::LocalImages;
use local_photos::application::port::AssetDiscovery;
use local_photos::application::ImageLoader;
use local_photos::config::{self, Config};
use local_photos::directory_scanner::FsDiscovery;
use local_photos::infrastructure::{DecoderProbe, EmbeddedDiscovery};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
local_photos - list bundled photos with their pixel dimensions

USAGE:
  local_photos [OPTIONS] [ROOT]

ARGS:
  ROOT                 Project root holding the photo folder [default: .]

OPTIONS:
  --embedded           Use the photos embedded at build time
  --base-url URL       Deployment base URL (overrides BASE_URL)
  --config-dir DIR     Directory containing settings.toml
  -v, --verbose        Increase log verbosity (repeatable)
  -h, --help           Print help
";

struct Args {
    embedded: bool,
    base_url: Option<String>,
    config_dir: Option<PathBuf>,
    verbose: u8,
    root: Option<PathBuf>,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Args, pico_args::Error> {
    let embedded = args.contains("--embedded");
    let base_url = args.opt_value_from_str("--base-url")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let mut verbose = 0u8;
    while args.contains(["-v", "--verbose"]) {
        verbose = verbose.saturating_add(1);
    }
    let root = args.opt_free_from_str()?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(Args {
        embedded,
        base_url,
        config_dir,
        verbose,
        root,
    })
}

/// Lets `--base-url` replace the configured base URL. A blank value counts as
/// not given.
fn apply_base_url(config: &mut Config, base_url: Option<String>) {
    if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
        config.urls.base_url = Some(url);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut raw = pico_args::Arguments::from_env();
    if raw.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let args = match parse_args(raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_tracing(args.verbose);

    let (mut config, warning) = config::load_with_override(args.config_dir);
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let discovery: Arc<dyn AssetDiscovery> = if args.embedded || config.use_embedded() {
        Arc::new(EmbeddedDiscovery::bundled())
    } else {
        let root = args.root.unwrap_or_else(|| PathBuf::from("."));
        Arc::new(FsDiscovery::new(root, config.discovery.directory.clone()))
    };

    apply_base_url(&mut config, args.base_url);
    let loader =
        ImageLoader::from_shared(discovery, Arc::new(DecoderProbe::new())).configured(&config);

    let mut images = LocalImages::mount(loader);
    let state = images.loaded().await;

    match toml::to_string_pretty(&state) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            error!(error = %err, "Failed to format load result");
            return ExitCode::FAILURE;
        }
    }

    if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
