use std::ffi::OsString;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::cli::color_when::ColorWhen;

/// Server behind the developer toolbox: token counting, text diffs and the
/// persisted interface settings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the YAML configuration file, created with defaults if missing
    #[arg(index = 1)]
    pub config_path: Option<OsString>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[arg(
            long,
            value_name = "WHEN",
            default_value_t = ColorWhen::Auto,
            default_missing_value = "always",
            num_args = 0..=1,
            value_enum
        )]
    pub color: ColorWhen,
}

impl Args {
    /// The filter used when `RUST_LOG` isn't set.
    pub fn default_log_filter(&self) -> String {
        let level = self.verbose.log_level_filter().to_string().to_lowercase();
        format!(
            "{}={level},tower_http={level},axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        )
    }
}
