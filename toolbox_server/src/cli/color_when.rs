use std::{fmt, io::IsTerminal};

use clap::ValueEnum;

/// `--color` setting of the log output.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Always,
    Auto,
    Never,
}

impl ColorWhen {
    /// Logs go to stdout, so `Auto` colours them when stdout is a terminal
    /// and `NO_COLOR` is unset.
    pub fn use_colors(self) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            ColorWhen::Always => "always",
            ColorWhen::Auto => "auto",
            ColorWhen::Never => "never",
        }
    }
}

impl fmt::Display for ColorWhen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(ColorWhen::Always)]
    #[test_case(ColorWhen::Auto)]
    #[test_case(ColorWhen::Never)]
    fn test_display_round_trips_through_clap(when: ColorWhen) {
        assert_eq!(ColorWhen::from_str(&when.to_string(), false), Ok(when));
    }

    #[test]
    fn test_fixed_choices() {
        assert!(ColorWhen::Always.use_colors());
        assert!(!ColorWhen::Never.use_colors());
    }
}
