use std::{
    env,
    fmt::{self, Display},
    str::FromStr,
};

use color_eyre::eyre::{bail, Report, Result, WrapErr};
use tracing::info;

pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

const OVERFLOW_VAR: &str = "PRODUCT_OVERFLOW";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverflowMode {
    Wrapping,
    Checked,
}

impl FromStr for OverflowMode {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wrapping" => Ok(OverflowMode::Wrapping),
            "checked" => Ok(OverflowMode::Checked),
            other => bail!("unknown overflow mode '{other}', expected 'wrapping' or 'checked'"),
        }
    }
}

impl Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowMode::Wrapping => f.write_str("wrapping"),
            OverflowMode::Checked => f.write_str("checked"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Config {
    overflow: OverflowMode,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let overflow = env::var(OVERFLOW_VAR).ok();

        let config = Self::from_values(overflow.as_deref())?;

        info!(overflow = %config.overflow, "initialized config");

        Ok(config)
    }

    pub(crate) fn from_values(overflow: Option<&str>) -> Result<Self> {
        let overflow = match overflow {
            Some(v) => v
                .parse::<OverflowMode>()
                .wrap_err_with(|| format!("invalid {OVERFLOW_VAR}"))?,
            None => OverflowMode::Checked,
        };

        Ok(Config { overflow })
    }

    pub(crate) fn overflow(&self) -> OverflowMode {
        self.overflow
    }
}
