//! Rendering backend selection.
//!
//! A backend decides where a figure ends up: a full-screen terminal view
//! or an SVG file. Availability depends on the host, so selection can fail.

use std::fmt;
use std::str::FromStr;

use crossterm::tty::IsTty;

use crate::error::{MagviewError, Result};

/// Where figures are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    /// Interactive full-screen terminal view.
    Terminal,
    /// Non-interactive SVG file output.
    Svg,
}

impl RenderBackend {
    /// All known backends.
    pub const ALL: [RenderBackend; 2] = [RenderBackend::Terminal, RenderBackend::Svg];

    /// Get the canonical backend name.
    pub fn name(self) -> &'static str {
        match self {
            RenderBackend::Terminal => "terminal",
            RenderBackend::Svg => "svg",
        }
    }

    /// Whether `show` blocks on user interaction.
    pub fn is_interactive(self) -> bool {
        matches!(self, RenderBackend::Terminal)
    }

    /// Check that this backend can be used, given whether stdout is a terminal.
    pub fn check_available(self, is_tty: bool) -> Result<Self> {
        match self {
            RenderBackend::Terminal if !is_tty => Err(MagviewError::backend_unavailable(
                self.name(),
                "stdout is not a terminal",
            )),
            _ => Ok(self),
        }
    }

    /// Pick the backend used when none was configured.
    pub fn detect_default(is_tty: bool) -> Result<Self> {
        if is_tty {
            Ok(RenderBackend::Terminal)
        } else {
            Err(MagviewError::backend_unavailable(
                "default",
                "no terminal attached and no backend configured",
            ))
        }
    }
}

impl FromStr for RenderBackend {
    type Err = MagviewError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "terminal" | "tui" | "term" => Ok(RenderBackend::Terminal),
            "svg" => Ok(RenderBackend::Svg),
            _ => {
                let known: Vec<&str> = Self::ALL.iter().map(|b| b.name()).collect();
                Err(MagviewError::backend_unavailable(
                    name,
                    format!("unknown backend, expected one of: {}", known.join(", ")),
                ))
            },
        }
    }
}

impl fmt::Display for RenderBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether this process writes to an interactive terminal.
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_tty()
}
