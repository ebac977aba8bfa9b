//! Font metrics: the height/width ratio of a monospace character cell.
//!
//! The ratio is always an explicit value handed to the planner. It either
//! comes from configuration ([`FixedRatio`]) or is measured from the
//! terminal that will display the output ([`TerminalProbe`]). Measurement
//! failures are errors; there is no silent fallback ratio, since a wrong one
//! distorts every rendering.

use std::fmt;

use crate::error::RenderError;

/// Largest accepted font ratio.
///
/// The planned width grows linearly with the ratio, so an unbounded value
/// can ask for a grid far larger than any display.
pub const MAX_FONT_RATIO: f64 = 10.0;

/// Height / width of one monospace glyph cell. Always positive, finite and
/// at most [`MAX_FONT_RATIO`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontRatio(f64);

impl FontRatio {
    pub fn new(ratio: f64) -> Result<Self, RenderError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(RenderError::invalid(format!(
                "font ratio must be a positive number, got {}",
                ratio
            )));
        }
        if ratio > MAX_FONT_RATIO {
            return Err(RenderError::invalid(format!(
                "font ratio must be at most {}, got {}",
                MAX_FONT_RATIO, ratio
            )));
        }
        Ok(Self(ratio))
    }

    /// Ratio of a cell measuring `width` by `height` pixels.
    pub fn from_cell(width: f64, height: f64) -> Result<Self, RenderError> {
        if width <= 0.0 {
            return Err(RenderError::invalid(format!(
                "glyph cell width must be positive, got {}",
                width
            )));
        }
        Self::new(height / width)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for FontRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Source of the font ratio.
pub trait FontMetricsProbe {
    /// Measure the ratio of the environment that will display the text.
    fn measure(&self) -> Result<FontRatio, RenderError>;
}

/// Probe that always answers with a preconfigured ratio.
#[derive(Debug, Clone, Copy)]
pub struct FixedRatio(pub FontRatio);

impl FontMetricsProbe for FixedRatio {
    fn measure(&self) -> Result<FontRatio, RenderError> {
        Ok(self.0)
    }
}

/// Probe that asks the controlling terminal for its cell size.
///
/// Uses the window size reported by `TIOCGWINSZ`: pixel extent divided by
/// rows and columns. Many terminals leave the pixel fields at zero, in which
/// case the measurement is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl FontMetricsProbe for TerminalProbe {
    #[cfg(unix)]
    fn measure(&self) -> Result<FontRatio, RenderError> {
        let mut last_err = String::from("no terminal attached");
        for fd in [libc::STDOUT_FILENO, libc::STDERR_FILENO, libc::STDIN_FILENO] {
            match query_winsize(fd) {
                Ok(ws) => match ratio_from_winsize(ws.ws_row, ws.ws_col, ws.ws_xpixel, ws.ws_ypixel)
                {
                    Ok(ratio) => {
                        log::debug!("measured font ratio {} on fd {}", ratio, fd);
                        return Ok(ratio);
                    }
                    Err(e) => last_err = e.to_string(),
                },
                Err(e) => last_err = format!("ioctl(TIOCGWINSZ) on fd {} failed: {}", fd, e),
            }
        }
        Err(RenderError::EnvironmentUnavailable(last_err))
    }

    #[cfg(not(unix))]
    fn measure(&self) -> Result<FontRatio, RenderError> {
        Err(RenderError::EnvironmentUnavailable(
            "terminal cell size queries are only supported on Unix".to_string(),
        ))
    }
}

#[cfg(unix)]
fn query_winsize(fd: libc::c_int) -> std::io::Result<libc::winsize> {
    // SAFETY: `ioctl` is an FFI call writing into a zeroed, properly sized `winsize`.
    unsafe {
        let mut ws: libc::winsize = std::mem::zeroed();
        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) == -1 {
            return Err(std::io::Error::last_os_error());
        }
        Ok(ws)
    }
}

/// Compute the cell ratio from a terminal window size report.
///
/// Fails with `EnvironmentUnavailable` if any field is zero, which is how
/// terminals signal that they do not know their pixel size.
pub fn ratio_from_winsize(
    rows: u16,
    cols: u16,
    x_pixels: u16,
    y_pixels: u16,
) -> Result<FontRatio, RenderError> {
    if rows == 0 || cols == 0 || x_pixels == 0 || y_pixels == 0 {
        return Err(RenderError::EnvironmentUnavailable(format!(
            "terminal reported {}x{} cells over {}x{} pixels",
            cols, rows, x_pixels, y_pixels
        )));
    }
    let cell_w = x_pixels as f64 / cols as f64;
    let cell_h = y_pixels as f64 / rows as f64;
    FontRatio::from_cell(cell_w, cell_h)
        .map_err(|e| RenderError::EnvironmentUnavailable(e.to_string()))
}
