//! Reduced-palette terminal detection.
//!
//! Legacy Windows consoles render only 16 colors, and a handful of theme
//! decisions (contrast overlays, the bespoke `win32` code style) hinge on
//! knowing that up front. Detection runs once per catalog construction and
//! reads nothing but already-resolved environment state.
//!
//! # Usage
//!
//! Detection is typically invoked by the caller when building UI catalogs.
//! Use [`set_palette_detector`] to override detection for testing or for
//! hosts that know their terminal better than the heuristics do.
//!
//! ```rust
//! use replstyle::{set_palette_detector, Palette};
//!
//! // Force the reduced palette for testing
//! set_palette_detector(|| Palette::Ansi16);
//!
//! // Force the extended palette
//! set_palette_detector(|| Palette::Extended);
//! ```

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Color capability of the attached terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Classic 16-color console (legacy Windows conhost).
    Ansi16,
    /// Anything richer: 256-color or truecolor.
    Extended,
}

impl Palette {
    /// Returns true for the reduced 16-color palette.
    pub fn is_reduced(self) -> bool {
        matches!(self, Palette::Ansi16)
    }
}

type PaletteDetector = fn() -> Palette;

static PALETTE_DETECTOR: Lazy<Mutex<PaletteDetector>> =
    Lazy::new(|| Mutex::new(default_palette_detector));

/// Overrides the detector used to determine the terminal palette.
///
/// # Example
///
/// ```rust
/// use replstyle::{detect_palette, set_palette_detector, Palette};
///
/// set_palette_detector(|| Palette::Ansi16);
/// assert_eq!(detect_palette(), Palette::Ansi16);
/// # set_palette_detector(|| Palette::Extended);
/// ```
pub fn set_palette_detector(detector: PaletteDetector) {
    let mut guard = PALETTE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the terminal's color palette.
///
/// Returns [`Palette::Ansi16`] only when all three hold: the host OS is
/// Windows, no ConEmu ANSI session is active, and the VT probe reports no
/// extended-color support. Everything else gets [`Palette::Extended`].
///
/// The detector can be overridden via [`set_palette_detector`] for testing.
pub fn detect_palette() -> Palette {
    let detector = PALETTE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn default_palette_detector() -> Palette {
    if cfg!(windows) && !is_conemu_ansi() && !vt_supported() {
        Palette::Ansi16
    } else {
        Palette::Extended
    }
}

/// ConEmu announces ANSI capability via `ConEmuANSI=ON`.
fn is_conemu_ansi() -> bool {
    std::env::var("ConEmuANSI")
        .map(|value| value.eq_ignore_ascii_case("on"))
        .unwrap_or(false)
}

/// Best-effort VT probe: Windows Terminal and ANSICON both mark their
/// sessions in the environment; legacy conhost sets neither.
fn vt_supported() -> bool {
    std::env::var_os("WT_SESSION").is_some() || std::env::var_os("ANSICON").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_palette_detector(|| Palette::Ansi16);
        assert_eq!(detect_palette(), Palette::Ansi16);

        set_palette_detector(|| Palette::Extended);
        assert_eq!(detect_palette(), Palette::Extended);

        // Reset
        set_palette_detector(default_palette_detector);
    }

    #[test]
    #[serial]
    fn test_detect_is_stable() {
        set_palette_detector(default_palette_detector);
        // Environment state doesn't change under us, so repeated calls agree.
        assert_eq!(detect_palette(), detect_palette());
    }

    #[cfg(not(windows))]
    #[test]
    #[serial]
    fn test_non_windows_is_extended() {
        set_palette_detector(default_palette_detector);
        assert_eq!(detect_palette(), Palette::Extended);
    }

    #[test]
    fn test_is_reduced() {
        assert!(Palette::Ansi16.is_reduced());
        assert!(!Palette::Extended.is_reduced());
    }
}
