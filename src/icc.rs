//! Bundled ICC colour profiles.

use crate::{PdfaError, Result};
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};

/// Location of the bundled sRGB profile relative to the data root.
pub const ICC_PROFILE_RELPATH: &str = "data/sRGB.icc";

/// Environment variable that overrides the data root. Read once, on first use.
pub const DATA_DIR_ENV: &str = "PDFAMARK_DATA_DIR";

lazy_static! {
    static ref SRGB_ICC_PROFILE: PathBuf = {
        let root = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let path = root.join(ICC_PROFILE_RELPATH);
        log::debug!("bundled sRGB profile resolved to {}", path.display());
        path
    };
}

/// Absolute path of the bundled sRGB ICC profile.
pub fn srgb_icc_profile() -> &'static Path {
    &SRGB_ICC_PROFILE
}

/// ICC profiles that can be attached as a PDF/A OutputIntent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IccProfile {
    Srgb,
}

impl IccProfile {
    /// Look up a profile by its identifier (`"sRGB"`).
    ///
    /// Any other identifier is [`PdfaError::NotImplemented`].
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        match identifier {
            "sRGB" => Ok(Self::Srgb),
            other => Err(PdfaError::NotImplemented(format!(
                "only sRGB is supported, got ICC identifier '{other}'"
            ))),
        }
    }

    /// The `/OutputConditionIdentifier` written into the OutputIntent.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
        }
    }

    /// Filesystem path of the profile data.
    pub fn path(self) -> &'static Path {
        match self {
            Self::Srgb => srgb_icc_profile(),
        }
    }
}
