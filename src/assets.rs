//! Where to find a currency's icon.
//!
//! Icons live in a remote asset archive that the host app downloads and
//! extracts. If the archive doesn't have an icon for a ticker, the host renders
//! one itself from the ticker and the currency's primary color.

use crate::{
    config::Config,
    models::{
        color::{Color, ColorPair},
        currency::Currency,
        metadata::CurrencyMetadata,
    },
};
use std::path::{Path, PathBuf};

const BUNDLE: &str = "brd-tokens";
const STAGING_BUNDLE: &str = "brd-tokens-staging";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconStyle {
    /// Icon on a square background of the currency's color
    SquareBackground,
    /// Icon alone, tinted by the caller
    NoBackground,
}

impl IconStyle {
    fn directory(&self) -> &'static str {
        match self {
            IconStyle::SquareBackground => "white-square-bg",
            IconStyle::NoBackground => "white-no-bg",
        }
    }
}

/// The extracted asset archive.
pub trait AssetArchive {
    /// Whether a file exists at `path`, relative to the archive root.
    fn contains(&self, path: &Path) -> bool;
}

/// Where an icon comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum IconSource {
    /// A file inside the asset archive
    Archive(PathBuf),
    /// Nothing in the archive, so draw one
    Generated {
        code: String,
        color: Color,
    },
}

/// Name of the asset bundle to download.
pub fn bundle_name(config: &Config) -> &'static str {
    if config.staging_assets() { STAGING_BUNDLE } else { BUNDLE }
}

/// Path of an icon inside the asset archive.
pub fn icon_path(code: &str, style: IconStyle) -> PathBuf {
    Path::new(style.directory()).join(format!("{}.png", code.to_lowercase()))
}

/// Resolve an icon for a ticker, falling back to a generated icon in the
/// given color.
pub fn icon_source<A: AssetArchive + ?Sized>(archive: Option<&A>, code: &str, color: Color, style: IconStyle) -> IconSource {
    let path = icon_path(code, style);
    match archive {
        Some(archive) if archive.contains(&path) => IconSource::Archive(path),
        _ => IconSource::Generated {
            code: code.to_uppercase(),
            color,
        },
    }
}

/// Anything we can draw an icon for.
pub trait CurrencyWithIcon {
    /// Ticker code the icon is filed under.
    fn icon_code(&self) -> String;

    fn icon_colors(&self) -> ColorPair;

    /// Resolve this currency's icon.
    fn icon<A: AssetArchive + ?Sized>(&self, archive: Option<&A>, style: IconStyle) -> IconSource {
        icon_source(archive, &self.icon_code(), self.icon_colors().primary, style)
    }
}

impl CurrencyWithIcon for Currency {
    fn icon_code(&self) -> String {
        self.code()
    }

    fn icon_colors(&self) -> ColorPair {
        self.colors()
    }
}

impl CurrencyWithIcon for CurrencyMetadata {
    fn icon_code(&self) -> String {
        self.code().clone()
    }

    fn icon_colors(&self) -> ColorPair {
        self.colors()
    }
}
