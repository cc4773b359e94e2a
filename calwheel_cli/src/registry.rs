// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in palettes and locales, looked up by name.

use anyhow::bail;
use calwheel::{Locale, Palette};

/// Names accepted by [`palette`].
pub(crate) const PALETTE_NAMES: [&str; 2] = ["spectral", "vivid"];

/// Locales accepted by [`locale`].
pub(crate) const LOCALES: [Locale; 2] = [Locale::EN_US, Locale::FI];

/// The built-in palette called `name`.
pub(crate) fn palette(name: &str) -> anyhow::Result<Palette> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "spectral" => Palette::spectral(),
        "vivid" => Palette::vivid(),
        _ => bail!(
            "unknown palette '{name}' (expected one of: {})",
            PALETTE_NAMES.join(", ")
        ),
    })
}

/// The built-in locale with the tag `tag`, compared case-insensitively and with `_` as `-`.
pub(crate) fn locale(tag: &str) -> anyhow::Result<Locale> {
    let wanted = tag.replace('_', "-");
    if let Some(locale) = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&wanted)) {
        return Ok(*locale);
    }
    // Fall back to the language alone, so `fi-FI` finds `fi`.
    let language = wanted.split('-').next().unwrap_or_default();
    match LOCALES
        .iter()
        .find(|l| l.tag.eq_ignore_ascii_case(language))
    {
        Some(locale) => Ok(*locale),
        None => {
            let known: Vec<_> = LOCALES.iter().map(|l| l.tag).collect();
            bail!(
                "unknown locale '{tag}' (expected one of: {})",
                known.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_by_name() {
        assert_eq!(palette("vivid").expect("vivid"), Palette::vivid());
        assert_eq!(palette("Spectral").expect("spectral"), Palette::spectral());
        let err = palette("sepia").expect_err("unknown palette");
        assert!(err.to_string().contains("spectral, vivid"), "{err}");
    }

    #[test]
    fn locales_by_tag() {
        assert_eq!(locale("en-US").expect("en-US"), Locale::EN_US);
        assert_eq!(locale("en_us").expect("en_us"), Locale::EN_US);
        assert_eq!(locale("fi").expect("fi"), Locale::FI);
        assert_eq!(locale("fi-FI").expect("fi-FI"), Locale::FI);
        assert!(locale("de").is_err());
        // A bare language only matches a tag that is just that language.
        assert!(locale("en").is_err());
    }
}
