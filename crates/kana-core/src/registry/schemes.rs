use std::collections::BTreeMap;
use std::sync::Arc;

use super::FormatName;
use crate::error::ConfigError;
use crate::format::{ChouonStyle, Format, MultiFormat, NasalLayer, RomajiFormat, TextFormat};
use crate::mapping::Mapping;
use crate::settings::Settings;
use crate::table::data;

/// Table sources for one romanization.
struct Scheme {
    base: &'static [&'static str],
    emit_only: &'static [&'static str],
    sokuon: &'static [&'static str],
    hepburn_nasal: bool,
}

fn scheme(name: FormatName) -> Option<Scheme> {
    let scheme = match name {
        FormatName::Nihon => Scheme {
            base: &[data::ROMAJI_SHARED, data::NIHON],
            emit_only: &[],
            sokuon: &[data::SOKUON_BASE],
            hepburn_nasal: false,
        },
        FormatName::Kunrei => Scheme {
            base: &[data::ROMAJI_SHARED, data::KUNREI],
            emit_only: &[data::KUNREI_EMIT_ONLY],
            sokuon: &[data::SOKUON_BASE],
            hepburn_nasal: false,
        },
        FormatName::HepburnStrict => Scheme {
            base: &[data::ROMAJI_SHARED, data::HEPBURN],
            emit_only: &[data::HEPBURN_EMIT_ONLY],
            sokuon: &[data::SOKUON_BASE, data::SOKUON_HEPBURN],
            hepburn_nasal: true,
        },
        FormatName::Hepburn => Scheme {
            base: &[
                data::ROMAJI_SHARED,
                data::HEPBURN,
                data::HEPBURN_EXTENDED,
                data::HEPBURN_RARE,
            ],
            emit_only: &[data::HEPBURN_EMIT_ONLY, data::HEPBURN_RARE_EMIT_ONLY],
            sokuon: &[
                data::SOKUON_BASE,
                data::SOKUON_HEPBURN,
                data::SOKUON_HEPBURN_EXTENDED,
            ],
            hepburn_nasal: true,
        },
        FormatName::Wapuro => Scheme {
            base: &[data::ROMAJI_SHARED, data::WAPURO],
            emit_only: &[],
            sokuon: &[data::SOKUON_BASE, data::SOKUON_WAPURO],
            hepburn_nasal: false,
        },
        FormatName::Hiragana | FormatName::Katakana | FormatName::Mixed => return None,
    };
    Some(scheme)
}

fn romaji(name: FormatName, settings: &Settings) -> Result<Option<RomajiFormat>, ConfigError> {
    let (Some(scheme), Some(chouon)) = (scheme(name), settings.chouon.for_format(name)) else {
        return Ok(None);
    };
    let nasal = if scheme.hepburn_nasal && settings.nasal.hepburn_labial_m {
        NasalLayer::with_labial_m()?
    } else {
        NasalLayer::standard()?
    };
    Ok(Some(RomajiFormat::new(
        name.as_str(),
        Mapping::from_tables(scheme.base, &[], scheme.emit_only)?,
        nasal,
        Mapping::from_tables(scheme.sokuon, &[], &[])?,
        ChouonStyle::mapping(chouon)?,
    )))
}

/// Build every registered format.
pub(super) fn build_all(
    settings: &Settings,
) -> Result<BTreeMap<FormatName, Arc<dyn Format>>, ConfigError> {
    let mut formats: BTreeMap<FormatName, Arc<dyn Format>> = BTreeMap::new();
    formats.insert(FormatName::Hiragana, Arc::new(TextFormat::hiragana()?));
    formats.insert(FormatName::Katakana, Arc::new(TextFormat::katakana()?));
    for name in FormatName::ALL {
        if let Some(format) = romaji(name, settings)? {
            formats.insert(name, Arc::new(format));
        }
    }

    let mut constituents = Vec::with_capacity(3);
    for name in [settings.mixed.romaji, FormatName::Hiragana, FormatName::Katakana] {
        if let Some(format) = formats.get(&name) {
            constituents.push(Arc::clone(format));
        }
    }
    formats.insert(
        FormatName::Mixed,
        Arc::new(MultiFormat::new(FormatName::Mixed.as_str(), constituents)),
    );
    Ok(formats)
}
