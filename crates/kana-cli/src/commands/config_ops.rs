use std::fs;
use std::process;

use kana_core::settings::{self, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before the registry is first used.
pub fn install_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
    tracing::debug!(file, "custom settings installed");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("{}", describe(&s));
}

fn describe(s: &Settings) -> String {
    format!(
        "OK: chouon.hepburn={:?}, nasal.hepburn_labial_m={}, mixed.romaji={}",
        s.chouon.hepburn, s.nasal.hepburn_labial_m, s.mixed.romaji
    )
}
