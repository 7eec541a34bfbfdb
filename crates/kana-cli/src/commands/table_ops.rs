use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::format::FormatSummary;
use kana_core::lemma::{Alphabet, LemmaGroup};
use kana_core::{FormatName, Registry};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

const KEY_COLUMN: usize = 10;

#[derive(Serialize)]
struct GroupDump<'a> {
    group: LemmaGroup,
    lemmas: Vec<&'a str>,
}

#[derive(Serialize)]
struct TablesDump<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alphabet: Vec<GroupDump<'a>>,
    formats: Vec<FormatSummary>,
}

/// Dump the alphabet and every format's layers, or one format's layers.
pub fn tables_cmd(format: Option<&str>, json: bool) {
    let registry = Registry::global();
    let (summaries, with_alphabet) = match format {
        Some(name) => {
            let name: FormatName = die!(name.parse(), "Error: {}");
            (vec![registry.format(name).summary()], false)
        }
        None => (registry.summaries(), true),
    };
    let out = if json {
        die!(
            render_json(registry.alphabet(), &summaries, with_alphabet),
            "Error serializing tables: {}"
        )
    } else {
        render_text(registry.alphabet(), &summaries, with_alphabet)
    };
    println!("{out}");
}

pub fn render_json(
    alphabet: &Alphabet,
    summaries: &[FormatSummary],
    with_alphabet: bool,
) -> Result<String, serde_json::Error> {
    let groups = if with_alphabet {
        LemmaGroup::ALL
            .iter()
            .map(|&group| GroupDump {
                group,
                lemmas: alphabet.in_group(group).collect(),
            })
            .collect()
    } else {
        Vec::new()
    };
    serde_json::to_string_pretty(&TablesDump {
        alphabet: groups,
        formats: summaries.to_vec(),
    })
}

pub fn render_text(alphabet: &Alphabet, summaries: &[FormatSummary], with_alphabet: bool) -> String {
    let mut out = String::new();
    if with_alphabet {
        out.push_str(&format!("=== alphabet ({} lemmas) ===\n", alphabet.len()));
        for group in LemmaGroup::ALL {
            let lemmas: Vec<&str> = alphabet.in_group(group).collect();
            out.push_str(&format!("{:<12}{}\n", group.as_str(), lemmas.join(" ")));
        }
        out.push('\n');
    }
    for summary in summaries {
        let direction = if summary.can_emit { "in/out" } else { "in" };
        out.push_str(&format!("=== {} ({direction}) ===\n", summary.name));
        for layer in &summary.layers {
            out.push_str(&format!("--- {} ---\n", layer.kind));
            for (surface, canonical) in &layer.parse {
                out.push_str(&format!("  {} -> {canonical}\n", pad(surface)));
            }
            if !summary.can_emit {
                continue;
            }
            // Emit rows that differ from the inverse of a parse row.
            for (canonical, surface) in &layer.emit {
                let inverse = layer
                    .parse
                    .iter()
                    .any(|(s, c)| c == canonical && s.eq_ignore_ascii_case(surface));
                if !inverse {
                    out.push_str(&format!("  {} <- {canonical}\n", pad(surface)));
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Left-align by display width so wide kana line up with Latin keys.
fn pad(key: &str) -> String {
    let width = UnicodeWidthStr::width(key);
    if width < KEY_COLUMN {
        format!("{key}{}", " ".repeat(KEY_COLUMN - width))
    } else {
        key.to_string()
    }
}
