use std::process;

use kana_core::{FormatName, Registry};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn convert_cmd(text: &str, from: &str, to: &str) {
    let out = die!(Registry::global().convert(text, from, to), "Error: {}");
    println!("{out}");
}

pub fn formats_cmd() {
    print!("{}", format_list(Registry::global()));
}

/// One line per format: name and supported directions.
pub fn format_list(registry: &Registry) -> String {
    let mut out = String::new();
    for name in FormatName::ALL {
        let format = registry.format(name);
        let direction = if format.can_emit() { "in/out" } else { "in" };
        out.push_str(&format!("{:<16}{direction}\n", name.as_str()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_format() {
        let list = format_list(Registry::global());
        assert_eq!(list.lines().count(), FormatName::ALL.len());
        assert!(list.contains("hepburn-strict  in/out\n"));
        assert!(list.ends_with("mixed           in\n"));
    }
}
