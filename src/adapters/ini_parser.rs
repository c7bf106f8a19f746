//! INI grammar on top of `configparser`.
//!
//! The parser runs case-sensitive with `;` as the only comment symbol, so a
//! `;` at the start of a line drops the line and a `;` inside a value cuts the
//! value short. Keys that appear before any `[section]` header land in
//! [`GLOBAL_SECTION`], unless the file declares that section itself.

use crate::domain::document::ConfigDocument;
use crate::domain::error::ConfigError;
use crate::domain::section::SectionTable;
use crate::domain::value::{IniValue, VALUE_DELIMITER};
use configparser::ini::Ini;

/// Section that collects keys written outside of any header.
pub const GLOBAL_SECTION: &str = "default";

/// Parser-side bucket for headerless keys. No header line can produce it.
const HEADERLESS_BUCKET: &str = "\n";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse INI text into a [`ConfigDocument`].
///
/// `origin` names the content in error messages, usually the file path.
pub fn parse_str(content: &str, origin: &str) -> Result<ConfigDocument, ConfigError> {
    let mut ini = Ini::new_cs();
    ini.set_comment_symbols(&[VALUE_DELIMITER]);
    ini.set_default_section(HEADERLESS_BUCKET);

    let content = content.trim_start_matches(BYTE_ORDER_MARK);
    let map = ini
        .read(content.to_string())
        .map_err(|reason| ConfigError::invalid_path(origin, format!("malformed ini: {reason}")))?;

    let declares_global = map.contains_key(GLOBAL_SECTION);
    let mut sections = Vec::with_capacity(map.len());
    for (name, entries) in map {
        let name = if name == HEADERLESS_BUCKET {
            if entries.is_empty() {
                continue;
            }
            if declares_global {
                return Err(ConfigError::invalid_path(
                    origin,
                    format!(
                        "malformed ini: keys outside any section clash with explicit [{GLOBAL_SECTION}]"
                    ),
                ));
            }
            log::debug!("{origin}: keys outside any section grouped under [{GLOBAL_SECTION}]");
            GLOBAL_SECTION.to_string()
        } else {
            name
        };
        let mut table = SectionTable::new();
        for (key, raw) in entries {
            // A bare key without a delimiter reads as an empty value.
            table.insert(key, IniValue::coerce(raw.as_deref().unwrap_or_default()));
        }
        sections.push((name, table));
    }

    Ok(sections.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
; Production site
[production]
host = localhost
username = user
password = mypassword

[debug]
isEnabled = 1
allowedIp = 192.168.1.2;10.1.2.2
password = mypassword
logLevel = verbose
"#;

    fn parse(content: &str) -> ConfigDocument {
        parse_str(content, "test.ini").unwrap()
    }

    #[test]
    fn parses_sections_in_file_order() {
        let doc = parse(CONFIG);
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["production", "debug"]);
    }

    #[test]
    fn parses_keys_in_file_order() {
        let doc = parse(CONFIG);
        let keys: Vec<&str> = doc.section("production").unwrap().keys().collect();
        assert_eq!(keys, vec!["host", "username", "password"]);
        assert_eq!(doc.section("debug").unwrap().len(), 4);
    }

    #[test]
    fn coerces_flags_and_truncates_at_delimiter() {
        let doc = parse(CONFIG);
        let debug = doc.section("debug").unwrap();
        assert_eq!(debug.get("isEnabled"), Some(&IniValue::Bool(true)));
        assert_eq!(debug.get("allowedIp"), Some(&IniValue::from("192.168.1.2")));
    }

    #[test]
    fn keys_and_sections_are_case_sensitive() {
        let doc = parse("[Main]\nKey = A\nkey = b\n");
        assert!(doc.contains_section("Main"));
        assert!(!doc.contains_section("main"));
        let main = doc.section("Main").unwrap();
        assert_eq!(main.get("Key"), Some(&IniValue::from("A")));
        assert_eq!(main.get("key"), Some(&IniValue::from("b")));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let doc = parse("[s]\nhost = first\nhost = second\n");
        let s = doc.section("s").unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("host"), Some(&IniValue::from("second")));
    }

    #[test]
    fn comment_lines_are_skipped() {
        let doc = parse("[s]\n; host = ignored\nport = 80\n");
        let s = doc.section("s").unwrap();
        assert!(!s.contains_key("host"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn keys_outside_sections_go_to_global_section() {
        let doc = parse("name = app\n\n[s]\nk = v\n");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec![GLOBAL_SECTION, "s"]);
        assert_eq!(
            doc.section(GLOBAL_SECTION).unwrap().get("name"),
            Some(&IniValue::from("app"))
        );
    }

    #[test]
    fn global_section_hidden_when_empty() {
        let doc = parse("[only]\nk = v\n");
        assert!(!doc.contains_section(GLOBAL_SECTION));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn explicit_empty_default_section_is_listed() {
        let doc = parse("[production]\nhost = a\n[default]\n");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["production", GLOBAL_SECTION]);
        assert_eq!(doc.section(GLOBAL_SECTION).unwrap().len(), 0);
    }

    #[test]
    fn explicit_default_section_keeps_its_own_keys() {
        let doc = parse("[default]\nh = 2\n[s]\nk = v\n");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec![GLOBAL_SECTION, "s"]);
        let keys: Vec<&str> = doc.section(GLOBAL_SECTION).unwrap().keys().collect();
        assert_eq!(keys, vec!["h"]);
    }

    #[test]
    fn headerless_keys_clash_with_explicit_default() {
        let err = parse_str("g = 1\n[default]\nh = 2\n", "clash.ini").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidPath { ref reason, .. } if reason.contains("clash"))
        );
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let doc = parse("\u{feff}[a]\nk = v\n");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["a"]);
        assert!(!doc.contains_section(GLOBAL_SECTION));
    }

    #[test]
    fn truncated_quoted_value_has_no_dangling_quote() {
        let doc = parse("[s]\nk = \"x;y\"\n");
        assert_eq!(doc.section("s").unwrap().get("k"), Some(&IniValue::from("x")));
    }

    #[test]
    fn empty_content_has_no_sections() {
        let doc = parse("");
        assert!(doc.is_empty());
    }

    #[test]
    fn quoted_value_is_text() {
        let doc = parse("[s]\nflag = \"yes\"\n");
        assert_eq!(
            doc.section("s").unwrap().get("flag"),
            Some(&IniValue::from("yes"))
        );
    }

    #[test]
    fn valueless_and_empty_keys_read_as_empty_text() {
        let doc = parse("[s]\nvalueless\nempty =\n");
        let s = doc.section("s").unwrap();
        assert_eq!(s.get("valueless"), Some(&IniValue::from("")));
        assert_eq!(s.get("empty"), Some(&IniValue::from("")));
    }

    #[test]
    fn unterminated_header_is_malformed() {
        let err = parse_str("[s\nk = v\n", "broken.ini").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidPath { ref path, .. } if path == "broken.ini")
        );
    }
}
