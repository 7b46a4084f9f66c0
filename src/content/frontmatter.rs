//! Permissive frontmatter parsing.
//!
//! A document may open with a `---` delimited header of `key: value` lines.
//! The grammar is intentionally forgiving: lines without a colon are
//! skipped, quotes are stripped, values shaped like JSON string arrays
//! become lists, and `true`/`false` become flags. Nothing in here returns an
//! error; a document that fails header detection is simply all body.
//!
//! Value handling runs in a fixed order on each line: trim, unwrap one layer
//! of double quotes, attempt an array parse if the text still opens with
//! `[`, then coerce boolean literals. The order matters and matches the
//! content this app has always shipped with: a quoted `"true"` is still a
//! flag, and a quoted `"[draft]"` still gets an array attempt.

use std::collections::BTreeMap;

/// One parsed header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

/// Header fields plus everything after the closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub fields: BTreeMap<String, FieldValue>,
    pub body: String,
}

/// Parse a raw document into header fields and body.
///
/// The header must start at the first byte: `---`, a newline, field lines,
/// then a `---` line followed by a newline. Anything else (including an
/// unterminated header) makes the whole input the body.
pub fn parse(raw: &str) -> ParsedDocument {
    let Some((header, body)) = split_header(raw) else {
        return ParsedDocument {
            fields: BTreeMap::new(),
            body: raw.to_string(),
        };
    };

    let mut fields = BTreeMap::new();
    for line in header.split('\n') {
        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim();
        let value = parse_value(line[colon + 1..].trim());
        // Repeated keys keep the last occurrence.
        fields.insert(key.to_string(), value);
    }

    ParsedDocument {
        fields,
        body: body.to_string(),
    }
}

fn split_header(raw: &str) -> Option<(&str, &str)> {
    let rest = raw
        .strip_prefix("---\r\n")
        .or_else(|| raw.strip_prefix("---\n"))?;

    // Find the first line that is exactly `---` and is followed by a
    // newline; `----` or `--- ` lines are field material, not delimiters.
    let mut from = 0;
    while let Some(found) = rest[from..].find("\n---") {
        let idx = from + found;
        let tail = &rest[idx + 4..];
        let body = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix('\n'));
        if let Some(body) = body {
            let header = &rest[..idx];
            let header = header.strip_suffix('\r').unwrap_or(header);
            return Some((header, body));
        }
        from = idx + 1;
    }
    None
}

fn parse_value(trimmed: &str) -> FieldValue {
    let mut text = trimmed;
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text = &text[1..text.len() - 1];
    }

    if text.starts_with('[') {
        match serde_json::from_str::<Vec<String>>(text) {
            Ok(items) => return FieldValue::List(items),
            Err(_) => {
                log::warn!("keeping malformed array value as text: {text}");
            }
        }
    }

    match text {
        "true" => FieldValue::Flag(true),
        "false" => FieldValue::Flag(false),
        _ => FieldValue::Text(text.to_string()),
    }
}

/// Render fields and body back into a document.
///
/// The output re-parses to the same fields and body, with two caveats that
/// fall out of the grammar itself: values must not contain newlines (the
/// parser can never produce ones that do), and `Text("true")`/`Text("false")`
/// come back as flags no matter how they were written.
pub fn serialize(fields: &BTreeMap<String, FieldValue>, body: &str) -> String {
    let mut out = String::from("---\n");
    for (key, value) in fields {
        out.push_str(key);
        out.push_str(": ");
        match value {
            FieldValue::Text(text) => {
                if needs_quoting(text) {
                    out.push('"');
                    out.push_str(text);
                    out.push('"');
                } else {
                    out.push_str(text);
                }
            }
            FieldValue::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('"');
                    out.push_str(&item.replace('\\', "\\\\").replace('"', "\\\""));
                    out.push('"');
                }
                out.push(']');
            }
            FieldValue::Flag(flag) => out.push_str(if *flag { "true" } else { "false" }),
        }
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(body);
    out
}

fn needs_quoting(text: &str) -> bool {
    text != text.trim()
        || text.starts_with('[')
        || (text.len() >= 2 && text.starts_with('"') && text.ends_with('"'))
        || text == "true"
        || text == "false"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_document_without_header_is_all_body() {
        let parsed = parse("Just some markdown.\n\nNo header here.\n");
        assert!(parsed.fields.is_empty());
        assert_eq!(parsed.body, "Just some markdown.\n\nNo header here.\n");
    }

    #[test]
    fn test_unterminated_header_is_all_body() {
        let raw = "---\ntitle: Lost\ndate: 2024-01-01\n";
        let parsed = parse(raw);
        assert!(parsed.fields.is_empty());
        assert_eq!(parsed.body, raw);
    }

    #[test]
    fn test_header_must_start_at_first_byte() {
        let raw = "\n---\ntitle: Late\n---\nBody\n";
        let parsed = parse(raw);
        assert!(parsed.fields.is_empty());
        assert_eq!(parsed.body, raw);
    }

    #[test]
    fn test_basic_fields_and_body() {
        let parsed = parse("---\ntitle: Hello\ndate: 2024-05-01\n---\n# Heading\n\nText.\n");
        assert_eq!(parsed.fields.get("title"), Some(&text("Hello")));
        assert_eq!(parsed.fields.get("date"), Some(&text("2024-05-01")));
        assert_eq!(parsed.body, "# Heading\n\nText.\n");
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        let parsed = parse("---\ntitle: Ship it: a retrospective\n---\n\n");
        assert_eq!(
            parsed.fields.get("title"),
            Some(&text("Ship it: a retrospective"))
        );
    }

    #[test]
    fn test_quoted_value_keeps_colons_and_spacing() {
        let parsed = parse("---\ntitle: \"Colons: a love story\"\ndate: 2024-01-02\n---\nBody\n");
        assert_eq!(parsed.fields.get("title"), Some(&text("Colons: a love story")));
    }

    #[test]
    fn test_array_values() {
        let parsed = parse("---\ntags: [\"rust\", \"tui\"]\nempty: []\n---\n\n");
        assert_eq!(
            parsed.fields.get("tags"),
            Some(&FieldValue::List(vec!["rust".to_string(), "tui".to_string()]))
        );
        assert_eq!(parsed.fields.get("empty"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn test_malformed_array_stays_text() {
        let parsed = parse("---\ntags: [rust, tui\n---\n\n");
        assert_eq!(parsed.fields.get("tags"), Some(&text("[rust, tui")));
    }

    #[test]
    fn test_boolean_coercion_even_when_quoted() {
        let parsed = parse("---\npublished: false\ndraft: \"true\"\n---\n\n");
        assert_eq!(parsed.fields.get("published"), Some(&FieldValue::Flag(false)));
        assert_eq!(parsed.fields.get("draft"), Some(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let parsed = parse("---\ntitle: Ok\njust some text\n- a dash\n---\nBody\n");
        assert_eq!(parsed.fields.len(), 1);
        assert_eq!(parsed.fields.get("title"), Some(&text("Ok")));
    }

    #[test]
    fn test_crlf_documents() {
        let parsed = parse("---\r\ntitle: Windows\r\ndate: 2024-02-02\r\n---\r\nBody\r\n");
        assert_eq!(parsed.fields.get("title"), Some(&text("Windows")));
        assert_eq!(parsed.fields.get("date"), Some(&text("2024-02-02")));
        assert_eq!(parsed.body, "Body\r\n");
    }

    #[test]
    fn test_dashes_inside_body_are_untouched() {
        let parsed = parse("---\ntitle: T\n---\nintro\n\n---\n\noutro\n");
        assert_eq!(parsed.body, "intro\n\n---\n\noutro\n");
    }

    #[test]
    fn test_longer_dash_runs_do_not_close_the_header() {
        let raw = "---\ntitle: T\n----\nstill: header\n---\nBody\n";
        let parsed = parse(raw);
        assert_eq!(parsed.fields.get("still"), Some(&text("header")));
        assert_eq!(parsed.body, "Body\n");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let parsed = parse("---\ntitle: First\ntitle: Second\n---\n\n");
        assert_eq!(parsed.fields.get("title"), Some(&text("Second")));
    }

    #[test]
    fn test_empty_value() {
        let parsed = parse("---\nslug:\n---\n\n");
        assert_eq!(parsed.fields.get("slug"), Some(&text("")));
    }

    #[test]
    fn test_serialize_quotes_what_needs_it() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), text("  padded  "));
        fields.insert("weird".to_string(), text("\"quoted\""));
        let raw = serialize(&fields, "Body\n");

        let parsed = parse(&raw);
        assert_eq!(parsed.fields, fields);
        assert_eq!(parsed.body, "Body\n");
    }

    #[test]
    fn test_serialize_round_trips_typical_post() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), text("Colons: a love story"));
        fields.insert("date".to_string(), text("2024-01-15"));
        fields.insert(
            "tags".to_string(),
            FieldValue::List(vec!["rust".to_string(), "war stories".to_string()]),
        );
        fields.insert("published".to_string(), FieldValue::Flag(false));
        let raw = serialize(&fields, "# Post\n\nBody text.\n");

        let parsed = parse(&raw);
        assert_eq!(parsed.fields, fields);
        assert_eq!(parsed.body, "# Post\n\nBody text.\n");
    }
}
