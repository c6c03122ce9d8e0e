use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Map an empty flag value to "clear this field".
#[must_use]
pub fn clearable(raw: Option<&String>) -> Option<Option<String>> {
    raw.map(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use portal_core::enums::{ContentTab, HolidayType};

    use super::{clearable, parse_enum};

    #[test]
    fn parses_tab_names() {
        let tab: ContentTab = parse_enum("oms", "tab").expect("tab should parse");
        assert_eq!(tab, ContentTab::Oms);
        let tab: ContentTab = parse_enum("News", "tab").expect("case is ignored");
        assert_eq!(tab, ContentTab::News);
    }

    #[test]
    fn errors_on_unknown_value() {
        let err = parse_enum::<HolidayType>("festival", "holiday type").expect_err("should fail");
        assert!(err.to_string().contains("invalid holiday type 'festival'"));
    }

    #[test]
    fn empty_value_clears() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some(&String::new())), Some(None));
        assert_eq!(clearable(Some(&" R&D ".to_string())), Some(Some("R&D".into())));
    }
}
