use std::sync::LazyLock;

use regex::Regex;

// Apenas dígitos e espaços ASCII contam como horário.
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\s)([0-9]{2}):([0-9]{2})(?-u:\s)").expect("valid time regex")
});

/// Apara o valor e reduz cada sequência de espaços a um único espaço.
pub(crate) fn collapse_spaces(raw: &str) -> String {
    raw.trim()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Forma compactada e escapada usada em `NAME` e `MEMO`.
pub(crate) fn clean_text(raw: &str) -> String {
    escape_xml(&collapse_spaces(raw))
}

/// Primeiro `HH:MM` delimitado por espaços no memo, como `HHMM`.
pub(crate) fn time_fragment(memo: &str) -> String {
    TIME_OF_DAY
        .captures(memo)
        .map(|caps| format!("{}{}", &caps[1], &caps[2]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Foo   Bar  Baz", "Foo Bar Baz")]
    #[case("  Albert Heijn 1234   ", "Albert Heijn 1234")]
    #[case("single", "single")]
    #[case("", "")]
    #[case("a b", "a b")]
    fn test_collapse_spaces(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_spaces(input), expected);
    }

    #[rstest]
    #[case("Energy & Water", "Energy &amp; Water")]
    #[case("A&B&C", "A&amp;B&amp;C")]
    #[case("<tag>", "&lt;tag&gt;")]
    #[case("plain", "plain")]
    fn test_escape_xml(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_xml(input), expected);
    }

    #[test]
    fn test_clean_text_collapses_before_escaping() {
        assert_eq!(clean_text("  Jansen  &  Zn  "), "Jansen &amp; Zn");
    }

    #[rstest]
    #[case("Pasvolgnr:001 12-01-2016 14:35 Transactie:A1B2", "1435")]
    #[case("Betaald om 09:05 bij kassa", "0905")]
    #[case("twee tijden 08:00 en 17:30 hier", "0800")]
    #[case("14:35 aan het begin", "")]
    #[case("aan het eind 14:35", "")]
    #[case("geen tijd", "")]
    #[case("te kort 9:05 hier", "")]
    #[case("oostarabisch \u{0661}\u{0662}:\u{0663}\u{0664} cijfers", "")]
    #[case("harde\u{00a0}14:35\u{00a0}spatie", "")]
    #[case("tab\t07:45\tgescheiden", "0745")]
    fn test_time_fragment(#[case] memo: &str, #[case] expected: &str) {
        assert_eq!(time_fragment(memo), expected);
    }
}
