// crates/enigma-core/src/config/notation.rs
//
// Key-sheet style text notation:
//   wheels     "I II III", "Beta,II,IV,I"
//   settings   "AAA", "A A A", "1 1 1", "01 12 26"
//   plugs      "AV BS CG", "AV,BS"

use crate::config::model::Setting;
use crate::error::{EnigmaError, Result};

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

pub fn parse_wheels(text: &str) -> Result<Vec<String>> {
    let names: Vec<String> = tokens(text).map(str::to_string).collect();
    if names.is_empty() {
        return Err(EnigmaError::Notation("no rotors given".into()));
    }
    Ok(names)
}

/// A lone token that is not a number is read one symbol per rotor ("AAA").
pub fn parse_settings(text: &str) -> Result<Vec<Setting>> {
    let toks: Vec<&str> = tokens(text).collect();
    if let [only] = toks.as_slice() {
        if !is_number(only) {
            return Ok(only.chars().map(Setting::Symbol).collect());
        }
    }
    toks.into_iter().map(parse_setting).collect()
}

pub fn parse_setting(token: &str) -> Result<Setting> {
    if is_number(token) {
        let Ok(n) = token.parse::<u16>() else {
            let msg = format!("setting {token:?} is too large");
            return Err(EnigmaError::Notation(msg));
        };
        return Ok(Setting::Number(n));
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Setting::Symbol(c)),
        _ => Err(EnigmaError::Notation(format!(
            "setting {token:?} must be one symbol or a number"
        ))),
    }
}

pub fn parse_plugs(text: &str) -> Result<Vec<String>> {
    tokens(text)
        .map(|t| {
            if t.chars().count() == 2 {
                Ok(t.to_string())
            } else {
                Err(EnigmaError::Notation(format!(
                    "plug pair {t:?} must be two symbols"
                )))
            }
        })
        .collect()
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_accept_letters_and_numbers() {
        use Setting::*;
        assert_eq!(
            parse_settings("BUL").unwrap(),
            vec![Symbol('B'), Symbol('U'), Symbol('L')]
        );
        assert_eq!(
            parse_settings("02 21 12").unwrap(),
            vec![Number(2), Number(21), Number(12)]
        );
        assert_eq!(
            parse_settings("A, 5,Z").unwrap(),
            vec![Symbol('A'), Number(5), Symbol('Z')]
        );
        assert_eq!(parse_settings("7").unwrap(), vec![Number(7)]);
        assert!(parse_settings("AB CD").is_err());
    }

    #[test]
    fn wheels_split_on_spaces_and_commas() {
        assert_eq!(
            parse_wheels("Beta, II IV,I").unwrap(),
            vec!["Beta", "II", "IV", "I"]
        );
        assert!(parse_wheels("  ").is_err());
    }

    #[test]
    fn plugs_must_be_pairs() {
        assert_eq!(parse_plugs("AV BS").unwrap(), vec!["AV", "BS"]);
        assert!(parse_plugs("").unwrap().is_empty());
        assert!(parse_plugs("AVB").is_err());
    }
}
