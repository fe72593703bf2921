// crates/enigma-cli/src/io/text.rs
//
// Message preparation for the keyboard and grouping for the printer.
// - Lenient: uppercase, then drop anything the machine has no key for.
// - Strict: only whitespace is removed; the machine rejects the rest.

use enigma_core::Alphabet;

#[derive(Debug, PartialEq, Eq)]
pub struct Prepared {
    pub text: String,
    /// Non-whitespace symbols removed.
    pub dropped: usize,
}

pub fn prepare(input: &str, alphabet: &Alphabet) -> Prepared {
    let mut text = String::with_capacity(input.len());
    let mut dropped = 0usize;
    for c in input.chars() {
        if alphabet.contains(c) {
            text.push(c);
            continue;
        }
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) if alphabet.contains(u) => text.push(u),
            _ if c.is_whitespace() => {}
            _ => dropped += 1,
        }
    }
    Prepared { text, dropped }
}

pub fn strip_whitespace(input: &str) -> Prepared {
    Prepared {
        text: input.chars().filter(|c| !c.is_whitespace()).collect(),
        dropped: 0,
    }
}

/// Space-separated groups of `n` symbols; `n == 0` leaves the text as is.
pub fn group(text: &str, n: usize) -> String {
    if n == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(n)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_uppercases_and_counts_drops() {
        let p = prepare("Hello, World!\r\n", &Alphabet::latin());
        assert_eq!(p.text, "HELLOWORLD");
        assert_eq!(p.dropped, 2);
    }

    #[test]
    fn lenient_keeps_symbols_of_a_custom_alphabet() {
        let a = Alphabet::new("abc123").unwrap();
        let p = prepare("a1 B9", &a);
        assert_eq!(p.text, "a1");
        assert_eq!(p.dropped, 2);
    }

    #[test]
    fn strict_only_removes_whitespace() {
        let p = strip_whitespace("AB c\nD\t");
        assert_eq!(p.text, "ABcD");
    }

    #[test]
    fn groups_of_five() {
        assert_eq!(group("BDZGOWCXLT", 5), "BDZGO WCXLT");
        assert_eq!(group("BDZGOWC", 5), "BDZGO WC");
        assert_eq!(group("BDZGO", 0), "BDZGO");
        assert_eq!(group("", 5), "");
    }
}
