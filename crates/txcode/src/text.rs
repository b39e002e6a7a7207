//! Hex to text decoding

/// Decode a hex string to text, two characters per output character
///
/// Each pair is read with JavaScript `parseInt(pair, 16)` rules and mapped
/// with `String.fromCharCode`. Pairs that parse to zero or to nothing are
/// skipped, which strips the null padding of fixed-size string fields. A
/// trailing unpaired character is ignored. Never fails.
pub fn hex2a(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    let mut text = String::with_capacity(chars.len() / 2);

    for pair in chars.chunks_exact(2) {
        match parse_int_hex(pair) {
            Some(code) if code != 0 => text.push(char_from_code(code)),
            _ => tracing::trace!("Skipping hex pair {:?}", pair.iter().collect::<String>()),
        }
    }

    text
}

/// `parseInt(s, 16)`: `None` where JavaScript yields NaN
fn parse_int_hex(s: &[char]) -> Option<i64> {
    let mut rest = s;
    while let [c, tail @ ..] = rest {
        if is_js_whitespace(*c) {
            rest = tail;
        } else {
            break;
        }
    }

    let negative = matches!(rest.first(), Some('-'));
    if let [sign, tail @ ..] = rest {
        if *sign == '-' || *sign == '+' {
            rest = tail;
        }
    }

    if let ['0', 'x' | 'X', tail @ ..] = rest {
        rest = tail;
    }

    let mut value: Option<i64> = None;
    for c in rest {
        match c.to_digit(16) {
            Some(d) => value = Some(value.unwrap_or(0) * 16 + i64::from(d)),
            None => break,
        }
    }

    value.map(|v| if negative { -v } else { v })
}

/// JavaScript `StrWhiteSpaceChar`: Unicode `White_Space` minus NEL, plus BOM
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// `String.fromCharCode`: the code is taken modulo 2^16
fn char_from_code(code: i64) -> char {
    let unit = code.rem_euclid(1 << 16) as u32;
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}
