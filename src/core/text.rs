// src/core/text.rs

/// Collapse whitespace runs to single spaces; trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// First non-empty line, trimmed. Empty when there is none.
pub fn first_line(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Canonical form for name equality checks: whitespace collapsed, only
/// ASCII letters and spaces kept, uppercased, trimmed.
/// "T.J. Hockenson Jr." and "TJ Hockenson Jr" both become "TJ HOCKENSON JR".
pub fn normalize_name(s: &str) -> String {
    let collapsed = normalize_ws(s);
    let letters: String = collapsed
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    letters.to_ascii_uppercase().trim().to_string()
}
