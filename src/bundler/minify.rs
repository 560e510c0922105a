//! Source transforms applied during bundling
//!
//! A deliberately small size-minimizing pass: comment removal plus
//! whitespace reduction. Not a real minifier; it never renames or
//! restructures code. String literals are respected so `//` inside a
//! quoted value survives. License comments are the `/*! ... */` block
//! form and full `//!` line comments.

/// Strip comments from a script source
///
/// Line comments run to end of line (the newline is kept); block comments
/// are dropped entirely. With `keep_license` set, `/*!` blocks and `//!`
/// line comments survive.
pub fn strip_comments(source: &str, keep_license: bool) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;
    let mut string_delim: Option<char> = None;

    while i < chars.len() {
        let c = chars[i];

        if let Some(delim) = string_delim {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == delim {
                string_delim = None;
            }
            i += 1;
            continue;
        }

        match c {
            '"' | '\'' | '`' => {
                string_delim = Some(c);
                out.push(c);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                let is_license = chars.get(i + 2) == Some(&'!');
                let start = i;
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                if is_license && keep_license {
                    out.extend(&chars[start..i]);
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let is_license = chars.get(i + 2) == Some(&'!');
                let start = i;
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
                if is_license && keep_license {
                    out.extend(&chars[start..i]);
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Strip only license comments, leaving everything else intact
///
/// Covers `/*! ... */` blocks and `//!` line comments; a `//!` comment
/// that occupies its whole line is removed together with the line.
pub fn strip_license_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;
    let mut string_delim: Option<char> = None;

    while i < chars.len() {
        let c = chars[i];

        if let Some(delim) = string_delim {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == delim {
                string_delim = None;
            }
            i += 1;
            continue;
        }

        if matches!(c, '"' | '\'' | '`') {
            string_delim = Some(c);
            out.push(c);
            i += 1;
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'*') && chars.get(i + 2) == Some(&'!') {
            i += 3;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'/') && chars.get(i + 2) == Some(&'!') {
            let line_start = out.rfind('\n').map_or(0, |pos| pos + 1);
            let whole_line = out[line_start..].trim().is_empty();
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            if whole_line {
                out.truncate(line_start);
                if i < chars.len() {
                    i += 1;
                }
            }
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Size-minimizing transform: drop comments, trim lines, drop blank lines
pub fn minify(source: &str, keep_license: bool) -> String {
    let stripped = strip_comments(source, keep_license);
    let mut out: String = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Wrap a bundle body in an IIFE, optionally with a strict-mode directive
pub fn wrap(body: &str, use_strict: bool) -> String {
    let directive = if use_strict { "'use strict';\n" } else { "" };
    format!("(function () {{\n{directive}{body}}}());\n")
}
