//! XPM files are C source: the image lives in the string literals of a `char *` array.

use regex::Regex;

lazy_static::lazy_static! {
    /// A string literal (with `\"` and `\\` escapes) or the start of a block comment.
    static ref TOKEN_REGEX: Regex = Regex::new(r#""((?:[^"\\]|\\.)*)"|/\*"#).unwrap();
}

/// Heuristic used to decide whether `text` is C wrapped or a bare list of XPM lines.
pub(crate) fn is_c_source(text: &str) -> bool {
    let start = text.trim_start();
    if start.starts_with("/*") || start.starts_with("static") {
        return true;
    }
    text.lines().any(|line| line.trim_start().starts_with('"'))
}

/// Collects the contents of every string literal, line by line.
/// Text outside of literals (declarations, braces) and `/* */` comments are skipped.
pub(crate) fn extract_strings(text: &str) -> Vec<String> {
    let mut strings = Vec::new();
    let mut in_comment = false;
    for line in text.lines() {
        let mut pos = 0;
        while pos < line.len() {
            if in_comment {
                match line[pos..].find("*/") {
                    Some(end) => {
                        pos += end + 2;
                        in_comment = false;
                    }
                    None => break,
                }
                continue;
            }
            let Some(cap) = TOKEN_REGEX.captures_at(line, pos) else {
                break;
            };
            let Some(token) = cap.get(0) else {
                break;
            };
            pos = token.end();
            match cap.get(1) {
                Some(literal) => strings.push(unescape(literal.as_str())),
                None => in_comment = true,
            }
        }
    }
    log::trace!("extracted {} string literals from C source", strings.len());
    strings
}

fn unescape(literal: &str) -> String {
    let mut result = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => result.push(escaped),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

fn escape(line: &str) -> String {
    line.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Wraps the lines into a `static char *` array declaration.
pub(crate) fn wrap_lines(name: &str, lines: &[String]) -> String {
    let mut result = String::new();
    result.push_str("/* XPM */\n");
    result.push_str(&format!("static char * {}[] = {{\n", sanitize_identifier(name)));
    for (i, line) in lines.iter().enumerate() {
        result.push('"');
        result.push_str(&escape(line));
        result.push('"');
        if i + 1 < lines.len() {
            result.push(',');
        }
        result.push('\n');
    }
    result.push_str("};\n");
    result
}

fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
