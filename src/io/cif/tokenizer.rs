//! Line-oriented CIF 1.1 tokenizer used for per-category parsing.
//!
//! Handles whitespace-separated bare values, single- and double-quoted strings whose closing
//! quote must be followed by whitespace, semicolon-delimited multi-line text fields, `#`
//! comments, and the `?`/`.` placeholders.

use crate::io::error::Error;

/// A single data value as it appears in a CIF category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CifValue {
    /// Any bare, quoted, or text-field value.
    Text(String),
    /// Unquoted `?`: the value is unknown.
    Unknown,
    /// Unquoted `.`: the value is inapplicable.
    Inapplicable,
}

impl CifValue {
    /// Returns the text content, or `None` for the `?`/`.` placeholders.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CifValue::Text(s) => Some(s),
            CifValue::Unknown | CifValue::Inapplicable => None,
        }
    }

    /// Returns the value as written in the file, placeholders included.
    pub fn as_str(&self) -> &str {
        match self {
            CifValue::Text(s) => s,
            CifValue::Unknown => "?",
            CifValue::Inapplicable => ".",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Loop,
    DataName(String),
    Value(CifValue),
}

/// Token paired with the one-based line number it started on.
pub(crate) type Located = (Token, usize);

/// Tokenizes `lines`, numbering them from `first_line_number`.
///
/// # Errors
///
/// Returns [`Error::Parse`] for quoted strings without a valid closing quote and for text
/// fields that are still open at the end of the input.
pub(crate) fn tokenize(lines: &[String], first_line_number: usize) -> Result<Vec<Located>, Error> {
    let mut tokens = Vec::new();
    let mut text_field: Option<(String, usize)> = None;

    for (offset, line) in lines.iter().enumerate() {
        let line_number = first_line_number + offset;

        if let Some((mut content, start)) = text_field.take() {
            if let Some(rest) = line.strip_prefix(';') {
                tokens.push((Token::Value(CifValue::Text(content)), start));
                tokenize_line(rest, line_number, &mut tokens)?;
            } else {
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(line);
                text_field = Some((content, start));
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix(';') {
            text_field = Some((rest.trim_end().to_string(), line_number));
            continue;
        }

        tokenize_line(line, line_number, &mut tokens)?;
    }

    if let Some((_, start)) = text_field {
        return Err(Error::parse(
            "mmCIF",
            None,
            start,
            "Text field is not closed by a ';' line",
        ));
    }

    Ok(tokens)
}

fn tokenize_line(line: &str, line_number: usize, tokens: &mut Vec<Located>) -> Result<(), Error> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '#' {
            break;
        }

        if c == '\'' || c == '"' {
            let start = i + 1;
            let mut end = None;
            let mut j = start;
            while j < chars.len() {
                if chars[j] == c && chars.get(j + 1).is_none_or(|next| next.is_whitespace()) {
                    end = Some(j);
                    break;
                }
                j += 1;
            }
            let end = end.ok_or_else(|| {
                Error::parse(
                    "mmCIF",
                    None,
                    line_number,
                    format!("Unterminated {c}-quoted value"),
                )
            })?;
            let value: String = chars[start..end].iter().collect();
            tokens.push((Token::Value(CifValue::Text(value)), line_number));
            i = end + 1;
            continue;
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        let word: String = chars[start..i].iter().collect();
        tokens.push((classify_bare(word), line_number));
    }

    Ok(())
}

fn classify_bare(word: String) -> Token {
    if word.eq_ignore_ascii_case("loop_") {
        Token::Loop
    } else if word.starts_with('_') {
        Token::DataName(word)
    } else if word == "?" {
        Token::Value(CifValue::Unknown)
    } else if word == "." {
        Token::Value(CifValue::Inapplicable)
    } else {
        Token::Value(CifValue::Text(word))
    }
}
