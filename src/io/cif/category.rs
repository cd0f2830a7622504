use super::tokenizer::{CifValue, Located, Token};
use crate::io::error::Error;

/// Column-oriented view of one CIF category within a data block.
///
/// Looped categories yield one row per loop packet; key/value categories yield a single row.
/// All columns have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    columns: Vec<String>,
    values: Vec<Vec<CifValue>>,
    rows: usize,
    looped: bool,
}

impl Category {
    /// Category name without the leading underscore, e.g. `chem_comp_bond`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Returns all values of a column (matched case-insensitively).
    pub fn column(&self, name: &str) -> Option<&[CifValue]> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .map(|idx| self.values[idx].as_slice())
    }

    pub fn value(&self, column: &str, row: usize) -> Option<&CifValue> {
        self.column(column).and_then(|values| values.get(row))
    }

    /// Returns the text of a cell, or `None` when the cell is a `?`/`.` placeholder.
    pub fn text(&self, column: &str, row: usize) -> Option<&str> {
        self.value(column, row).and_then(CifValue::as_text)
    }

    /// Builds a category from the tokens of its section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the token stream does not form a well-shaped loop or
    /// list of key/value pairs, including a loop whose value count is not a multiple of its
    /// column count.
    pub(crate) fn from_tokens(name: &str, tokens: Vec<Located>) -> Result<Self, Error> {
        match tokens.first() {
            Some((Token::Loop, _)) => Self::from_loop(name, tokens),
            _ => Self::from_pairs(name, tokens),
        }
    }

    fn from_loop(name: &str, tokens: Vec<Located>) -> Result<Self, Error> {
        let mut iter = tokens.into_iter().skip(1).peekable();
        let mut columns = Vec::new();
        let mut loop_line = 0;

        while matches!(iter.peek(), Some((Token::DataName(_), _))) {
            if let Some((Token::DataName(data_name), line)) = iter.next() {
                loop_line = line;
                columns.push(column_name(name, &data_name, line)?);
            }
        }

        if columns.is_empty() {
            return Err(Error::parse(
                "mmCIF",
                None,
                loop_line,
                format!("Loop for category '{name}' declares no columns"),
            ));
        }

        let mut cells = Vec::new();
        for (token, line) in iter {
            match token {
                Token::Value(value) => cells.push(value),
                Token::Loop | Token::DataName(_) => {
                    return Err(Error::parse(
                        "mmCIF",
                        None,
                        line,
                        format!("Unexpected token inside loop of category '{name}'"),
                    ));
                }
            }
        }

        if cells.len() % columns.len() != 0 {
            return Err(Error::parse(
                "mmCIF",
                None,
                loop_line,
                format!(
                    "Loop of category '{name}' has {} values for {} columns",
                    cells.len(),
                    columns.len()
                ),
            ));
        }

        let rows = cells.len() / columns.len();
        let mut values: Vec<Vec<CifValue>> =
            (0..columns.len()).map(|_| Vec::with_capacity(rows)).collect();
        for (i, cell) in cells.into_iter().enumerate() {
            values[i % columns.len()].push(cell);
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            values,
            rows,
            looped: true,
        })
    }

    fn from_pairs(name: &str, tokens: Vec<Located>) -> Result<Self, Error> {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        let mut iter = tokens.into_iter();

        while let Some((token, line)) = iter.next() {
            let data_name = match token {
                Token::DataName(data_name) => data_name,
                Token::Value(_) | Token::Loop => {
                    return Err(Error::parse(
                        "mmCIF",
                        None,
                        line,
                        format!("Value without data name in category '{name}'"),
                    ));
                }
            };
            let column = column_name(name, &data_name, line)?;
            match iter.next() {
                Some((Token::Value(value), _)) => {
                    columns.push(column);
                    values.push(vec![value]);
                }
                _ => {
                    return Err(Error::parse(
                        "mmCIF",
                        None,
                        line,
                        format!("Data name '{data_name}' has no value"),
                    ));
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            rows: usize::from(!columns.is_empty()),
            columns,
            values,
            looped: false,
        })
    }
}

/// Splits `_category.column` into its category and column parts.
pub(crate) fn split_data_name(data_name: &str) -> (&str, &str) {
    let trimmed = data_name.trim_start_matches('_');
    trimmed.split_once('.').unwrap_or((trimmed, ""))
}

fn column_name(expected: &str, data_name: &str, line: usize) -> Result<String, Error> {
    let (category, column) = split_data_name(data_name);
    if !category.eq_ignore_ascii_case(expected) {
        return Err(Error::parse(
            "mmCIF",
            None,
            line,
            format!("Data name '{data_name}' does not belong to category '{expected}'"),
        ));
    }
    Ok(column.to_string())
}
