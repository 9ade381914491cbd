//! Matrix literals on the command line: `"1,2;3,4"`.
//!
//! Rows are separated by `;`, values by `,`. Whitespace around values is
//! ignored. A literal whose values all parse as integers stays in the
//! integer domain; anything else is read as floating point.

use crate::error::{CliError, Result};
use densemat::primitives::Matrix;

/// A parsed literal in its natural domain.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    Int(Matrix<i64>),
    Float(Matrix<f64>),
}

impl Literal {
    pub(crate) fn shape(&self) -> (usize, usize) {
        match self {
            Literal::Int(m) => m.shape(),
            Literal::Float(m) => m.shape(),
        }
    }

    pub(crate) fn to_float(&self) -> Matrix<f64> {
        match self {
            Literal::Int(m) => m.to_float(),
            Literal::Float(m) => m.clone(),
        }
    }
}

fn split_rows(text: &str) -> Result<Vec<Vec<&str>>> {
    let text = text.trim().trim_end_matches(';');
    if text.is_empty() {
        return Err(CliError::InvalidLiteral("empty literal".to_string()));
    }
    let rows: Vec<Vec<&str>> = text
        .split(';')
        .map(|row| row.split(',').map(str::trim).collect())
        .collect();

    let cols = rows[0].len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(CliError::InvalidLiteral(format!(
                "row {} has {} values, expected {cols}",
                i + 1,
                row.len()
            )));
        }
        if let Some(j) = row.iter().position(|v| v.is_empty()) {
            return Err(CliError::InvalidLiteral(format!(
                "empty value at row {}, column {}",
                i + 1,
                j + 1
            )));
        }
    }
    Ok(rows)
}

fn build<T: densemat::primitives::Element>(
    rows: usize,
    cols: usize,
    data: Vec<T>,
) -> Result<Matrix<T>> {
    Matrix::from_vec(rows, cols, data).map_err(|e| CliError::InvalidLiteral(e.to_string()))
}

/// Parses a literal, keeping integers in the integer domain.
pub(crate) fn parse(text: &str) -> Result<Literal> {
    let rows = split_rows(text)?;
    let (n_rows, n_cols) = (rows.len(), rows[0].len());
    let cells = || rows.iter().flatten().copied();

    if let Ok(ints) = cells().map(str::parse::<i64>).collect::<std::result::Result<Vec<_>, _>>() {
        return Ok(Literal::Int(build(n_rows, n_cols, ints)?));
    }

    let floats = cells()
        .map(|v| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| CliError::InvalidLiteral(format!("not a number: {v:?}")))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Literal::Float(build(n_rows, n_cols, floats)?))
}
