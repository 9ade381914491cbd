//! `densemat det`: determinant of a square matrix literal.

use crate::error::Result;
use crate::literal::{self, Literal};
use crate::output;
use densemat::linalg::determinant;
use serde_json::json;

pub(crate) fn run(matrix: &str, json: bool) -> Result<()> {
    let lit = literal::parse(matrix)?;
    let det = match &lit {
        Literal::Int(m) => determinant(m)?,
        Literal::Float(m) => determinant(m)?,
    };

    if json {
        let (n, _) = lit.shape();
        return output::print_json(&json!({ "n": n, "determinant": det }));
    }
    println!("{det}");
    Ok(())
}
