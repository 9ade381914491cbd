//! `densemat transpose`.

use crate::error::Result;
use crate::literal::{self, Literal};
use crate::output;

pub(crate) fn run(matrix: &str, json: bool) -> Result<()> {
    match literal::parse(matrix)? {
        Literal::Int(m) if json => output::print_json(&output::matrix_json(&m.transpose())),
        Literal::Int(m) => {
            output::matrix(&m.transpose());
            Ok(())
        }
        Literal::Float(m) if json => output::print_json(&output::matrix_json(&m.transpose())),
        Literal::Float(m) => {
            output::matrix(&m.transpose());
            Ok(())
        }
    }
}
