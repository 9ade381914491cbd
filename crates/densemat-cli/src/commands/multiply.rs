//! `densemat multiply`: product of two literals.
//!
//! Two integer literals multiply in the integer domain with overflow
//! checking; if either side is floating point both are promoted.

use crate::error::Result;
use crate::literal::{self, Literal};
use crate::output;
use tracing::debug;

pub(crate) fn run(left: &str, right: &str, json: bool) -> Result<()> {
    let (a, b) = (literal::parse(left)?, literal::parse(right)?);
    debug!(left = ?a.shape(), right = ?b.shape(), "multiplying");

    match (a, b) {
        (Literal::Int(a), Literal::Int(b)) => {
            let product = a.matmul(&b)?;
            if json {
                return output::print_json(&output::matrix_json(&product));
            }
            output::matrix(&product);
        }
        (a, b) => {
            let product = a.to_float().matmul(&b.to_float())?;
            if json {
                return output::print_json(&output::matrix_json(&product));
            }
            output::matrix(&product);
        }
    }
    Ok(())
}
