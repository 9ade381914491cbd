//! `densemat invert`: inverse of a square literal, optionally verified.

use crate::error::Result;
use crate::literal;
use crate::output;
use densemat::linalg::{invert, verify_inverse, IDENTITY_TOLERANCE};
use serde_json::json;

pub(crate) fn run(matrix: &str, verify: bool, json: bool) -> Result<()> {
    let a = literal::parse(matrix)?.to_float();
    let inv = invert(&a)?;
    let verified = if verify {
        Some(verify_inverse(&a, &inv, IDENTITY_TOLERANCE)?)
    } else {
        None
    };

    if json {
        let mut value = json!({ "inverse": output::matrix_json(&inv) });
        if let Some(ok) = verified {
            value["verified"] = json!(ok);
        }
        return output::print_json(&value);
    }

    output::matrix(&inv);
    match verified {
        Some(true) => output::success(&format!("A * A^-1 = I within {IDENTITY_TOLERANCE:e}")),
        Some(false) => output::fail(&format!(
            "A * A^-1 deviates from I by more than {IDENTITY_TOLERANCE:e}"
        )),
        None => {}
    }
    Ok(())
}
