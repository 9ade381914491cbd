//! `densemat train-xor`: train the single-layer network on XOR.

use crate::error::Result;
use crate::output;
use densemat::nn::{xor_dataset, SingleLayerNetwork, TrainerConfig};
use serde_json::json;

pub(crate) fn run(epochs: usize, learning_rate: f64, seed: Option<u64>, json: bool) -> Result<()> {
    let mut config = TrainerConfig::default()
        .with_epochs(epochs)
        .with_learning_rate(learning_rate);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let (inputs, targets) = xor_dataset();
    let mut net = SingleLayerNetwork::from_config(2, 2, &config)?;
    let report = net.fit(&inputs, &targets, &config)?;

    let mut predictions = Vec::with_capacity(inputs.len());
    for (x, y) in inputs.iter().zip(&targets) {
        let out = net.forward(x)?;
        predictions.push((x.row(0).to_vec(), out.row(0).to_vec(), y.row(0).to_vec()));
    }

    if json {
        let rows: Vec<_> = predictions
            .iter()
            .map(|(x, out, y)| json!({ "input": x, "output": out, "target": y }))
            .collect();
        return output::print_json(&json!({
            "config": &config,
            "initial_error": report.initial_error,
            "final_error": report.final_error,
            "predictions": rows,
        }));
    }

    output::section("Training");
    output::kv("Epochs", report.epochs);
    output::kv("Learning rate", config.learning_rate);
    output::kv(
        "Error",
        format!("{:.4} -> {:.4}", report.initial_error, report.final_error),
    );

    output::section("Predictions (output 0 = XOR, output 1 = AND)");
    for (x, out, y) in &predictions {
        println!(
            "  [{}, {}] -> [{:.3}, {:.3}]  expected [{}, {}]",
            x[0], x[1], out[0], out[1], y[0], y[1]
        );
    }
    if report.improved() {
        output::success("training reduced the dataset error");
    } else {
        output::warning("training did not reduce the dataset error");
    }
    Ok(())
}
