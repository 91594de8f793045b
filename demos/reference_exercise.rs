//! Worked exercise: mean of a sample of 19 with s² = 81 and x̄ = 330.
//!
//! Run with `cargo run --example reference_exercise`; set `RUST_LOG=trace`
//! to see the quantile solver.

use tracing_subscriber::EnvFilter;
use u_inference::{interval, sample_size, NumflowQuantiles};

fn main() -> u_inference::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let q = NumflowQuantiles::default();
    let sd = 81.0_f64.sqrt();

    // a) upper bound of the 95% interval
    let ci = interval::mean_unknown(&q, 330.0, 19, sd, 0.95)?;
    println!("{:.1}", ci.upper);

    // b) amplitude of the 90% interval
    let ci = interval::mean_unknown(&q, 330.0, 19, sd, 0.90)?;
    println!("{:.1}", ci.width());

    // c) sample size for a margin of error of 3.5 at 90%
    let n = sample_size::mean_unknown(&q, sd, 0.90, 19, 3.5)?;
    println!("{:.0}", n.round());

    Ok(())
}
