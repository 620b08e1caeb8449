use std::f64::consts::FRAC_PI_2;
use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::states::{Body, Chain, NPoint2, NVec2};
use crate::simulation::integrator::gravity_step;
use crate::simulation::pendulum::chain_step;

const G: f64 = 100000.0;
const DT: f64 = 0.05;

/// Helper to build `n` bodies on a deterministic spiral, no rand needed
fn make_bodies(n: usize) -> SimResult<Vec<Body>> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let r = 50.0 + 10.0 * i_f;
            let x = NPoint2::new(r * (i_f * 0.37).cos(), r * (i_f * 0.37).sin());
            Body::new(x, NVec2::zeros(), 1.0, 1.0)
        })
        .collect()
}

/// Helper to build a hanging chain of `n` equal links
fn make_chain(n: usize) -> SimResult<Chain> {
    let specs: Vec<(f64, f64, f64)> = (0..n)
        .map(|i| (10.0, 1.0, FRAC_PI_2 + 0.1 * (i as f64).sin()))
        .collect();
    Chain::from_specs(NPoint2::origin(), &specs)
}

/// Time the gravity stepper for a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_gravity() -> SimResult<()> {
    println!("N,step_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 2 };
        let mut bodies = make_bodies(n)?;

        // Warm-up
        gravity_step(&mut bodies, DT, G)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            gravity_step(&mut bodies, DT, G)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

/// Time the chain stepper for a range of chain lengths
pub fn bench_chain() -> SimResult<()> {
    println!("N,step_ms");

    for n in [3, 10, 30, 100, 300, 1000] {
        let steps = 50;
        let mut chain = make_chain(n)?;

        // Warm-up
        chain_step(&mut chain.links, DT, 9.81);

        let t0 = Instant::now();
        for _ in 0..steps {
            chain_step(&mut chain.links, DT, 9.81);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
