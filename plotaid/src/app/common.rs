/// Number of scatter datasets the demo pages through.
pub const NUM_PAGES: usize = 3;

/// Deterministic scatter points in the unit square, different for every page.
pub fn scatter(page: usize, num_points: usize) -> Vec<[f64; 2]> {
    // Additive recurrence based on the plastic number, which spreads points
    // evenly without a random number generator.
    let plastic = 1.324_717_957_244_746_f64;
    let (a1, a2) = (1.0 / plastic, 1.0 / (plastic * plastic));
    let offset = page as f64 * 0.37;
    (0..num_points)
        .map(|i| {
            let i = i as f64;
            [
                (offset + i * a1).fract(),
                (offset * 2.0 + i * a2).fract(),
            ]
        })
        .collect()
}

/// A damped sine sampled on an ascending x grid.
pub fn curve(num_points: usize) -> Vec<[f64; 2]> {
    let step = 1.0 / (num_points.max(2) - 1) as f64;
    (0..num_points)
        .map(|i| {
            let x = i as f64 * step;
            [x, 0.5 + 0.4 * (-2.0 * x).exp() * (4.0 * std::f64::consts::TAU * x).sin()]
        })
        .collect()
}
