//! Classify a few points against a small 2D training set.
//!
//! Run with `RUST_LOG=knn_vote=trace` to see the classifier's log output.

use knn_vote::{Cosine, Example, Knn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Two well-separated groups plus one shared point.
    let training = vec![
        // Group "red" (near origin)
        Example::new("red", vec![0.0, 0.0]),
        Example::new("red", vec![0.2, 0.1]),
        Example::new("red", vec![-0.1, 0.3]),
        // Group "blue" (near (5, 5))
        Example::new("blue", vec![5.0, 5.0]),
        Example::new("blue", vec![5.1, 4.8]),
        Example::new("blue", vec![4.7, 5.2]),
        // Contested
        Example::new("green", vec![2.5, 2.5]),
    ];

    let queries = [vec![0.1, 0.1], vec![4.9, 5.0], vec![2.5, 2.4], vec![1.0, 3.0]];

    // --- Euclidean (k=3) ---
    let mut knn = Knn::new(3);
    if let Err(e) = knn.train(training.clone()) {
        eprintln!("training failed: {e}");
        return;
    }
    println!("=== Euclidean (k=3) ===");
    for q in &queries {
        match knn.classify(q) {
            Ok(labels) => println!("  ({:5.1}, {:5.1}) => {}", q[0], q[1], labels.join(", ")),
            Err(e) => println!("  ({:5.1}, {:5.1}) => error: {e}", q[0], q[1]),
        }
    }

    // --- Cosine (k=1) ---
    let mut cosine = Knn::with_distance(1, Cosine);
    if let Err(e) = cosine.train(training) {
        eprintln!("training failed: {e}");
        return;
    }
    println!("\n=== Cosine (k=1) ===");
    for q in &queries {
        match cosine.neighbors(q) {
            Ok(nearest) => {
                let n = &nearest[0];
                println!("  ({:5.1}, {:5.1}) => {} (distance {:.4})", q[0], q[1], n.label, n.distance);
            }
            Err(e) => println!("  ({:5.1}, {:5.1}) => error: {e}", q[0], q[1]),
        }
    }

    // --- Malformed query ---
    println!("\n=== 3D query against 2D training set ===");
    match knn.classify(&[1.0, 2.0, 3.0]) {
        Ok(labels) => println!("  unexpected: {}", labels.join(", ")),
        Err(e) => println!("  error: {e}"),
    }
}
