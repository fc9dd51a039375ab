use knn_vote::{euclidean, Error, Example, Knn};
use proptest::prelude::*;

const LABELS: [&str; 4] = ["a", "b", "c", "d"];

fn examples(dim: usize) -> impl Strategy<Value = Vec<Example>> {
    prop::collection::vec(
        (
            0..LABELS.len(),
            prop::collection::vec(-10.0f64..10.0, dim),
        ),
        1..30,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(l, pos)| Example::new(LABELS[l], pos))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_euclidean_symmetric_and_reflexive(
        (a, b) in (1usize..8).prop_flat_map(|d| (
            prop::collection::vec(-100.0f64..100.0, d),
            prop::collection::vec(-100.0f64..100.0, d),
        ))
    ) {
        prop_assert_eq!(euclidean(&a, &b).unwrap(), euclidean(&b, &a).unwrap());
        prop_assert_eq!(euclidean(&a, &a).unwrap(), 0.0);
        prop_assert!(euclidean(&a, &b).unwrap() >= 0.0);
    }

    #[test]
    fn prop_euclidean_dimension_mismatch(
        a in prop::collection::vec(-1.0f64..1.0, 0..6),
        b in prop::collection::vec(-1.0f64..1.0, 0..6),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert_eq!(
            euclidean(&a, &b).unwrap_err(),
            Error::DimensionMismatch { expected: a.len(), found: b.len() }
        );
    }

    #[test]
    fn prop_train_fails_iff_too_small(data in examples(2), k in 1usize..40) {
        let mut knn = Knn::new(k);
        let n = data.len();
        let result = knn.train(data);
        if n < k {
            prop_assert_eq!(result.unwrap_err(), Error::InsufficientData { k, n_items: n });
            prop_assert!(!knn.is_trained());
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(knn.len(), n);
        }
    }

    #[test]
    fn prop_winners_have_max_count(
        data in examples(3),
        query in prop::collection::vec(-10.0f64..10.0, 3),
        k in 1usize..10,
    ) {
        prop_assume!(k <= data.len());
        let mut knn = Knn::new(k);
        knn.train(data).unwrap();

        let nearest = knn.neighbors(&query).unwrap();
        prop_assert_eq!(nearest.len(), k);
        prop_assert!(nearest.windows(2).all(|w| w[0].distance <= w[1].distance));

        let winners = knn.classify(&query).unwrap();
        prop_assert!(!winners.is_empty());
        prop_assert!(winners.windows(2).all(|w| w[0] < w[1]));

        let count = |label: &str| nearest.iter().filter(|n| n.label == label).count();
        let top = count(&winners[0]);
        for w in &winners {
            prop_assert_eq!(count(w), top);
        }
        for n in &nearest {
            if !winners.contains(&n.label) {
                prop_assert!(count(&n.label) < top);
            }
        }
    }

    #[test]
    fn prop_classify_idempotent(
        data in examples(2),
        query in prop::collection::vec(-10.0f64..10.0, 2),
    ) {
        let mut knn = Knn::new(1);
        knn.train(data).unwrap();
        prop_assert_eq!(knn.classify(&query).unwrap(), knn.classify(&query).unwrap());
    }

    #[test]
    fn prop_failed_train_keeps_previous(data in examples(2), query in prop::collection::vec(-10.0f64..10.0, 2)) {
        let k = data.len();
        let mut knn = Knn::new(k);
        knn.train(data).unwrap();
        let before = knn.classify(&query).unwrap();

        let short = vec![Example::new("z", vec![0.0, 0.0]); k - 1];
        prop_assert!(knn.train(short).is_err());
        prop_assert_eq!(knn.classify(&query).unwrap(), before);
    }
}
