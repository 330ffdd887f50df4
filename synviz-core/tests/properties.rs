use proptest::prelude::*;
use synviz_core::*;

fn arb_features(max: usize) -> impl Strategy<Value = Vec<QtlRecord>> {
    prop::collection::vec((0u64..10_000, 0u64..500), 1..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (start, span))| QtlRecord {
                id: format!("q{}", i),
                symbol: format!("Q{}", i),
                chr: "1".to_string(),
                start,
                end: start + span,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_comparison_scale_roundtrips(
        ref_start in 0u64..1_000_000,
        ref_span in 1u64..1_000_000,
        comp_start in 0u64..1_000_000,
        comp_span in 1u64..1_000_000,
        matches in any::<bool>(),
        t in 0.0f64..=1.0,
    ) {
        let mut block = SyntenyBlock::new(
            "b".to_string(),
            "1".to_string(),
            ref_start,
            ref_start + ref_span,
            "2".to_string(),
            comp_start,
            comp_start + comp_span,
            matches,
        );
        let scale = LinearScale::new(
            (ref_start as f64, (ref_start + ref_span) as f64),
            (0.0, 1000.0),
        );
        block.set_reference_scale(&scale);

        let x = comp_start as f64 + comp_span as f64 * t;
        for comp_scale in [block.comp_true_scale(), block.comp_match_scale()] {
            let roundtrip = comp_scale.invert(comp_scale.apply(x));
            prop_assert!((roundtrip - x).abs() < 1e-6 * comp_span as f64 + 1e-6);
        }
    }

    #[test]
    fn prop_packing_is_idempotent(features in arb_features(24)) {
        let first = pack_lanes(&features, 100.0);
        let second = pack_lanes(&features, 100.0);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_overlapping_features_never_share_a_lane(features in arb_features(24)) {
        let packed = pack_lanes(&features, 100.0);
        for i in 0..features.len() {
            for j in (i + 1)..features.len() {
                // Open overlap: a feature ending exactly where another
                // starts frees its lane first, so those two may share.
                let overlap = features[i].start < features[j].end
                    && features[j].start < features[i].end;
                if overlap {
                    prop_assert_ne!(
                        packed[i].lane, packed[j].lane,
                        "features {} and {} overlap", i, j
                    );
                }
            }
        }
    }

    #[test]
    fn prop_viewport_width_is_exact(
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0,
    ) {
        let blocks = vec![SyntenyBlock::new(
            "b".to_string(),
            "1".to_string(),
            2_000,
            3_000,
            "2".to_string(),
            7_000,
            8_000,
            true,
        )];
        let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1000.0));
        let mut viewport = BrowserInterval::new(
            "1".to_string(),
            10_000,
            &blocks,
            &scale,
            Orientation::True,
        ).unwrap();
        viewport.move_to(a, b, &scale, &blocks).unwrap();
        prop_assert_eq!(viewport.width, viewport.ref_end - viewport.ref_start);
        prop_assert!(!viewport.comp_start_chr.is_empty());
        prop_assert!(!viewport.comp_end_chr.is_empty());
    }
}
