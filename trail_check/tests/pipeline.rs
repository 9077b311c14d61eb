use trail_check::{analyze, DesignError, DesignTables, Element, ErrorFlags, MeanVp, RowFilter};

fn alignment() -> Vec<Element> {
    vec![
        Element::straight(1, 40.0),
        Element::clothoid(2, 150.0),
        Element::arc(3, 60.0, -300.0),
        Element::clothoid(4, 100.0),
        Element::straight(5, 25.0),
        Element::clothoid(6, 200.0),
        Element::arc(7, 40.0, -250.0),
    ]
}

#[test]
fn stages_produce_speeds_bounds_and_flags() {
    let analysis = analyze(alignment(), DesignTables::builtin()).unwrap();
    let e = &analysis.elements;

    let vps: Vec<u32> = e.iter().map(|e| e.vp).collect();
    // straight 1: bucket 90, 40 <= 70 -> 90; straight 5: max(90, 85) -> 90
    assert_eq!(vps, vec![90, 90, 90, 90, 90, 85, 85]);

    assert!((e[2].a_min - 122.474487).abs() < 1e-6);
    assert!((e[2].a_max - 173.205081).abs() < 1e-6);
    assert!((e[2].min_length - 25.0).abs() < 1e-9);

    assert!(e[1].errors.is_empty());
    assert_eq!(e[3].errors, ErrorFlags::BELOW_MIN_LENGTH);
    assert!(e[5].errors.contains(ErrorFlags::ABOVE_MAX_LENGTH));

    // straight 5 sits between two left hand curves
    assert!((e[4].min_length - 90.0 / 3.6 * 5.0).abs() < 1e-9);
    assert!(e[4].errors.contains(ErrorFlags::BELOW_MIN_LENGTH));

    assert!(e.iter().all(|e| !e.errors.contains(ErrorFlags::VP_DIFFERENCE)));
}

#[test]
fn mean_vp_covers_every_element() {
    let analysis = analyze(alignment(), DesignTables::builtin()).unwrap();
    let total: f64 = alignment().iter().map(|e| e.length).sum();
    let weighted = 90.0 * (40.0 + 150.0 + 60.0 + 100.0 + 25.0) + 85.0 * (200.0 + 40.0);
    match analysis.mean_vp {
        MeanVp::Defined(v) => assert!((v - weighted / total).abs() < 1e-9),
        MeanVp::Undefined => panic!("mean vp should be defined"),
    }
}

#[test]
fn rerun_on_original_input_is_identical() {
    let first = analyze(alignment(), DesignTables::builtin()).unwrap();
    let second = analyze(alignment(), DesignTables::builtin()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn speed_jump_flags_both_elements() {
    let elements = vec![
        Element::arc(1, 30.0, 25.0),
        Element::straight(2, 999.0),
        Element::arc(3, 30.0, 25.0),
    ];
    let analysis = analyze(elements, DesignTables::builtin()).unwrap();
    assert_eq!(analysis.elements[1].vp, 100);
    for e in &analysis.elements {
        assert!(e.errors.contains(ErrorFlags::VP_DIFFERENCE), "element {}", e.id);
    }
    let report = analysis.report(RowFilter::Flagged);
    assert_eq!(report.rows.len(), 3);
}

#[test]
fn alignment_without_radius_fails() {
    let elements = vec![Element::clothoid(1, 30.0), Element::straight(2, 30.0)];
    let err = analyze(elements, DesignTables::builtin()).unwrap_err();
    assert!(matches!(err, DesignError::NoRadius { id: 2 }));
}

#[test]
fn zero_length_alignment_has_undefined_mean() {
    let elements = vec![Element::arc(1, 0.0, 100.0)];
    let analysis = analyze(elements, DesignTables::builtin()).unwrap();
    assert_eq!(analysis.mean_vp, MeanVp::Undefined);
    assert_eq!(analysis.report(RowFilter::All).mean_line(), "mean vp: undefined");
}

#[test]
fn custom_tables_change_the_cap() {
    let mut tables = DesignTables::default();
    tables.max_vp = 90;
    tables.validate().unwrap();
    let analysis = analyze(vec![Element::arc(1, 100.0, 1000.0)], &tables).unwrap();
    assert_eq!(analysis.elements[0].vp, 90);
}

#[test]
fn speed_ceiling_stays_at_100_with_lower_radius_cap() {
    let mut tables = DesignTables::default();
    tables.max_vp = 90;
    tables.validate().unwrap();
    let elements = vec![Element::arc(1, 100.0, 200.0), Element::straight(2, 999.0)];
    let analysis = analyze(elements, &tables).unwrap();
    assert_eq!(analysis.elements[0].vp, 80);
    assert_eq!(analysis.elements[1].vp, 100);
    for e in &analysis.elements {
        assert!(e.errors.contains(ErrorFlags::VP_DIFFERENCE), "element {}", e.id);
    }
}
