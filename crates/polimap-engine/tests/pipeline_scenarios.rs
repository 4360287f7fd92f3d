//! End-to-end scenarios for the analysis pipeline on synthetic artifacts.

use polimap_common::entities::{
    Centroid, ModelArtifacts, ProjectionParams, ReferenceEntry, ResponseVector, ScalerParams,
};
use polimap_common::{PolimapError, QuestionSet, RangePolicy, ResponseConfig};
use polimap_engine::{InterpretationMap, Orientation, PoliticalModel};

fn reference(name: &str, coordinates: &[f64], cluster: Option<u32>) -> ReferenceEntry {
    ReferenceEntry { name: name.to_string(), coordinates: coordinates.to_vec(), cluster }
}

/// Two questions, identity scaler and projection, two clusters.
fn two_point_model(range: ResponseConfig) -> PoliticalModel {
    let artifacts = ModelArtifacts {
        scaler: ScalerParams { mean: vec![0.0, 0.0], scale: vec![1.0, 1.0], features: None },
        projection: ProjectionParams {
            components: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            mean: None,
            axes: None,
        },
        centroids: vec![
            Centroid { id: 0, point: vec![0.0, 0.0] },
            Centroid { id: 1, point: vec![10.0, 10.0] },
        ],
        reference: vec![
            reference("A", &[0.0, 0.0], None),
            reference("B", &[10.0, 10.0], None),
        ],
    };
    PoliticalModel::new(
        QuestionSet::from_ids(&["Q1", "Q2"]).unwrap(),
        artifacts,
        InterpretationMap::default(),
        range,
    )
    .unwrap()
}

fn wide_range() -> ResponseConfig {
    ResponseConfig { min: -10, max: 10, policy: RangePolicy::Reject }
}

#[test]
fn test_origin_answers_land_on_first_cluster() {
    let model = two_point_model(wide_range());
    let responses = ResponseVector::new().with("Q1", 0).with("Q2", 0);

    let analysis = model.analyze(&responses).unwrap();
    assert_eq!(analysis.coordinates, vec![0.0, 0.0]);
    assert_eq!(analysis.cluster, 0);
    assert_eq!(analysis.nearest.name, "A");
    assert!(analysis.nearest.distance.abs() < 1e-12);
    assert_eq!(analysis.interpretation, Orientation::EconomicLeft.description());
}

#[test]
fn test_far_answers_land_on_second_cluster() {
    let model = two_point_model(wide_range());
    let responses = ResponseVector::new().with("Q1", 10).with("Q2", 10);

    let analysis = model.analyze(&responses).unwrap();
    assert_eq!(analysis.coordinates, vec![10.0, 10.0]);
    assert_eq!(analysis.cluster, 1);
    assert_eq!(analysis.nearest.name, "B");
    assert!(analysis.nearest.distance.abs() < 1e-12);
    assert_eq!(analysis.interpretation, Orientation::Centre.description());
}

#[test]
fn test_default_range_clamps_before_projection() {
    let model = two_point_model(ResponseConfig::default());
    let responses = ResponseVector::new().with("Q1", 10).with("Q2", 10);

    let analysis = model.analyze(&responses).unwrap();
    assert_eq!(analysis.coordinates, vec![2.0, 2.0]);
    assert_eq!(analysis.cluster, 0);
    assert_eq!(analysis.nearest.name, "A");
}

#[test]
fn test_reject_policy_fails_request() {
    let model = two_point_model(ResponseConfig { policy: RangePolicy::Reject, ..Default::default() });
    let responses = ResponseVector::new().with("Q1", 3).with("Q2", 0);

    let err = model.analyze(&responses).unwrap_err();
    assert!(matches!(err, PolimapError::OutOfRange { ref question, .. } if question == "Q1"));
    assert!(err.is_caller_error());
}

#[test]
fn test_missing_answer_is_dimension_mismatch() {
    let model = two_point_model(wide_range());
    let responses = ResponseVector::new().with("Q1", 0);

    let err = model.analyze(&responses).unwrap_err();
    assert!(matches!(err, PolimapError::DimensionMismatch { .. }));
    assert!(err.is_caller_error());
}

#[test]
fn test_all_zero_answers_are_deterministic() {
    let model = two_point_model(wide_range());
    let responses = ResponseVector::new().with("Q1", 0).with("Q2", 0);

    let first = model.analyze(&responses).unwrap();
    for _ in 0..20 {
        assert_eq!(model.analyze(&responses).unwrap(), first);
    }
}

#[test]
fn test_midpoint_tie_resolves_to_lower_id_and_index() {
    let model = two_point_model(wide_range());
    let responses = ResponseVector::new().with("Q1", 5).with("Q2", 5);

    let analysis = model.analyze(&responses).unwrap();
    assert_eq!(analysis.cluster, 0);
    assert_eq!(analysis.nearest.name, "A");
    assert_eq!(analysis.nearest.index, 0);
}

#[test]
fn test_nineteen_question_model_with_centering() {
    let questions = QuestionSet::cevipof();
    let n = questions.len();

    // First axis sums the first nine answers, second axis the rest.
    let components = vec![
        (0..n).map(|i| if i < 9 { 1.0 } else { 0.0 }).collect(),
        (0..n).map(|i| if i < 9 { 0.0 } else { 1.0 }).collect(),
    ];
    let artifacts = ModelArtifacts {
        scaler: ScalerParams {
            mean: vec![0.5; n],
            scale: vec![0.5; n],
            features: Some(questions.ids().map(str::to_string).collect()),
        },
        projection: ProjectionParams { components, mean: Some(vec![-1.0; n]), axes: None },
        centroids: vec![
            Centroid { id: 0, point: vec![-10.0, 0.0] },
            Centroid { id: 1, point: vec![0.0, 0.0] },
            Centroid { id: 2, point: vec![10.0, 0.0] },
        ],
        reference: vec![
            reference("Candidate L", &[-12.0, 1.0], Some(0)),
            reference("Candidate C", &[1.0, -1.0], Some(1)),
            reference("Candidate R", &[12.0, 0.5], Some(2)),
        ],
    };
    let model = PoliticalModel::new(
        questions.clone(),
        artifacts,
        InterpretationMap::default(),
        ResponseConfig::default(),
    )
    .unwrap();

    // Answering 0 everywhere: z = (0 - 0.5) / 0.5 = -1, centered by +1 → 0.
    let neutral: ResponseVector = questions.ids().map(|id| (id.to_string(), 0)).collect();
    let analysis = model.analyze(&neutral).unwrap();
    assert_eq!(analysis.coordinates.len(), 2);
    assert!(analysis.coordinates.iter().all(|c| c.abs() < 1e-9));
    assert_eq!(analysis.cluster, 1);
    assert_eq!(analysis.nearest.name, "Candidate C");
    assert!((analysis.nearest.distance - 2f64.sqrt()).abs() < 1e-9);

    // Strong agreement on the first block pushes right along PC1.
    let agree: ResponseVector = questions
        .ids()
        .enumerate()
        .map(|(i, id)| (id.to_string(), if i < 9 { 2 } else { 0 }))
        .collect();
    let analysis = model.analyze(&agree).unwrap();
    assert!((analysis.coordinates[0] - 36.0).abs() < 1e-9);
    assert_eq!(analysis.cluster, 2);
    assert_eq!(analysis.nearest.name, "Candidate R");
    assert_eq!(analysis.interpretation, Orientation::Right.description());
}

#[test]
fn test_model_shared_across_threads() {
    let model = std::sync::Arc::new(two_point_model(wide_range()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let model = model.clone();
            std::thread::spawn(move || {
                let v = if i % 2 == 0 { 0 } else { 10 };
                let responses = ResponseVector::new().with("Q1", v).with("Q2", v);
                model.analyze(&responses).unwrap().cluster
            })
        })
        .collect();

    let clusters: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(clusters, vec![0, 1, 0, 1]);
}
