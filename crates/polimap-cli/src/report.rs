//! Plain-text rendering of results.

use polimap_common::entities::Analysis;
use polimap_common::QuestionSet;
use polimap_engine::PoliticalModel;

/// Join report lines, each terminated by a newline.
fn render(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn analysis_report(axes: &[String], analysis: &Analysis) -> String {
    let mut lines = vec![
        format!(
            "Closest reference : {} (distance {:.3})",
            analysis.nearest.name, analysis.nearest.distance
        ),
        format!("Interpretation    : {}", analysis.interpretation),
        "Coordinates:".to_string(),
    ];
    lines.extend(
        axes.iter()
            .zip(&analysis.coordinates)
            .map(|(axis, value)| format!("  {axis:<20} {value:>8.3}")),
    );
    lines.push(format!("Cluster           : {}", analysis.cluster));
    render(lines)
}

pub fn questions_report(questions: &QuestionSet, min: i32, max: i32) -> String {
    let mut lines = vec![format!("Answer each statement from {min} to {max}.")];
    lines.extend(
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{:>2}. {:<22} {}", i + 1, q.id, q.prompt)),
    );
    render(lines)
}

pub fn model_summary(model: &PoliticalModel) -> String {
    let ids: Vec<String> = model.centroids().iter().map(|c| c.id.to_string()).collect();
    render(vec![
        format!("Questions  : {}", model.questions().len()),
        format!("Axes       : {}", model.axes().join(", ")),
        format!("Clusters   : {}", ids.join(", ")),
        format!("References : {}", model.reference().len()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use polimap_common::entities::NearestReference;

    #[test]
    fn test_report_rounds_to_three_decimals() {
        let analysis = Analysis {
            coordinates: vec![1.23456, -0.5],
            cluster: 2,
            interpretation: "Droite".to_string(),
            nearest: NearestReference {
                name: "Candidate R".to_string(),
                distance: 0.04449,
                index: 3,
                cluster: Some(2),
            },
        };
        let axes = vec!["PC1".to_string(), "PC2".to_string()];
        let report = analysis_report(&axes, &analysis);

        assert!(report.contains("Candidate R (distance 0.044)"));
        assert!(report.contains("1.235"));
        assert!(report.contains("-0.500"));
        assert!(report.contains("Cluster           : 2"));
    }

    #[test]
    fn test_questions_report_numbered() {
        let set = QuestionSet::from_ids(&["Q1", "Q2"]).unwrap();
        let report = questions_report(&set, -2, 2);
        assert!(report.starts_with("Answer each statement from -2 to 2."));
        assert!(report.contains(" 2. Q2"));
        assert_eq!(report.lines().count(), 3);
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_render_terminates_every_line() {
        assert_eq!(render(vec!["a".to_string(), "b".to_string()]), "a\nb\n");
        assert_eq!(render(Vec::new()), "");
    }
}
