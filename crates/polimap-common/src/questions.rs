//! Ordered survey question set.
//!
//! The order of questions is the feature order of the model artifacts; it
//! must never be re-sorted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{PolimapError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, matching the training column name
    pub id: String,
    /// Statement shown to the user
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

/// Built-in CEVIPOF questionnaire, in training column order.
const CEVIPOF_QUESTIONS: [(&str, &str); 19] = [
    ("TAX_DROIT_SUCCESSION", "Il faut taxer plus fortement les droits de succession."),
    ("ENCADR_LOYER", "L'État doit prendre des mesures pour encadrer les loyers."),
    ("PRENDRE_RICHE", "Pour rétablir la justice sociale, il faut prendre aux riches pour donner aux pauvres."),
    ("REV_UNIVERSEL", "Il faut instaurer un revenu universel pour tous les jeunes."),
    ("AUGM_SALAIRE", "L'État doit forcer les entreprises à augmenter les salaires."),
    ("ECOLE_DISCIPLINE", "L'école doit donner le sens de la discipline et de l'effort."),
    ("EXCUSE_COLONISATION", "La France doit s'excuser pour la colonisation."),
    ("PMA_BON", "La PMA est une bonne chose pour les femmes seules ou homosexuelles."),
    ("INVEST_SERV_PUBLIC", "L'État doit investir massivement dans les services publics."),
    ("PUNIR_DELINQU", "Il faut punir plus durement les délinquants."),
    ("REDUIR_DROIT_MANIF", "Il faut réduire le droit de manifester."),
    ("LICENCIEMENT_FACIL", "Les patrons doivent pouvoir licencier plus facilement."),
    ("REDUIR_FONCTIONNAIRE", "Il faut réduire le nombre de fonctionnaires."),
    ("BAISSE_CHARGE_ENTR", "Il faut baisser les charges des entreprises."),
    ("SORTIR_OTAN", "La France doit sortir de l'OTAN."),
    ("AVANTAG_UE", "La France tire plus d'avantages que d'inconvénients de l'UE."),
    ("UE_PROTEG_MONDIAL", "L'UE protège des effets négatifs de la mondialisation."),
    ("REDUIR_NUCLEAIRE", "Il faut réduire la part du nucléaire."),
    ("CHANG_ECONOM_MARCHE", "La transition écologique nécessite de revoir le marché économique."),
];

impl QuestionSet {
    /// Build a question set, rejecting empty sets and duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(PolimapError::Config("question set is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(PolimapError::Config(format!(
                    "duplicate question id '{}'",
                    q.id
                )));
            }
        }
        Ok(Self { questions })
    }

    /// Convenience constructor for tests and synthetic models: prompts equal ids.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        Self::new(
            ids.iter()
                .map(|id| Question {
                    id: id.as_ref().to_string(),
                    prompt: id.as_ref().to_string(),
                })
                .collect(),
        )
    }

    pub fn cevipof() -> Self {
        Self {
            questions: CEVIPOF_QUESTIONS
                .iter()
                .map(|(id, prompt)| Question {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                })
                .collect(),
        }
    }

    /// Load a question list from a YAML or JSON file (chosen by extension).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let questions: Vec<Question> = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::cevipof()
    }
}
