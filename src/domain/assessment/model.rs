use chrono::{DateTime, Utc};

/// One persisted assessment submission.
///
/// Immutable and undeletable once created; read in aggregate by the admin
/// workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentResponse {
    pub id: i32,
    /// Section A score, in [0,2].
    pub knowledge: i32,
    /// Section B score, in [2,6].
    pub awareness: i32,
    /// Section C score, in [2,6].
    pub practice: i32,
    pub submitted_at: DateTime<Utc>,
}

/// The three section scores computed for a single submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreReport {
    pub knowledge: i32,
    pub awareness: i32,
    pub practice: i32,
}

/// Per-column arithmetic means across all submissions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreAverages {
    pub knowledge: f64,
    pub awareness: f64,
    pub practice: f64,
}

impl ScoreAverages {
    /// Column means over `rows`, or `None` for an empty slice.
    ///
    /// Undefined-on-empty is part of the store contract: the presentation
    /// layer must never be handed a zero average to chart.
    pub fn from_rows(rows: &[AssessmentResponse]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let n = rows.len() as f64;
        Some(Self {
            knowledge: rows.iter().map(|r| r.knowledge as f64).sum::<f64>() / n,
            awareness: rows.iter().map(|r| r.awareness as f64).sum::<f64>() / n,
            practice: rows.iter().map(|r| r.practice as f64).sum::<f64>() / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, knowledge: i32, awareness: i32, practice: i32) -> AssessmentResponse {
        AssessmentResponse {
            id,
            knowledge,
            awareness,
            practice,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn averages_of_empty_is_none() {
        assert_eq!(ScoreAverages::from_rows(&[]), None);
    }

    #[test]
    fn averages_are_per_column_means() {
        let rows = vec![row(1, 0, 2, 6), row(2, 2, 4, 4)];
        let avg = ScoreAverages::from_rows(&rows).unwrap();
        assert_eq!(avg.knowledge, 1.0);
        assert_eq!(avg.awareness, 3.0);
        assert_eq!(avg.practice, 5.0);
    }

    #[test]
    fn single_row_averages_equal_the_row() {
        let avg = ScoreAverages::from_rows(&[row(1, 2, 5, 3)]).unwrap();
        assert_eq!(avg.knowledge, 2.0);
        assert_eq!(avg.awareness, 5.0);
        assert_eq!(avg.practice, 3.0);
    }
}
