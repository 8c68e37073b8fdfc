use super::history::SessionHistory;
use indexmap::IndexMap;

/// Mean percentage per label. Labels that never received a sample are absent.
pub type Aggregate = IndexMap<String, f64>;

/// The session's best match, `None` when no label beat the zero baseline.
pub type Decision = Option<String>;

pub fn average(history: &SessionHistory) -> Aggregate {
    history
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(label, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (label.to_string(), mean)
        })
        .collect()
}

/// Arg-max over the aggregate with a running maximum starting at `0.0`.
///
/// Only a strictly greater mean replaces the current pick, so ties keep the
/// label seen first and an all-zero aggregate yields `None`.
pub fn pick_best(aggregate: &Aggregate) -> Decision {
    let mut best: Decision = None;
    let mut best_mean = 0.0;

    for (label, &mean) in aggregate {
        if mean > best_mean {
            best_mean = mean;
            best = Some(label.clone());
        }
    }

    best
}

/// What is left of a session once it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub aggregate: Aggregate,
    pub decision: Decision,
    pub frames_sampled: usize,
    pub ticks_failed: usize,
    pub ticks_skipped: usize,
}

impl SessionSummary {
    pub fn from_history(history: &SessionHistory) -> Self {
        let aggregate = average(history);
        let decision = pick_best(&aggregate);
        Self {
            aggregate,
            decision,
            frames_sampled: history.frames_recorded(),
            ticks_failed: 0,
            ticks_skipped: 0,
        }
    }

    pub fn winning_mean(&self) -> Option<f64> {
        self.decision
            .as_ref()
            .and_then(|label| self.aggregate.get(label).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem, HealthScore};
    use crate::prediction::history::Sample;

    fn catalog(labels: &[&str]) -> Catalog {
        Catalog::new(
            labels
                .iter()
                .map(|label| CatalogItem::new(label, label, "x.png", HealthScore::Moderate, 0))
                .collect(),
        )
    }

    fn history_of(entries: &[(&str, &[f64])]) -> SessionHistory {
        let labels: Vec<&str> = entries.iter().map(|(label, _)| *label).collect();
        let mut history = SessionHistory::new(&catalog(&labels));
        for (label, percentages) in entries {
            for percentage in *percentages {
                history.record(&Sample::new(label, *percentage / 100.0));
            }
        }
        history
    }

    fn assert_close(actual: Option<&f64>, expected: f64) {
        let actual = actual.copied().expect("label missing from aggregate");
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_mean_and_strict_winner() {
        let history = history_of(&[("A", &[10.0, 20.0, 30.0]), ("B", &[50.0])]);

        let aggregate = average(&history);

        assert_eq!(aggregate.len(), 2);
        assert_close(aggregate.get("A"), 20.0);
        assert_close(aggregate.get("B"), 50.0);
        assert_eq!(pick_best(&aggregate), Some("B".to_string()));
    }

    #[test]
    fn test_all_zero_has_no_winner() {
        let history = history_of(&[("A", &[0.0, 0.0]), ("B", &[0.0])]);

        let aggregate = average(&history);

        assert_eq!(aggregate.get("A"), Some(&0.0));
        assert_eq!(aggregate.get("B"), Some(&0.0));
        assert_eq!(pick_best(&aggregate), None);
    }

    #[test]
    fn test_fresh_history_has_empty_aggregate() {
        let history = SessionHistory::new(&catalog(&["A", "B", "C"]));

        let aggregate = average(&history);

        assert!(aggregate.is_empty());
        assert_eq!(pick_best(&aggregate), None);
    }

    #[test]
    fn test_empty_label_is_absent_not_zero() {
        let history = history_of(&[("A", &[40.0]), ("B", &[])]);

        let aggregate = average(&history);

        assert!(aggregate.contains_key("A"));
        assert!(!aggregate.contains_key("B"));
    }

    #[test]
    fn test_recording_order_does_not_change_mean() {
        let forward = history_of(&[("A", &[5.0, 60.0, 25.0, 10.0])]);
        let backward = history_of(&[("A", &[10.0, 25.0, 60.0, 5.0])]);

        assert_close(average(&forward).get("A"), 25.0);
        assert_close(average(&backward).get("A"), 25.0);
    }

    #[test]
    fn test_average_is_pure() {
        let history = history_of(&[("A", &[12.5, 37.5]), ("B", &[80.0])]);

        assert_eq!(average(&history), average(&history));
    }

    #[test]
    fn test_tie_keeps_first_label_in_catalog_order() {
        let history = history_of(&[("A", &[50.0]), ("B", &[50.0])]);

        assert_eq!(pick_best(&average(&history)), Some("A".to_string()));
    }

    #[test]
    fn test_summary_counts_frames() {
        let history = history_of(&[("A", &[10.0, 30.0]), ("B", &[70.0, 90.0])]);

        let summary = SessionSummary::from_history(&history);

        assert_eq!(summary.frames_sampled, 2);
        assert_eq!(summary.decision, Some("B".to_string()));
        assert_close(summary.winning_mean().as_ref(), 80.0);
    }
}
