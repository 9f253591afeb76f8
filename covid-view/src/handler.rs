//! Selection-change entry point for the borough chart.

use crate::charts::borough_figure;
use crate::context::DashboardContext;
use crate::figure::Figure;
use crate::selector::select_borough_view;
use covid_data::borough::{BoroughColumn, Kind, Metric};
use covid_data::CovidDataError;
use serde::{Deserialize, Serialize};

/// The two borough radio groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub metric: Metric,
    pub kind: Kind,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            metric: Metric::Case,
            kind: Kind::Rate,
        }
    }
}

impl Selection {
    pub fn column(&self) -> BoroughColumn {
        BoroughColumn::new(self.metric, self.kind)
    }

    /// Parse raw radio values such as `("HOSPITALIZED", "COUNT")`.
    pub fn from_option_values(metric: &str, kind: &str) -> Result<Self, CovidDataError> {
        let column = BoroughColumn::from_option_values(metric, kind)?;
        Ok(Self {
            metric: column.metric,
            kind: column.kind,
        })
    }
}

/// Rebuild the borough figure for a new selection.
pub fn handle_selection_change(context: &DashboardContext, selection: Selection) -> Figure {
    let view = select_borough_view(&context.boroughs, selection.column());
    log::debug!(
        "[COVID] handler: borough chart -> {} ({})",
        view.column,
        view.axis_label
    );
    borough_figure(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::sample_context;
    use crate::figure::Values;

    fn borough_labels(figure: &Figure) -> Vec<String> {
        match &figure.data[0].y {
            Values::Labels(labels) => labels.clone(),
            other => panic!("expected labels, got {:?}", other),
        }
    }

    #[test]
    fn default_selection_is_case_rate() {
        let selection = Selection::default();
        assert_eq!(selection.column().key(), "CASE_RATE");
    }

    #[test]
    fn option_values_parse() {
        let selection = Selection::from_option_values("HOSPITALIZED", "COUNT").unwrap();
        assert_eq!(selection.metric, Metric::Hospitalized);
        assert_eq!(selection.kind, Kind::Count);
        assert!(matches!(
            Selection::from_option_values("FOO", "COUNT"),
            Err(CovidDataError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn default_selection_sorts_by_case_rate() {
        let context = sample_context();
        let figure = handle_selection_change(&context, Selection::default());
        assert_eq!(
            borough_labels(&figure),
            vec!["Manhattan", "Brooklyn", "Queens", "Staten Island", "Bronx"]
        );
        assert_eq!(
            figure.layout.xaxis.title.as_ref().unwrap().text,
            "Cases (per 100,000 People)"
        );
    }

    #[test]
    fn death_count_selection() {
        let context = sample_context();
        let selection = Selection {
            metric: Metric::Death,
            kind: Kind::Count,
        };
        let figure = handle_selection_change(&context, selection);
        assert_eq!(
            borough_labels(&figure),
            vec!["Staten Island", "Manhattan", "Bronx", "Queens", "Brooklyn"]
        );
        assert_eq!(figure.data[0].x, Values::Numbers(vec![833.0, 2229.0, 3958.0, 5430.0, 5930.0]));
        assert_eq!(figure.layout.xaxis.title.as_ref().unwrap().text, "Deaths");
    }

    #[test]
    fn repeated_selection_gives_identical_json() {
        let context = sample_context();
        let selection = Selection {
            metric: Metric::Hospitalized,
            kind: Kind::Rate,
        };
        let first = handle_selection_change(&context, selection).to_json().unwrap();
        let second = handle_selection_change(&context, selection).to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn selection_does_not_mutate_context() {
        let context = sample_context();
        let before = context.clone();
        for metric in Metric::ALL {
            for kind in Kind::ALL {
                handle_selection_change(&context, Selection { metric, kind });
            }
        }
        assert_eq!(context, before);
    }
}
