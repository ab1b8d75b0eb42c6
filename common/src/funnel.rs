//! Funnel and dashboard aggregation.
//!
//! Pure derivations over a lead snapshot: KPI totals, the per-stage
//! breakdown behind the funnel chart and kanban column counts, and the
//! recent-activity feed. No hidden state; every function is a deterministic
//! function of its input and safe to call on every re-render.

use crate::model::lead::Lead;
use crate::model::stage::Stage;

/// Headline numbers for the dashboard KPI cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Kpis {
    pub total_leads: usize,
    pub closed_count: usize,
    /// Summed deal value of leads still open (not in `Closed`).
    pub pipeline_value: u64,
    /// Summed deal value of `Closed` leads.
    pub closed_value: u64,
    /// `closed_count / total_leads * 100`, rounded to one decimal.
    /// 0 for an empty collection.
    pub conversion_rate: f64,
}

/// One stage's slice of the funnel.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSlice {
    pub stage: Stage,
    pub count: usize,
    /// Summed deal value of the leads in this stage.
    pub value: u64,
    /// `count / total * 100`; 0 for an empty collection.
    pub percentage: f64,
}

pub fn kpis(leads: &[Lead]) -> Kpis {
    let total_leads = leads.len();
    let closed_count = leads.iter().filter(|l| l.stage == Stage::Closed).count();
    let pipeline_value = leads
        .iter()
        .filter(|l| l.stage != Stage::Closed)
        .map(|l| l.deal_value)
        .sum();
    let closed_value = leads
        .iter()
        .filter(|l| l.stage == Stage::Closed)
        .map(|l| l.deal_value)
        .sum();
    let conversion_rate = if total_leads > 0 {
        round1(closed_count as f64 / total_leads as f64 * 100.0)
    } else {
        0.0
    };

    Kpis {
        total_leads,
        closed_count,
        pipeline_value,
        closed_value,
        conversion_rate,
    }
}

/// Per-stage counts, values and percentages, in fixed pipeline order.
/// The counts always sum to `leads.len()`.
pub fn by_stage(leads: &[Lead]) -> Vec<StageSlice> {
    let total = leads.len();
    Stage::ALL
        .iter()
        .map(|&stage| {
            let in_stage = leads.iter().filter(|l| l.stage == stage);
            let (count, value) = in_stage.fold((0usize, 0u64), |(c, v), l| (c + 1, v + l.deal_value));
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            StageSlice {
                stage,
                count,
                value,
                percentage,
            }
        })
        .collect()
}

/// The `n` most recently created leads, newest first. Ties on `created_at`
/// keep their original insertion order (stable sort). Returns a restartable
/// iterator; callers render it directly.
pub fn recent_activity(leads: &[Lead], n: usize) -> impl Iterator<Item = &Lead> {
    let mut recent: Vec<&Lead> = leads.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.into_iter().take(n)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, stage: Stage, value: u64, created_at: &str) -> Lead {
        Lead {
            id: id.into(),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            company: "Acme".into(),
            position: String::new(),
            email: format!("{id}@acme.example"),
            phone: String::new(),
            deal_value: value,
            stage,
            notes: String::new(),
            created_at: created_at.into(),
            updated_at: created_at.into(),
        }
    }

    #[test]
    fn kpis_of_empty_collection_are_zero() {
        let k = kpis(&[]);
        assert_eq!(k.total_leads, 0);
        assert_eq!(k.conversion_rate, 0.0);
        assert_eq!(k.pipeline_value, 0);
    }

    #[test]
    fn kpis_split_open_and_closed_value() {
        let leads = vec![
            lead("a", Stage::Prospect, 100, "2026-08-01T10:00:00"),
            lead("b", Stage::Closed, 500, "2026-08-02T10:00:00"),
        ];
        let k = kpis(&leads);
        assert_eq!(k.total_leads, 2);
        assert_eq!(k.closed_count, 1);
        assert_eq!(k.pipeline_value, 100);
        assert_eq!(k.closed_value, 500);
        assert_eq!(k.conversion_rate, 50.0);
    }

    #[test]
    fn conversion_rate_is_rounded_to_one_decimal_and_bounded() {
        let leads = vec![
            lead("a", Stage::Closed, 0, "2026-08-01T10:00:00"),
            lead("b", Stage::Prospect, 0, "2026-08-01T10:00:00"),
            lead("c", Stage::Prospect, 0, "2026-08-01T10:00:00"),
        ];
        let k = kpis(&leads);
        assert_eq!(k.conversion_rate, 33.3);
        assert!(k.conversion_rate >= 0.0 && k.conversion_rate <= 100.0);
    }

    #[test]
    fn stage_counts_sum_to_total() {
        let leads = vec![
            lead("a", Stage::Prospect, 10, "2026-08-01T10:00:00"),
            lead("b", Stage::Prospect, 20, "2026-08-01T11:00:00"),
            lead("c", Stage::Negotiation, 30, "2026-08-01T12:00:00"),
            lead("d", Stage::Closed, 40, "2026-08-01T13:00:00"),
        ];
        let slices = by_stage(&leads);
        assert_eq!(slices.len(), Stage::ALL.len());
        assert_eq!(slices.iter().map(|s| s.count).sum::<usize>(), leads.len());
        assert_eq!(slices[0].stage, Stage::Prospect);
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[0].value, 30);
        assert_eq!(slices[0].percentage, 50.0);
        assert_eq!(slices[1].count, 0);
    }

    #[test]
    fn by_stage_of_empty_collection_has_zero_percentages() {
        for slice in by_stage(&[]) {
            assert_eq!(slice.count, 0);
            assert_eq!(slice.percentage, 0.0);
        }
    }

    #[test]
    fn recent_activity_is_newest_first_and_capped() {
        let leads = vec![
            lead("a", Stage::Prospect, 0, "2026-08-01T10:00:00"),
            lead("b", Stage::Prospect, 0, "2026-08-03T10:00:00"),
            lead("c", Stage::Prospect, 0, "2026-08-02T10:00:00"),
        ];
        let all: Vec<&str> = recent_activity(&leads, 5).map(|l| l.id.as_str()).collect();
        assert_eq!(all, ["b", "c", "a"]);
        assert_eq!(recent_activity(&leads, 2).count(), 2);
    }

    #[test]
    fn recent_activity_ties_keep_insertion_order() {
        let leads = vec![
            lead("a", Stage::Prospect, 0, "2026-08-01T10:00:00"),
            lead("b", Stage::Prospect, 0, "2026-08-01T10:00:00"),
            lead("c", Stage::Prospect, 0, "2026-08-01T10:00:00"),
        ];
        let ids: Vec<&str> = recent_activity(&leads, 5).map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
