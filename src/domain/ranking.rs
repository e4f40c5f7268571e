//! Top complaint-type ranking.
//!
//! Ranking works on distinct counts rather than on groups: with a limit of 3,
//! every type whose count is among the three highest counts is kept, and types
//! sharing a count collapse into a single row.

use serde::Serialize;

/// One ranked row. `complaint_type` holds every tied type, comma-space joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedComplaint {
    pub complaint_type: String,
    pub count: i64,
}

/// Ranks `(complaint_type, count)` groups.
///
/// Output is ordered by count descending. Tied types are merged in
/// alphabetical order and the result never holds more than `limit` rows.
///
/// # Examples
///
/// ```rust
/// use councildesk::domain::ranking::rank_top_complaints;
///
/// let groups = [("Noise", 5), ("Heat", 5), ("Rodent", 2)];
/// let ranked = rank_top_complaints(&groups, 3);
/// assert_eq!(ranked[0].complaint_type, "Heat, Noise");
/// assert_eq!(ranked[0].count, 5);
/// assert_eq!(ranked.len(), 2);
/// ```
#[must_use]
pub fn rank_top_complaints<S: AsRef<str>>(groups: &[(S, i64)], limit: usize) -> Vec<RankedComplaint> {
    if limit == 0 {
        return Vec::new();
    }

    let mut top_counts: Vec<i64> = groups
        .iter()
        .map(|(_, count)| *count)
        .filter(|count| *count > 0)
        .collect();
    top_counts.sort_unstable_by(|a, b| b.cmp(a));
    top_counts.dedup();
    top_counts.truncate(limit);

    let mut selected: Vec<(&str, i64)> = groups
        .iter()
        .filter(|(_, count)| top_counts.contains(count))
        .map(|(complaint_type, count)| (complaint_type.as_ref(), *count))
        .collect();
    selected.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut ranked: Vec<RankedComplaint> = Vec::with_capacity(top_counts.len());
    for (complaint_type, count) in selected {
        match ranked.last_mut() {
            Some(row) if row.count == count => {
                row.complaint_type.push_str(", ");
                row.complaint_type.push_str(complaint_type);
            }
            _ => ranked.push(RankedComplaint {
                complaint_type: complaint_type.to_string(),
                count,
            }),
        }
    }

    ranked.truncate(limit);
    ranked
}
