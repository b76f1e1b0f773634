use std::collections::HashSet;

use super::entities::VisualizationRecord;

/// Keeps the most recently touched record per `visualization_id`, newest
/// first. Report types collapse: two records sharing an id but not a report
/// type still yield one entry. Ties keep their incoming order.
pub fn latest_per_visualization(mut records: Vec<VisualizationRecord>) -> Vec<VisualizationRecord> {
    records.sort_by(|a, b| b.last_touched().cmp(&a.last_touched()));

    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.visualization_id.clone()))
        .collect()
}
