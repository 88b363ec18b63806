use kokoro_core::ids;
use kokoro_core::models::summary::PatientSummary;

/// Case-insensitive substring search over id, name (without the
/// anonymization marker), age group and gender. A blank query matches
/// everything. Population order is kept.
pub fn search_summaries<'a>(summaries: &'a [PatientSummary], query: &str) -> Vec<&'a PatientSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return summaries.iter().collect();
    }
    summaries
        .iter()
        .filter(|s| {
            s.id.to_string().to_lowercase().contains(&query)
                || ids::strip_anonymized(&s.name).to_lowercase().contains(&query)
                || s.age_group.to_lowercase().contains(&query)
                || s.gender.label().contains(&query)
        })
        .collect()
}
