use crate::extract::record::EmployeeRecord;
use std::collections::HashSet;

/// Collapses records sharing a `(firstname, lastname)` key
///
/// The first occurrence of each key wins, including its position; output
/// order is the order of first occurrence.
pub fn dedupe(records: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(records.len());
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let key = (record.firstname.clone(), record.lastname.clone());
        if seen.insert(key) {
            unique.push(record);
        } else {
            tracing::debug!(
                "Dropping duplicate employee {} {}",
                record.firstname,
                record.lastname
            );
        }
    }

    unique
}
