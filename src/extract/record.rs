/// Placeholder position for results without a usable subtitle
pub const POSITION_UNAVAILABLE: &str = "N/A";

/// One employee as parsed from a search result
///
/// `firstname` and `lastname` are always non-empty and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub firstname: String,
    pub lastname: String,
    pub position: String,
}

impl EmployeeRecord {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            position: position.into(),
        }
    }

    /// Key used to collapse repeated sightings of the same person
    pub fn dedupe_key(&self) -> (&str, &str) {
        (&self.firstname, &self.lastname)
    }
}

/// A deduplicated employee with an inferred email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeContact {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub position: String,
}

impl EmployeeContact {
    pub fn from_record(record: EmployeeRecord, email: String) -> Self {
        Self {
            firstname: record.firstname,
            lastname: record.lastname,
            email,
            position: record.position,
        }
    }
}
