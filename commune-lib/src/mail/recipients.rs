//! Recipient selection for the mass-mail composer.

use crate::model::Record;

/// Who a mass mail addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientKind {
    /// Staff members of the selected schools.
    Staff,
    /// Guardians of students matched by the school/year selection.
    Guardians,
    /// Adult students matched by the school/year selection.
    AdultStudents,
}

/// The recipient selection made in the composer.
///
/// School selection is mandatory: an empty `schools` list selects nobody.
/// `years` narrows students (and, through them, guardians) by `argangur`;
/// an empty list means every year. Staff selection ignores `years`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientQuery {
    pub kind: RecipientKind,
    pub schools: Vec<String>,
    pub years: Vec<i64>,
}

impl RecipientQuery {
    /// Creates a query with no schools or years selected.
    pub fn new(kind: RecipientKind) -> Self {
        Self {
            kind,
            schools: Vec::new(),
            years: Vec::new(),
        }
    }

    /// Adds a school to the selection (builder pattern).
    pub fn school(mut self, name: impl Into<String>) -> Self {
        self.schools.push(name.into());
        self
    }

    /// Adds a year to the selection (builder pattern).
    pub fn year(mut self, year: i64) -> Self {
        self.years.push(year);
        self
    }
}

/// One resolved mail recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

/// Resolves a recipient query against the staff, student, and guardian
/// record sets.
///
/// Staff match when their `skoli` is selected. Students match when their
/// `skoli` is selected and their `argangur` passes the year selection.
/// Guardians match when their `nemendur` list names at least one matched
/// student. Records without a usable name or email are skipped.
pub fn collect_recipients(
    query: &RecipientQuery,
    staff: &[Record],
    students: &[Record],
    guardians: &[Record],
) -> Vec<Recipient> {
    if query.schools.is_empty() {
        return Vec::new();
    }

    match query.kind {
        RecipientKind::Staff => staff
            .iter()
            .filter(|s| school_selected(query, s))
            .filter_map(to_recipient)
            .collect(),
        RecipientKind::AdultStudents => students
            .iter()
            .filter(|n| student_matches(query, n))
            .filter_map(to_recipient)
            .collect(),
        RecipientKind::Guardians => {
            let matched_students: Vec<&str> = students
                .iter()
                .filter(|n| student_matches(query, n))
                .filter_map(|n| n.get_string("nafn").ok().flatten())
                .collect();
            guardians
                .iter()
                .filter(|g| {
                    g.get_list("nemendur")
                        .ok()
                        .flatten()
                        .is_some_and(|children| {
                            children
                                .iter()
                                .any(|child| matched_students.contains(&child.as_str()))
                        })
                })
                .filter_map(to_recipient)
                .collect()
        }
    }
}

fn school_selected(query: &RecipientQuery, record: &Record) -> bool {
    record
        .get_string("skoli")
        .ok()
        .flatten()
        .is_some_and(|skoli| query.schools.iter().any(|s| s == skoli))
}

fn student_matches(query: &RecipientQuery, student: &Record) -> bool {
    if !school_selected(query, student) {
        return false;
    }
    if query.years.is_empty() {
        return true;
    }
    student
        .get_int("argangur")
        .ok()
        .flatten()
        .is_some_and(|year| query.years.contains(&year))
}

fn to_recipient(record: &Record) -> Option<Recipient> {
    let name = record.get_string("nafn").ok().flatten()?;
    let email = record.get_string("netfang").ok().flatten()?;
    Some(Recipient {
        name: name.to_string(),
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str, school: &str, year: i64) -> Record {
        Record::new(id)
            .set("nafn", name)
            .set("netfang", format!("{id}@nemandi.is"))
            .set("skoli", school)
            .set("argangur", year)
    }

    #[test]
    fn test_empty_school_selection_selects_nobody() {
        let staff = vec![
            Record::new("s1")
                .set("nafn", "Helga")
                .set("netfang", "helga@skoli.is")
                .set("skoli", "Austurskóli"),
        ];
        let query = RecipientQuery::new(RecipientKind::Staff);
        assert!(collect_recipients(&query, &staff, &[], &[]).is_empty());
    }

    #[test]
    fn test_years_narrow_students() {
        let students = vec![
            student("n1", "Anna", "Austurskóli", 2012),
            student("n2", "Björn", "Austurskóli", 2014),
        ];
        let query = RecipientQuery::new(RecipientKind::AdultStudents)
            .school("Austurskóli")
            .year(2012);

        let recipients = collect_recipients(&query, &[], &students, &[]);
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].name, "Anna");
    }

    #[test]
    fn test_guardians_selected_through_their_students() {
        let students = vec![
            student("n1", "Anna", "Austurskóli", 2012),
            student("n2", "Björn", "Vesturskóli", 2012),
        ];
        let guardians = vec![
            Record::new("a1")
                .set("nafn", "Guðrún")
                .set("netfang", "gudrun@heimili.is")
                .set("nemendur", vec!["Anna"]),
            Record::new("a2")
                .set("nafn", "Pétur")
                .set("netfang", "petur@heimili.is")
                .set("nemendur", vec!["Björn"]),
        ];
        let query = RecipientQuery::new(RecipientKind::Guardians).school("Austurskóli");

        let recipients = collect_recipients(&query, &[], &students, &guardians);
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].name, "Guðrún");
    }
}
