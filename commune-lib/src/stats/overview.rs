//! The dashboard's headline figures.

use crate::model::Record;

/// Headline counts on the overview page.
///
/// Student and staff totals come from the per-school counter fields
/// (`nemendafjoldi`, `starfsmannafjoldi`); the guardian figure is a plain
/// record count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub schools: usize,
    pub students: i64,
    pub staff: i64,
    pub guardians: usize,
}

impl Overview {
    /// Computes the overview from the school and guardian record sets.
    pub fn compute(schools: &[Record], guardians: &[Record]) -> Self {
        let students = sum_field(schools, "nemendafjoldi");
        let staff = sum_field(schools, "starfsmannafjoldi");
        Self {
            schools: schools.len(),
            students,
            staff,
            guardians: guardians.len(),
        }
    }
}

fn sum_field(records: &[Record], field: &str) -> i64 {
    records
        .iter()
        .filter_map(|r| r.get_int(field).ok().flatten())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_sums_school_counters() {
        let schools = vec![
            Record::new("s1")
                .set("nemendafjoldi", 320i64)
                .set("starfsmannafjoldi", 42i64),
            Record::new("s2")
                .set("nemendafjoldi", 180i64)
                .set("starfsmannafjoldi", 25i64),
        ];
        let guardians = vec![Record::new("a1"), Record::new("a2"), Record::new("a3")];

        let overview = Overview::compute(&schools, &guardians);
        assert_eq!(overview.schools, 2);
        assert_eq!(overview.students, 500);
        assert_eq!(overview.staff, 67);
        assert_eq!(overview.guardians, 3);
    }

    #[test]
    fn test_missing_counters_are_skipped() {
        let schools = vec![Record::new("s1").set("nemendafjoldi", 100i64)];
        let overview = Overview::compute(&schools, &[]);
        assert_eq!(overview.students, 100);
        assert_eq!(overview.staff, 0);
    }
}
