//! Attendance derivations: absence percentages, flagging, and aggregation.
//!
//! Attendance records carry the taught and attended lesson counts
//! (`kennslustundir`, `maett`), the four absence categories (`fjarvistir`,
//! `seint`, `leyfi`, `veikindi`), and the grouping fields `nemandaId`,
//! `skoli`, and `manudur`.

use std::collections::HashSet;

use crate::model::Record;

/// Students whose absence percentage is strictly above this are flagged.
pub const ABSENCE_THRESHOLD: f64 = 10.0;

/// The absence percentage of one attendance record, rounded to one
/// decimal: `(taught - attended) / taught * 100`.
///
/// Returns `None` when no lessons were taught or either count is absent or
/// mistyped; a record the formula cannot apply to is simply not rated.
pub fn absence_percent(record: &Record) -> Option<f64> {
    let taught = record.get_float("kennslustundir").ok().flatten()?;
    let attended = record.get_float("maett").ok().flatten()?;
    if taught <= 0.0 {
        return None;
    }
    let percent = (taught - attended) / taught * 100.0;
    Some((percent * 10.0).round() / 10.0)
}

/// Returns `true` when the record's absence percentage exceeds
/// [`ABSENCE_THRESHOLD`].
pub fn is_flagged(record: &Record) -> bool {
    absence_percent(record).is_some_and(|p| p > ABSENCE_THRESHOLD)
}

/// Summed absence categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub fjarvistir: i64,
    pub seint: i64,
    pub leyfi: i64,
    pub veikindi: i64,
}

impl AttendanceTotals {
    /// The sum across all four categories.
    pub fn sum(&self) -> i64 {
        self.fjarvistir + self.seint + self.leyfi + self.veikindi
    }

    fn add(&mut self, record: &Record) {
        self.fjarvistir += count(record, "fjarvistir");
        self.seint += count(record, "seint");
        self.leyfi += count(record, "leyfi");
        self.veikindi += count(record, "veikindi");
    }
}

fn count(record: &Record, field: &str) -> i64 {
    record.get_int(field).ok().flatten().unwrap_or(0)
}

/// Sums the absence categories over a record slice.
pub fn totals(records: &[&Record]) -> AttendanceTotals {
    let mut totals = AttendanceTotals::default();
    for record in records {
        totals.add(record);
    }
    totals
}

/// Sums the absence categories per distinct value of `group_key`
/// (e.g. `skoli` or `manudur`), in first-seen order.
pub fn totals_by(records: &[&Record], group_key: &str) -> Vec<(String, AttendanceTotals)> {
    let mut groups: Vec<(String, AttendanceTotals)> = Vec::new();
    for record in records {
        let key = record.value_of(group_key).display();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, totals)) => totals.add(record),
            None => {
                let mut totals = AttendanceTotals::default();
                totals.add(record);
                groups.push((key, totals));
            }
        }
    }
    groups
}

/// The summary figures above the attendance table.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStats {
    /// Distinct students in the record set.
    pub students: usize,
    /// Distinct students with at least one flagged record.
    pub flagged: usize,
    /// Total absences per distinct student, one decimal.
    pub average_per_student: f64,
    pub totals: AttendanceTotals,
}

/// Computes the attendance summary over a record slice.
pub fn stats(records: &[&Record]) -> AttendanceStats {
    let totals = totals(records);

    let mut students: HashSet<&str> = HashSet::new();
    let mut flagged: HashSet<&str> = HashSet::new();
    for record in records {
        if let Ok(Some(id)) = record.get_string("nemandaId") {
            students.insert(id);
            if is_flagged(record) {
                flagged.insert(id);
            }
        }
    }

    let average_per_student = if students.is_empty() {
        0.0
    } else {
        let avg = totals.sum() as f64 / students.len() as f64;
        (avg * 10.0).round() / 10.0
    };

    AttendanceStats {
        students: students.len(),
        flagged: flagged.len(),
        average_per_student,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendance(id: &str, student: &str, school: &str, taught: i64, attended: i64) -> Record {
        Record::new(id)
            .set("nemandaId", student)
            .set("skoli", school)
            .set("kennslustundir", taught)
            .set("maett", attended)
            .set("fjarvistir", taught - attended)
            .set("seint", 1i64)
            .set("leyfi", 0i64)
            .set("veikindi", 2i64)
    }

    #[test]
    fn test_absence_percent_rounds_to_one_decimal() {
        let record = attendance("a1", "n1", "Austurskóli", 160, 140);
        assert_eq!(absence_percent(&record), Some(12.5));
    }

    #[test]
    fn test_absence_percent_none_without_lessons() {
        let record = Record::new("a1").set("kennslustundir", 0i64).set("maett", 0i64);
        assert_eq!(absence_percent(&record), None);
        assert_eq!(absence_percent(&Record::new("a2")), None);
    }

    #[test]
    fn test_flagging_is_strictly_above_threshold() {
        // Exactly 10.0 percent is not flagged.
        let at_threshold = attendance("a1", "n1", "Austurskóli", 160, 144);
        assert_eq!(absence_percent(&at_threshold), Some(10.0));
        assert!(!is_flagged(&at_threshold));

        let above = attendance("a2", "n2", "Austurskóli", 160, 140);
        assert!(is_flagged(&above));
    }

    #[test]
    fn test_totals_by_school_in_first_seen_order() {
        let records = [
            attendance("a1", "n1", "Austurskóli", 160, 150),
            attendance("a2", "n2", "Vesturskóli", 160, 155),
            attendance("a3", "n3", "Austurskóli", 160, 158),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let groups = totals_by(&refs, "skoli");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Austurskóli");
        assert_eq!(groups[0].1.fjarvistir, 12);
        assert_eq!(groups[1].0, "Vesturskóli");
    }

    #[test]
    fn test_stats_count_distinct_students() {
        // Two records of one student, one of them flagged.
        let records = [
            attendance("a1", "n1", "Austurskóli", 160, 130),
            attendance("a2", "n1", "Austurskóli", 160, 158),
            attendance("a3", "n2", "Austurskóli", 160, 156),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let stats = stats(&refs);
        assert_eq!(stats.students, 2);
        assert_eq!(stats.flagged, 1);
        assert_eq!(stats.totals.sum(), stats.totals.fjarvistir + 3 + 6);
    }
}
