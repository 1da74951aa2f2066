use crate::model::Student;
use tracing::{debug, instrument};

/// Sorting and filtering over rosters. Holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct StudentProcessor;

impl StudentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Sort students in place by name, then by GPA. The sort is stable.
    #[instrument(skip_all, fields(students = students.len()))]
    pub fn sort(&self, students: &mut [Student]) {
        students.sort();
        debug!("roster sorted");
    }

    /// Students whose name starts with `prefix`, in their original order.
    /// Matching is case-sensitive and an empty prefix matches everyone.
    #[instrument(skip(self, students), fields(students = students.len()))]
    pub fn find_by_partial_name(&self, students: &[Student], prefix: &str) -> Vec<Student> {
        let found = students
            .iter()
            .filter(|s| s.name.starts_with(prefix))
            .cloned()
            .collect::<Vec<_>>();
        debug!(found = found.len(), "filtered by name prefix");
        found
    }

    /// Students whose GPA is strictly above `threshold`, in their original order.
    #[instrument(skip_all, fields(students = students.len()))]
    pub fn find_higher_gpa(&self, students: &[Student], threshold: impl Into<f64>) -> Vec<Student> {
        let threshold = threshold.into();
        let found = students
            .iter()
            .filter(|s| s.gpa > threshold)
            .cloned()
            .collect::<Vec<_>>();
        debug!(threshold, found = found.len(), "filtered by gpa");
        found
    }
}
