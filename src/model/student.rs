use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub gpa: f64,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, gpa: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gpa,
        }
    }
}

/// Every NaN maps to the same positive NaN, so all of them sort after
/// `+inf` and compare equal to each other.
fn gpa_key(gpa: f64) -> f64 {
    if gpa.is_nan() { f64::NAN.abs() } else { gpa }
}

/// Order students by name, then by GPA.
///
/// GPA uses `f64::total_cmp`, which agrees with `<` on regular values and
/// puts `-0.0` before `0.0`.
pub fn compare(a: &Student, b: &Student) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| gpa_key(a.gpa).total_cmp(&gpa_key(b.gpa)))
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{} {} {:.*}", self.id, self.name, precision, self.gpa)
    }
}
