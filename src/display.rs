use crate::model::Student;
use std::io::{self, Write};

pub fn render(students: &[Student], precision: usize) -> String {
    students
        .iter()
        .map(|s| format!("{s:.precision$}\n"))
        .collect()
}

pub fn write_students(
    out: &mut impl Write,
    title: &str,
    students: &[Student],
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    if students.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        for line in render(students, precision).lines() {
            writeln!(out, "  - {line}")?;
        }
    }
    Ok(())
}

pub fn display_students(title: &str, students: &[Student], precision: usize) -> io::Result<()> {
    write_students(&mut io::stdout().lock(), title, students, precision)
}
