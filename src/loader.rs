use crate::config::RosterConfig;
use crate::model::Student;
use csv::{ReaderBuilder, Trim};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Reads rosters of `id,name,gpa` records.
#[derive(Clone, Copy, Debug)]
pub struct Loader {
    delimiter: u8,
    has_headers: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(b',', true)
    }
}

impl Loader {
    pub fn new(delimiter: u8, has_headers: bool) -> Self {
        Self {
            delimiter,
            has_headers,
        }
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        Ok(Self::new(config.delimiter_byte()?, config.has_headers))
    }

    pub fn load_path(&self, path: &Path) -> Result<Vec<Student>> {
        let file =
            File::open(path).wrap_err_with(|| format!("cannot open roster {}", path.display()))?;
        self.load_reader(file)
            .wrap_err_with(|| format!("cannot load roster {}", path.display()))
    }

    pub fn load_reader(&self, reader: impl Read) -> Result<Vec<Student>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .trim(Trim::All)
            .from_reader(reader);
        let mut students = Vec::new();
        for (n, record) in reader.deserialize::<Student>().enumerate() {
            let student = record.wrap_err_with(|| format!("cannot parse record {}", n + 1))?;
            trace!(%student, "loaded student");
            students.push(student);
        }
        debug!(students = students.len(), "roster loaded");
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_with_headers() {
        let students = Loader::default()
            .load_reader("id,name,gpa\ns1,Bob,3.2\ns2, Alice ,3.8\n".as_bytes())
            .unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, "s1");
        assert_eq!(students[1].name, "Alice");
        assert_eq!(students[1].gpa, 3.8);
    }

    #[test]
    fn test_load_by_header_name() {
        let students = Loader::default()
            .load_reader("gpa,id,name\n3.5,s3,Alice\n".as_bytes())
            .unwrap();
        assert_eq!(students[0].id, "s3");
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].gpa, 3.5);
    }

    #[test]
    fn test_load_without_headers() {
        let students = Loader::new(b';', false)
            .load_reader("s1;Bob;3\ns2;Alice;3.8\n".as_bytes())
            .unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].gpa, 3.0);
        assert_eq!(students[1].id, "s2");
    }

    #[test]
    fn test_load_empty() {
        assert!(Loader::default().load_reader("".as_bytes()).unwrap().is_empty());
        assert!(
            Loader::default()
                .load_reader("id,name,gpa\n".as_bytes())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_bad_record() {
        let err = Loader::default()
            .load_reader("id,name,gpa\ns1,Bob,3.2\ns2,Alice,high\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot parse record 2");
    }

    #[test]
    fn test_from_config() {
        let config = RosterConfig {
            delimiter: "\t".to_owned(),
            has_headers: false,
            ..RosterConfig::default()
        };
        let students = Loader::from_config(&config)
            .unwrap()
            .load_reader("s1\tBob\t3.2\n".as_bytes())
            .unwrap();
        assert_eq!(students, vec![Student::new("s1", "Bob", 3.2)]);
        assert_eq!(students[0].id, "s1");
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,name,gpa\ns1,Bob,3.2").unwrap();
        let students = Loader::default().load_path(file.path()).unwrap();
        assert_eq!(students[0].id, "s1");
        let dir = tempfile::tempdir().unwrap();
        let err = Loader::default()
            .load_path(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(err.to_string().starts_with("cannot open roster"));
    }
}
