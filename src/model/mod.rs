pub use self::student::{Student, compare};

mod student;
