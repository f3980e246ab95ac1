pub mod class;
pub mod de;
pub mod enrollment;
pub mod exercise;
pub mod from_row;
pub mod progress;
pub mod routine;
pub mod student;

pub use class::{Class, ClassDuration, CreateClass};
pub use enrollment::{CreateEnrollment, Enrollment};
pub use exercise::{CreateExercise, Exercise};
pub use from_row::FromSqliteRow;
pub use progress::{CreateProgress, Progress};
pub use routine::{CreateRoutine, Routine};
pub use student::{CreateStudent, Student, StudentChanges, StudentFilter, UpdateStudent};
