pub mod class_repo;
pub mod enrollment_repo;
pub mod exercise_repo;
pub mod progress_repo;
pub mod routine_repo;
pub mod student_repo;

pub use class_repo::ClassRepository;
pub use enrollment_repo::EnrollmentRepository;
pub use exercise_repo::ExerciseRepository;
pub use progress_repo::ProgressRepository;
pub use routine_repo::RoutineRepository;
pub use student_repo::StudentRepository;
