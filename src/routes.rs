use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::DbPool;
use crate::handlers::{classes, enrollments, exercises, health, progress, routines, students};
use crate::repositories::{
    ClassRepository, EnrollmentRepository, ExerciseRepository, ProgressRepository,
    RoutineRepository, StudentRepository,
};

pub fn create_router(
    health_state: health::HealthState,
    students_state: students::StudentsState,
    classes_state: classes::ClassesState,
    enrollments_state: enrollments::EnrollmentsState,
    exercises_state: exercises::ExercisesState,
    progress_state: progress::ProgressState,
    routines_state: routines::RoutinesState,
) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // Students
        .route("/api/alunos", get(students::list))
        .route("/api/alunos/add", post(students::create))
        .route("/api/alunos/filtros", post(students::filter))
        .route(
            "/api/alunos/{id}",
            get(students::show).put(students::update),
        )
        .route("/api/alunos/inativar/{id}", patch(students::deactivate))
        .route("/api/alunos/ativar/{id}", patch(students::activate))
        .with_state(students_state)
        // Classes
        .route("/api/aulas", get(classes::list))
        .route("/api/aulas/add", post(classes::create))
        .route("/api/aulas/{id}", get(classes::show))
        .with_state(classes_state)
        // Enrollments
        .route("/api/aluno_aula/add", post(enrollments::create))
        .route("/api/aluno_aula/{id}", get(enrollments::show))
        .with_state(enrollments_state)
        // Exercises
        .route("/api/exercicios", get(exercises::list))
        .route("/api/exercicios/add", post(exercises::create))
        .route("/api/exercicios/{id}", get(exercises::show))
        .with_state(exercises_state)
        // Progress
        .route("/api/progresso_aluno/add", post(progress::create))
        .route("/api/progresso_aluno/{id}", get(progress::show))
        .route(
            "/api/progresso_aluno/aluno/{id}",
            get(progress::list_by_student),
        )
        .with_state(progress_state)
        // Routines
        .route("/api/rotinas/add", post(routines::create))
        .route("/api/rotinas/{id}", get(routines::show))
        .route("/api/rotinas/aula/{id}", get(routines::list_by_class))
        .with_state(routines_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Wires every repository and handler state onto one pool.
pub fn app(pool: DbPool) -> Router {
    let student_repo = StudentRepository::new(pool.clone());
    let class_repo = ClassRepository::new(pool.clone());

    create_router(
        health::HealthState { pool: pool.clone() },
        students::StudentsState {
            student_repo: student_repo.clone(),
        },
        classes::ClassesState {
            class_repo: class_repo.clone(),
        },
        enrollments::EnrollmentsState {
            enrollment_repo: EnrollmentRepository::new(pool.clone()),
        },
        exercises::ExercisesState {
            exercise_repo: ExerciseRepository::new(pool.clone()),
        },
        progress::ProgressState {
            progress_repo: ProgressRepository::new(pool.clone()),
            student_repo,
        },
        routines::RoutinesState {
            routine_repo: RoutineRepository::new(pool),
            class_repo,
        },
    )
}
