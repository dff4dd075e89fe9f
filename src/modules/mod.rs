pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod lectures;
pub mod posts;
pub mod results;
pub mod semester_results;
pub mod semesters;
pub mod students;
pub mod teachers;
