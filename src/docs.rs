use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, MessageResponse};
use crate::modules::courses::model::{Course, CourseWithStudents, CreateCourseDto};
use crate::modules::enrollments::model::{CreateEnrollmentDto, Enrollment};
use crate::modules::lectures::model::{
    CreateLectureDto, CreateLectureTimeDto, DayOfWeek, Lecture, LectureSlot, LectureTime,
};
use crate::modules::posts::model::{CreatePostDto, Post};
use crate::modules::results::model::{CourseResult, CreateResultDto, UpdateResultDto};
use crate::modules::semester_results::model::{CreateSemesterResultDto, SemesterResult};
use crate::modules::semesters::model::{CreateSemesterDto, Season, Semester, SemesterWithStudents};
use crate::modules::students::model::{
    CreateStudentDto, Gender, MaritalStatus, Residence, StudentMainView, StudentSecondaryView,
    StudentSelfView, UpdateProfileDto,
};
use crate::modules::teachers::model::{CreateTeacherDto, Teacher};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::logout_all,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students_main,
        crate::modules::students::controller::get_students_secondary,
        crate::modules::students::controller::get_me,
        crate::modules::students::controller::update_me,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::lectures::controller::get_lectures,
        crate::modules::lectures::controller::create_lecture,
        crate::modules::lectures::controller::delete_lecture,
        crate::modules::lectures::controller::get_lecture_times,
        crate::modules::lectures::controller::create_lecture_time,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::create_enrollment,
        crate::modules::enrollments::controller::delete_enrollment,
        crate::modules::semesters::controller::get_semesters,
        crate::modules::semesters::controller::create_semester,
        crate::modules::results::controller::get_results,
        crate::modules::results::controller::create_result,
        crate::modules::results::controller::update_result,
        crate::modules::semester_results::controller::get_semester_results,
        crate::modules::semester_results::controller::create_semester_result,
        crate::modules::posts::controller::get_posts,
        crate::modules::posts::controller::create_post,
    ),
    components(
        schemas(
            ErrorResponse,
            AuthResponse,
            LoginRequest,
            MessageResponse,
            StudentSelfView,
            StudentMainView,
            StudentSecondaryView,
            CreateStudentDto,
            UpdateProfileDto,
            Gender,
            MaritalStatus,
            Residence,
            Teacher,
            CreateTeacherDto,
            Course,
            CourseWithStudents,
            CreateCourseDto,
            Lecture,
            CreateLectureDto,
            LectureTime,
            CreateLectureTimeDto,
            LectureSlot,
            DayOfWeek,
            Enrollment,
            CreateEnrollmentDto,
            Semester,
            SemesterWithStudents,
            CreateSemesterDto,
            Season,
            CourseResult,
            CreateResultDto,
            UpdateResultDto,
            SemesterResult,
            CreateSemesterResultDto,
            Post,
            CreatePostDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token revocation"),
        (name = "Students", description = "Student listings, projections and own profile"),
        (name = "Teachers", description = "Teacher record administration"),
        (name = "Courses", description = "Course catalog"),
        (name = "Lectures", description = "Lecture schedule and time slots"),
        (name = "Enrollments", description = "Course enrollment"),
        (name = "Semesters", description = "Semester catalog"),
        (name = "Results", description = "Academic results and semester aggregates"),
        (name = "Posts", description = "Announcements")
    ),
    info(
        title = "Registrar API",
        version = "0.1.0",
        description = "Student-records administration API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
