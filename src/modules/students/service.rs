use sqlx::PgPool;
use tracing::instrument;

use crate::modules::students::model::{CreateStudentDto, Student, UpdateProfileDto};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

const STUDENT_COLUMNS: &str = "serial_number, is_active, is_staff, is_superuser, first_name, \
     last_name, email, gender, date_of_birth, place_of_birth, country, living_place, \
     living_city, arabic_first_name, arabic_second_name, arabic_third_name, arabic_last_name, \
     marital_status, national_number, phone_number, credit_number, residence, \
     family_book_number, family_paper_number, family_serial_number, section, division, \
     closest_family, mother_name, mothers_job, other_to_call, phone_number_email, \
     supervisor_id, current_semester_id, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    /// Create a student record. The serial number is checked up front for a
    /// friendlier error, but the primary key is what actually guarantees
    /// uniqueness under concurrent registration.
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students WHERE serial_number = $1)",
        )
        .bind(dto.serial_number)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if exists {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Serial number already exists"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let query = format!(
            "INSERT INTO students (serial_number, password, first_name, last_name, email, \
             gender, date_of_birth, place_of_birth, country, living_place, living_city, \
             arabic_first_name, arabic_second_name, arabic_third_name, arabic_last_name, \
             marital_status, national_number, phone_number, credit_number, residence, \
             family_book_number, family_paper_number, family_serial_number, section, division, \
             closest_family, mother_name, mothers_job, other_to_call, phone_number_email, \
             supervisor_id, current_semester_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32) \
             RETURNING {STUDENT_COLUMNS}"
        );

        let student = sqlx::query_as::<_, Student>(&query)
            .bind(dto.serial_number)
            .bind(&hashed_password)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(dto.gender)
            .bind(dto.date_of_birth)
            .bind(&dto.place_of_birth)
            .bind(&dto.country)
            .bind(&dto.living_place)
            .bind(&dto.living_city)
            .bind(&dto.arabic_first_name)
            .bind(&dto.arabic_second_name)
            .bind(&dto.arabic_third_name)
            .bind(&dto.arabic_last_name)
            .bind(dto.marital_status)
            .bind(&dto.national_number)
            .bind(dto.phone_number)
            .bind(dto.credit_number)
            .bind(dto.residence)
            .bind(&dto.family_book_number)
            .bind(&dto.family_paper_number)
            .bind(&dto.family_serial_number)
            .bind(&dto.section)
            .bind(&dto.division)
            .bind(&dto.closest_family)
            .bind(&dto.mother_name)
            .bind(&dto.mothers_job)
            .bind(&dto.other_to_call)
            .bind(&dto.phone_number_email)
            .bind(dto.supervisor_id)
            .bind(dto.current_semester_id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::bad_request(anyhow::anyhow!(
                            "Serial number already exists"
                        ));
                    }
                    if db_err.is_foreign_key_violation() {
                        return AppError::bad_request(anyhow::anyhow!(
                            "Referenced supervisor or semester does not exist"
                        ));
                    }
                }
                AppError::database(anyhow::Error::from(e))
            })?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let query =
            format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY serial_number");

        let students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, serial_number: i64) -> Result<Student, AppError> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE serial_number = $1");

        let student = sqlx::query_as::<_, Student>(&query)
            .bind(serial_number)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    /// Update a student's own profile. Absent fields keep their stored
    /// values; the serial number is never part of the update.
    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        serial_number: i64,
        dto: UpdateProfileDto,
    ) -> Result<Student, AppError> {
        let hashed_password = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let query = format!(
            "UPDATE students SET \
             password = COALESCE($2, password), \
             first_name = COALESCE($3, first_name), \
             last_name = COALESCE($4, last_name), \
             email = COALESCE($5, email), \
             gender = COALESCE($6, gender), \
             date_of_birth = COALESCE($7, date_of_birth), \
             place_of_birth = COALESCE($8, place_of_birth), \
             country = COALESCE($9, country), \
             living_place = COALESCE($10, living_place), \
             living_city = COALESCE($11, living_city), \
             arabic_first_name = COALESCE($12, arabic_first_name), \
             arabic_second_name = COALESCE($13, arabic_second_name), \
             arabic_third_name = COALESCE($14, arabic_third_name), \
             arabic_last_name = COALESCE($15, arabic_last_name), \
             marital_status = COALESCE($16, marital_status), \
             national_number = COALESCE($17, national_number), \
             phone_number = COALESCE($18, phone_number), \
             credit_number = COALESCE($19, credit_number), \
             residence = COALESCE($20, residence), \
             family_book_number = COALESCE($21, family_book_number), \
             family_paper_number = COALESCE($22, family_paper_number), \
             family_serial_number = COALESCE($23, family_serial_number), \
             section = COALESCE($24, section), \
             division = COALESCE($25, division), \
             closest_family = COALESCE($26, closest_family), \
             mother_name = COALESCE($27, mother_name), \
             mothers_job = COALESCE($28, mothers_job), \
             other_to_call = COALESCE($29, other_to_call), \
             phone_number_email = COALESCE($30, phone_number_email), \
             supervisor_id = COALESCE($31, supervisor_id), \
             current_semester_id = COALESCE($32, current_semester_id), \
             updated_at = NOW() \
             WHERE serial_number = $1 \
             RETURNING {STUDENT_COLUMNS}"
        );

        let student = sqlx::query_as::<_, Student>(&query)
            .bind(serial_number)
            .bind(&hashed_password)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.email)
            .bind(dto.gender)
            .bind(dto.date_of_birth)
            .bind(&dto.place_of_birth)
            .bind(&dto.country)
            .bind(&dto.living_place)
            .bind(&dto.living_city)
            .bind(&dto.arabic_first_name)
            .bind(&dto.arabic_second_name)
            .bind(&dto.arabic_third_name)
            .bind(&dto.arabic_last_name)
            .bind(dto.marital_status)
            .bind(&dto.national_number)
            .bind(dto.phone_number)
            .bind(dto.credit_number)
            .bind(dto.residence)
            .bind(&dto.family_book_number)
            .bind(&dto.family_paper_number)
            .bind(&dto.family_serial_number)
            .bind(&dto.section)
            .bind(&dto.division)
            .bind(&dto.closest_family)
            .bind(&dto.mother_name)
            .bind(&dto.mothers_job)
            .bind(&dto.other_to_call)
            .bind(&dto.phone_number_email)
            .bind(dto.supervisor_id)
            .bind(dto.current_semester_id)
            .fetch_optional(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Referenced supervisor or semester does not exist"
                    ));
                }
                AppError::database(anyhow::Error::from(e))
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }
}
