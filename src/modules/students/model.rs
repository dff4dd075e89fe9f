//! Student domain models, DTOs and view projections.
//!
//! The student record carries three audiences' worth of fields. Rather than
//! serializing the full record and stripping fields afterwards, each audience
//! gets an explicit allow-list struct ([`StudentSelfView`],
//! [`StudentMainView`], [`StudentSecondaryView`]) built by `From<Student>`,
//! so a field added to the record later never leaks into a projection it was
//! not deliberately placed in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "marital_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "residence", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Residence {
    Inside,
    Outside,
}

/// The student record as persisted, minus the password hash.
///
/// This struct is never serialized to a caller; responses go through one of
/// the view projections below.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub serial_number: i64,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: String,
    pub country: String,
    pub living_place: String,
    pub living_city: String,
    pub arabic_first_name: String,
    pub arabic_second_name: String,
    pub arabic_third_name: String,
    pub arabic_last_name: String,
    pub marital_status: MaritalStatus,
    pub national_number: Option<String>,
    pub phone_number: Option<i64>,
    pub credit_number: Option<i64>,
    pub residence: Residence,
    pub family_book_number: Option<String>,
    pub family_paper_number: Option<String>,
    pub family_serial_number: Option<String>,
    pub section: String,
    pub division: String,
    pub closest_family: String,
    pub mother_name: String,
    pub mothers_job: String,
    pub other_to_call: String,
    pub phone_number_email: String,
    pub supervisor_id: Option<Uuid>,
    pub current_semester_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-Self projection: everything except the password hash and the
/// authorization flags. Served to the owning student and to staff listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentSelfView {
    pub serial_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: String,
    pub country: String,
    pub living_place: String,
    pub living_city: String,
    pub arabic_first_name: String,
    pub arabic_second_name: String,
    pub arabic_third_name: String,
    pub arabic_last_name: String,
    pub marital_status: MaritalStatus,
    pub national_number: Option<String>,
    pub phone_number: Option<i64>,
    pub credit_number: Option<i64>,
    pub residence: Residence,
    pub family_book_number: Option<String>,
    pub family_paper_number: Option<String>,
    pub family_serial_number: Option<String>,
    pub section: String,
    pub division: String,
    pub closest_family: String,
    pub mother_name: String,
    pub mothers_job: String,
    pub other_to_call: String,
    pub phone_number_email: String,
    pub supervisor_id: Option<Uuid>,
    pub current_semester_id: Option<Uuid>,
}

impl From<Student> for StudentSelfView {
    fn from(s: Student) -> Self {
        Self {
            serial_number: s.serial_number,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            gender: s.gender,
            date_of_birth: s.date_of_birth,
            place_of_birth: s.place_of_birth,
            country: s.country,
            living_place: s.living_place,
            living_city: s.living_city,
            arabic_first_name: s.arabic_first_name,
            arabic_second_name: s.arabic_second_name,
            arabic_third_name: s.arabic_third_name,
            arabic_last_name: s.arabic_last_name,
            marital_status: s.marital_status,
            national_number: s.national_number,
            phone_number: s.phone_number,
            credit_number: s.credit_number,
            residence: s.residence,
            family_book_number: s.family_book_number,
            family_paper_number: s.family_paper_number,
            family_serial_number: s.family_serial_number,
            section: s.section,
            division: s.division,
            closest_family: s.closest_family,
            mother_name: s.mother_name,
            mothers_job: s.mothers_job,
            other_to_call: s.other_to_call,
            phone_number_email: s.phone_number_email,
            supervisor_id: s.supervisor_id,
            current_semester_id: s.current_semester_id,
        }
    }
}

/// Public-Main projection: the identity slice of a student.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentMainView {
    pub serial_number: i64,
    pub first_name: String,
    pub last_name: String,
    pub arabic_first_name: String,
    pub arabic_second_name: String,
    pub arabic_third_name: String,
    pub arabic_last_name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: String,
    pub country: String,
    pub living_place: String,
    pub living_city: String,
}

impl From<Student> for StudentMainView {
    fn from(s: Student) -> Self {
        Self {
            serial_number: s.serial_number,
            first_name: s.first_name,
            last_name: s.last_name,
            arabic_first_name: s.arabic_first_name,
            arabic_second_name: s.arabic_second_name,
            arabic_third_name: s.arabic_third_name,
            arabic_last_name: s.arabic_last_name,
            email: s.email,
            gender: s.gender,
            date_of_birth: s.date_of_birth,
            place_of_birth: s.place_of_birth,
            country: s.country,
            living_place: s.living_place,
            living_city: s.living_city,
        }
    }
}

/// Public-Secondary projection: the administrative/demographic complement of
/// [`StudentMainView`]. The two share no fields.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentSecondaryView {
    pub marital_status: MaritalStatus,
    pub national_number: Option<String>,
    pub phone_number: Option<i64>,
    pub credit_number: Option<i64>,
    pub residence: Residence,
    pub family_book_number: Option<String>,
    pub family_paper_number: Option<String>,
    pub family_serial_number: Option<String>,
    pub section: String,
    pub division: String,
    pub closest_family: String,
    pub mother_name: String,
    pub mothers_job: String,
    pub other_to_call: String,
    pub phone_number_email: String,
    pub supervisor_id: Option<Uuid>,
    pub current_semester_id: Option<Uuid>,
}

impl From<Student> for StudentSecondaryView {
    fn from(s: Student) -> Self {
        Self {
            marital_status: s.marital_status,
            national_number: s.national_number,
            phone_number: s.phone_number,
            credit_number: s.credit_number,
            residence: s.residence,
            family_book_number: s.family_book_number,
            family_paper_number: s.family_paper_number,
            family_serial_number: s.family_serial_number,
            section: s.section,
            division: s.division,
            closest_family: s.closest_family,
            mother_name: s.mother_name,
            mothers_job: s.mothers_job,
            other_to_call: s.other_to_call,
            phone_number_email: s.phone_number_email,
            supervisor_id: s.supervisor_id,
            current_semester_id: s.current_semester_id,
        }
    }
}

/// DTO for creating a student, used both by self-registration and by the
/// staff create endpoint. The serial number is fixed at creation and cannot
/// be changed afterwards.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(range(min = 1))]
    pub serial_number: i64,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub place_of_birth: String,
    #[validate(length(max = 20))]
    pub country: String,
    #[validate(length(max = 20))]
    pub living_place: String,
    #[validate(length(max = 20))]
    pub living_city: String,
    #[validate(length(max = 30))]
    pub arabic_first_name: String,
    #[validate(length(max = 30))]
    pub arabic_second_name: String,
    #[validate(length(max = 30))]
    pub arabic_third_name: String,
    #[validate(length(max = 30))]
    pub arabic_last_name: String,
    pub marital_status: MaritalStatus,
    #[validate(length(max = 15))]
    pub national_number: Option<String>,
    pub phone_number: Option<i64>,
    pub credit_number: Option<i64>,
    pub residence: Residence,
    #[validate(length(max = 15))]
    pub family_book_number: Option<String>,
    #[validate(length(max = 15))]
    pub family_paper_number: Option<String>,
    #[validate(length(max = 15))]
    pub family_serial_number: Option<String>,
    #[validate(length(max = 20))]
    pub section: String,
    #[validate(length(max = 20))]
    pub division: String,
    #[validate(length(max = 30))]
    pub closest_family: String,
    #[validate(length(max = 30))]
    pub mother_name: String,
    #[validate(length(max = 30))]
    pub mothers_job: String,
    #[validate(length(max = 30))]
    pub other_to_call: String,
    #[validate(length(max = 30))]
    pub phone_number_email: String,
    pub supervisor_id: Option<Uuid>,
    pub current_semester_id: Option<Uuid>,
}

/// DTO for a student updating their own profile. Only provided fields are
/// changed; the serial number is not updatable.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 8))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub place_of_birth: Option<String>,
    #[validate(length(max = 20))]
    pub country: Option<String>,
    #[validate(length(max = 20))]
    pub living_place: Option<String>,
    #[validate(length(max = 20))]
    pub living_city: Option<String>,
    #[validate(length(max = 30))]
    pub arabic_first_name: Option<String>,
    #[validate(length(max = 30))]
    pub arabic_second_name: Option<String>,
    #[validate(length(max = 30))]
    pub arabic_third_name: Option<String>,
    #[validate(length(max = 30))]
    pub arabic_last_name: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    #[validate(length(max = 15))]
    pub national_number: Option<String>,
    pub phone_number: Option<i64>,
    pub credit_number: Option<i64>,
    pub residence: Option<Residence>,
    #[validate(length(max = 15))]
    pub family_book_number: Option<String>,
    #[validate(length(max = 15))]
    pub family_paper_number: Option<String>,
    #[validate(length(max = 15))]
    pub family_serial_number: Option<String>,
    #[validate(length(max = 20))]
    pub section: Option<String>,
    #[validate(length(max = 20))]
    pub division: Option<String>,
    #[validate(length(max = 30))]
    pub closest_family: Option<String>,
    #[validate(length(max = 30))]
    pub mother_name: Option<String>,
    #[validate(length(max = 30))]
    pub mothers_job: Option<String>,
    #[validate(length(max = 30))]
    pub other_to_call: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number_email: Option<String>,
    pub supervisor_id: Option<Uuid>,
    pub current_semester_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_student() -> Student {
        Student {
            serial_number: 1001,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            first_name: "Omar".to_string(),
            last_name: "Haddad".to_string(),
            email: "omar@example.com".to_string(),
            gender: Gender::Male,
            date_of_birth: None,
            place_of_birth: "Tripoli".to_string(),
            country: "Libya".to_string(),
            living_place: "Downtown".to_string(),
            living_city: "Tripoli".to_string(),
            arabic_first_name: "عمر".to_string(),
            arabic_second_name: "خالد".to_string(),
            arabic_third_name: "محمد".to_string(),
            arabic_last_name: "الحداد".to_string(),
            marital_status: MaritalStatus::Single,
            national_number: Some("1234567".to_string()),
            phone_number: Some(918765432),
            credit_number: None,
            residence: Residence::Inside,
            family_book_number: Some("77".to_string()),
            family_paper_number: None,
            family_serial_number: None,
            section: "A".to_string(),
            division: "Computing".to_string(),
            closest_family: "Khaled Haddad".to_string(),
            mother_name: "Huda".to_string(),
            mothers_job: "Teacher".to_string(),
            other_to_call: "Ali".to_string(),
            phone_number_email: "omar.alt@example.com".to_string(),
            supervisor_id: Some(Uuid::new_v4()),
            current_semester_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn json_keys<T: serde::Serialize>(value: &T) -> HashSet<String> {
        serde_json::to_value(value)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_main_and_secondary_are_disjoint() {
        let student = sample_student();
        let main = json_keys(&StudentMainView::from(student.clone()));
        let secondary = json_keys(&StudentSecondaryView::from(student));

        let overlap: Vec<_> = main.intersection(&secondary).collect();
        assert!(overlap.is_empty(), "shared fields: {:?}", overlap);
    }

    #[test]
    fn test_main_and_secondary_partition_the_self_view() {
        let student = sample_student();
        let full = json_keys(&StudentSelfView::from(student.clone()));
        let main = json_keys(&StudentMainView::from(student.clone()));
        let secondary = json_keys(&StudentSecondaryView::from(student));

        let union: HashSet<_> = main.union(&secondary).cloned().collect();
        assert_eq!(union, full);
    }

    #[test]
    fn test_supervisor_only_in_secondary() {
        let student = sample_student();
        let main = json_keys(&StudentMainView::from(student.clone()));
        let secondary = json_keys(&StudentSecondaryView::from(student));

        assert!(!main.contains("supervisor_id"));
        assert!(secondary.contains("supervisor_id"));
    }

    #[test]
    fn test_no_view_exposes_credentials_or_flags() {
        let student = sample_student();
        let views = [
            json_keys(&StudentSelfView::from(student.clone())),
            json_keys(&StudentMainView::from(student.clone())),
            json_keys(&StudentSecondaryView::from(student)),
        ];

        for keys in &views {
            for hidden in ["password", "is_active", "is_staff", "is_superuser"] {
                assert!(!keys.contains(hidden), "view leaks {}", hidden);
            }
        }
    }
}
