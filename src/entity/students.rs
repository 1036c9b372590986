//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: String,
    pub date_of_birth: Date,
    pub grade: String,
    pub enrollment_date: Date,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
    #[sea_orm(has_many = "super::student_subjects::Entity")]
    StudentSubjects,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_subjects::Relation::Subject.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_subjects::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::common::{Gender, GradeLevel};
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            full_name: format!("{} {}", self.first_name, self.last_name),
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.filter(|e| !e.is_empty()),
            phone: self.phone.filter(|p| !p.is_empty()),
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Male),
            date_of_birth: self.date_of_birth,
            grade: self.grade.parse::<GradeLevel>().unwrap_or(GradeLevel::First),
            enrollment_date: self.enrollment_date,
            address: self.address,
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
