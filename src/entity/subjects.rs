//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
    #[sea_orm(has_many = "super::teacher_subjects::Entity")]
    TeacherSubjects,
    #[sea_orm(has_many = "super::student_subjects::Entity")]
    StudentSubjects,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

// 通过关联表访问任课教师
impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_subjects::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_subjects::Relation::Subject.def().rev())
    }
}

// 通过关联表访问选课学生
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_subjects::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_subjects::Relation::Subject.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::subjects::entities::Subject;
        use chrono::{DateTime, Utc};

        Subject {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
