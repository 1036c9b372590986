use sea_orm_migration::prelude::*;

use crate::m20250123_000001_create_tables::{Students, Subjects, Teachers};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 教师-科目关联表 ====================
        manager
            .create_table(
                Table::create()
                    .table(TeacherSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherSubjects::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeacherSubjects::TeacherId)
                            .col(TeacherSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherSubjects::Table, TeacherSubjects::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherSubjects::Table, TeacherSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 学生-科目关联表 ====================
        manager
            .create_table(
                Table::create()
                    .table(StudentSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSubjects::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudentSubjects::StudentId)
                            .col(StudentSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 按科目反查时使用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teacher_subjects_subject_id")
                    .table(TeacherSubjects::Table)
                    .col(TeacherSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_subjects_subject_id")
                    .table(StudentSubjects::Table)
                    .col(StudentSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentSubjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherSubjects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeacherSubjects {
    #[sea_orm(iden = "teacher_subjects")]
    Table,
    TeacherId,
    SubjectId,
}

#[derive(DeriveIden)]
enum StudentSubjects {
    #[sea_orm(iden = "student_subjects")]
    Table,
    StudentId,
    SubjectId,
}
