use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Description).text().null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Teachers::LastName).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string_len(17).not_null())
                    .col(ColumnDef::new(Teachers::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Teachers::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Teachers::HireDate).date().not_null())
                    .col(ColumnDef::new(Teachers::Address).text().not_null())
                    .col(ColumnDef::new(Teachers::Salary).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Teachers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Students::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string_len(17).null())
                    .col(ColumnDef::new(Students::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Students::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Students::Grade).string_len(2).not_null())
                    .col(ColumnDef::new(Students::EnrollmentDate).date().not_null())
                    .col(ColumnDef::new(Students::Address).text().not_null())
                    .col(
                        ColumnDef::new(Students::ParentName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::ParentPhone)
                            .string_len(17)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Grade).decimal_len(5, 2).not_null())
                    .col(
                        ColumnDef::new(Grades::MaxGrade)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(100),
                    )
                    .col(ColumnDef::new(Grades::ExamDate).date().not_null())
                    .col(ColumnDef::new(Grades::Notes).text().null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学生同一科目同一考试日期只允许一条成绩
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_student_subject_exam_date")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::SubjectId)
                    .col(Grades::ExamDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 学生表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_grade_name")
                    .table(Students::Table)
                    .col(Students::Grade)
                    .col(Students::FirstName)
                    .col(Students::LastName)
                    .to_owned(),
            )
            .await?;

        // 成绩表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_exam_date")
                    .table(Grades::Table)
                    .col(Grades::ExamDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_subject_id")
                    .table(Grades::Table)
                    .col(Grades::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_teacher_id")
                    .table(Grades::Table)
                    .col(Grades::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Code,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    DateOfBirth,
    HireDate,
    Address,
    Salary,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    StudentId,
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    DateOfBirth,
    Grade,
    EnrollmentDate,
    Address,
    ParentName,
    ParentPhone,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    SubjectId,
    TeacherId,
    Grade,
    MaxGrade,
    ExamDate,
    Notes,
    CreatedAt,
}
