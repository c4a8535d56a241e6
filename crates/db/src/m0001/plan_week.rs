use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::PlanWeek;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PlanWeek::Table)
        .col(
            ColumnDef::new(PlanWeek::WeekId)
                .string()
                .not_null()
                .string_len(16)
                .primary_key(),
        )
        .col(ColumnDef::new(PlanWeek::NumSlots).integer().not_null())
        .col(ColumnDef::new(PlanWeek::Slots).blob().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PlanWeek::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
