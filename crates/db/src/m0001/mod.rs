mod plan_week;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "veckoplan",
    "m0001",
    vec_box![],
    vec_box![plan_week::CreateTable]
);
