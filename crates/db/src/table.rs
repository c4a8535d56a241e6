use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum PlanWeek {
    Table,
    WeekId,
    NumSlots,
    Slots,
}
