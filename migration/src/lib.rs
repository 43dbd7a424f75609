pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_opt_out_table;
mod m20260301_000002_create_reply_cooldown_table;
mod m20260301_000003_create_channel_counter_table;
mod m20260302_000004_create_reply_channel_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_opt_out_table::Migration),
            Box::new(m20260301_000002_create_reply_cooldown_table::Migration),
            Box::new(m20260301_000003_create_channel_counter_table::Migration),
            Box::new(m20260302_000004_create_reply_channel_table::Migration),
        ]
    }
}
