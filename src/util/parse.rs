use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a string column.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - The stored string value
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed snowflake
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub fn parse_snowflake(field: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
