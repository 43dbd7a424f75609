//! Database repository layer.
//!
//! One repository per table. Repositories use SeaORM entity models internally and
//! return domain models, converting at the boundary. Every method returns
//! `Result<_, DbErr>`; callers decide whether a storage failure is fatal.

pub mod channel_counter;
pub mod opt_out;
pub mod reply_channel;
pub mod reply_cooldown;

#[cfg(test)]
mod test;
