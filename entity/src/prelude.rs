pub use super::channel_counter::Entity as ChannelCounter;
pub use super::opt_out::Entity as OptOut;
pub use super::reply_channel::Entity as ReplyChannel;
pub use super::reply_cooldown::Entity as ReplyCooldown;
