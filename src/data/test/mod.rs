mod channel_counter;
mod opt_out;
mod reply_channel;
mod reply_cooldown;
