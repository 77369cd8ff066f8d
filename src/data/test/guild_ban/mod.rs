use crate::{
    data::guild_ban::GuildBanRepository,
    model::live::{LiveBan, LiveUser},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};


fn live_ban(user_id: u64, reason: Option<&str>) -> LiveBan {
    LiveBan {
        user: LiveUser {
            id: user_id,
            username: format!("banned_{}", user_id),
            avatar: None,
            bot: false,
        },
        reason: reason.map(str::to_string),
    }
}
