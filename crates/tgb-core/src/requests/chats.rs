//! Chat administration and chat lookups.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Method, Request};
use crate::{
    bot::Bot,
    domain::{ChatId, MessageId, UserId},
    input_file::InputFile,
    types::{Chat, ChatMember},
};

/// Ban a user. Bans shorter than 30 seconds or longer than 366 days are
/// permanent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: UserId,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub until_date: Option<DateTime<Utc>>,
}

impl Method for KickChatMember {
    type Output = bool;
    const NAME: &'static str = "kickChatMember";
}

setters!(KickChatMember {
    until_date: DateTime<Utc>,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: UserId,
}

impl Method for UnbanChatMember {
    type Output = bool;
    const NAME: &'static str = "unbanChatMember";
}

/// Supergroups only. Pass `true` for every permission to lift restrictions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: UserId,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub until_date: Option<DateTime<Utc>>,
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
}

impl Method for RestrictChatMember {
    type Output = bool;
    const NAME: &'static str = "restrictChatMember";
}

setters!(RestrictChatMember {
    until_date: DateTime<Utc>,
    can_send_messages: bool,
    can_send_media_messages: bool,
    can_send_other_messages: bool,
    can_add_web_page_previews: bool,
});

/// Pass `false` for every permission to demote.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub can_change_info: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_promote_members: Option<bool>,
}

impl Method for PromoteChatMember {
    type Output = bool;
    const NAME: &'static str = "promoteChatMember";
}

setters!(PromoteChatMember {
    can_change_info: bool,
    can_post_messages: bool,
    can_edit_messages: bool,
    can_delete_messages: bool,
    can_invite_users: bool,
    can_restrict_members: bool,
    can_pin_messages: bool,
    can_promote_members: bool,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl Method for ExportChatInviteLink {
    type Output = String;
    const NAME: &'static str = "exportChatInviteLink";
}

/// Photos can't be changed in private chats.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
}

impl Method for SetChatPhoto {
    type Output = bool;
    const NAME: &'static str = "setChatPhoto";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("photo", &self.photo)]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

impl Method for DeleteChatPhoto {
    type Output = bool;
    const NAME: &'static str = "deleteChatPhoto";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    pub title: String,
}

impl Method for SetChatTitle {
    type Output = bool;
    const NAME: &'static str = "setChatTitle";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    pub description: String,
}

impl Method for SetChatDescription {
    type Output = bool;
    const NAME: &'static str = "setChatDescription";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub disable_notification: Option<bool>,
}

impl Method for PinChatMessage {
    type Output = bool;
    const NAME: &'static str = "pinChatMessage";
}

setters!(PinChatMessage {
    disable_notification: bool,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
}

impl Method for UnpinChatMessage {
    type Output = bool;
    const NAME: &'static str = "unpinChatMessage";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl Method for LeaveChat {
    type Output = bool;
    const NAME: &'static str = "leaveChat";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl Method for GetChat {
    type Output = Chat;
    const NAME: &'static str = "getChat";
}

/// Administrators other than bots. Empty if only bots administer the chat.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl Method for GetChatAdministrators {
    type Output = Vec<ChatMember>;
    const NAME: &'static str = "getChatAdministrators";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: UserId,
}

impl Method for GetChatMember {
    type Output = ChatMember;
    const NAME: &'static str = "getChatMember";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: ChatId,
}

impl Method for GetChatMembersCount {
    type Output = i64;
    const NAME: &'static str = "getChatMembersCount";
}

impl Bot {
    pub fn kick_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: impl Into<UserId>,
    ) -> Request<'_, KickChatMember> {
        Request::new(
            self,
            KickChatMember {
                chat_id: chat_id.into(),
                user_id: user_id.into(),
                until_date: None,
            },
        )
    }

    pub fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: impl Into<UserId>,
    ) -> Request<'_, UnbanChatMember> {
        Request::new(
            self,
            UnbanChatMember {
                chat_id: chat_id.into(),
                user_id: user_id.into(),
            },
        )
    }

    pub fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: impl Into<UserId>,
    ) -> Request<'_, RestrictChatMember> {
        Request::new(
            self,
            RestrictChatMember {
                chat_id: chat_id.into(),
                user_id: user_id.into(),
                until_date: None,
                can_send_messages: None,
                can_send_media_messages: None,
                can_send_other_messages: None,
                can_add_web_page_previews: None,
            },
        )
    }

    pub fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: impl Into<UserId>,
    ) -> Request<'_, PromoteChatMember> {
        Request::new(
            self,
            PromoteChatMember {
                chat_id: chat_id.into(),
                user_id: user_id.into(),
                can_change_info: None,
                can_post_messages: None,
                can_edit_messages: None,
                can_delete_messages: None,
                can_invite_users: None,
                can_restrict_members: None,
                can_pin_messages: None,
                can_promote_members: None,
            },
        )
    }

    pub fn export_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Request<'_, ExportChatInviteLink> {
        Request::new(
            self,
            ExportChatInviteLink {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn set_chat_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<InputFile>,
    ) -> Request<'_, SetChatPhoto> {
        Request::new(
            self,
            SetChatPhoto {
                chat_id: chat_id.into(),
                photo: photo.into(),
            },
        )
    }

    pub fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> Request<'_, DeleteChatPhoto> {
        Request::new(
            self,
            DeleteChatPhoto {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn set_chat_title(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
    ) -> Request<'_, SetChatTitle> {
        Request::new(
            self,
            SetChatTitle {
                chat_id: chat_id.into(),
                title: title.into(),
            },
        )
    }

    pub fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: impl Into<String>,
    ) -> Request<'_, SetChatDescription> {
        Request::new(
            self,
            SetChatDescription {
                chat_id: chat_id.into(),
                description: description.into(),
            },
        )
    }

    pub fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: impl Into<MessageId>,
    ) -> Request<'_, PinChatMessage> {
        Request::new(
            self,
            PinChatMessage {
                chat_id: chat_id.into(),
                message_id: message_id.into(),
                disable_notification: None,
            },
        )
    }

    pub fn unpin_chat_message(&self, chat_id: impl Into<ChatId>) -> Request<'_, UnpinChatMessage> {
        Request::new(
            self,
            UnpinChatMessage {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Request<'_, LeaveChat> {
        Request::new(
            self,
            LeaveChat {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn get_chat(&self, chat_id: impl Into<ChatId>) -> Request<'_, GetChat> {
        Request::new(
            self,
            GetChat {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Request<'_, GetChatAdministrators> {
        Request::new(
            self,
            GetChatAdministrators {
                chat_id: chat_id.into(),
            },
        )
    }

    pub fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: impl Into<UserId>,
    ) -> Request<'_, GetChatMember> {
        Request::new(
            self,
            GetChatMember {
                chat_id: chat_id.into(),
                user_id: user_id.into(),
            },
        )
    }

    pub fn get_chat_members_count(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Request<'_, GetChatMembersCount> {
        Request::new(
            self,
            GetChatMembersCount {
                chat_id: chat_id.into(),
            },
        )
    }
}
