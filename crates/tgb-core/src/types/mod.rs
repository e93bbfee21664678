//! Data-transfer objects of the Bot API.
//!
//! Objects the server sends are `Deserialize` and ignore unknown fields;
//! objects the client sends are `Serialize` and skip unset optional fields.

mod chat;
mod game;
mod inline;
mod markup;
mod media;
mod message;
mod passport;
mod payments;
mod update;
mod user;

pub use chat::{Chat, ChatAction, ChatMember, ChatMemberStatus, ChatPhoto, ChatType};
pub use game::{CallbackGame, Game, GameHighScore};
pub use inline::{
    InlineQueryResult, InlineQueryResultArticle, InlineQueryResultAudio,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGame,
    InlineQueryResultGif, InlineQueryResultLocation, InlineQueryResultMpeg4Gif,
    InlineQueryResultPhoto, InlineQueryResultVenue, InlineQueryResultVideo,
    InlineQueryResultVoice, InputContactMessageContent, InputLocationMessageContent,
    InputMessageContent, InputTextMessageContent, InputVenueMessageContent,
};
pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use media::{
    Animation, Audio, Contact, Document, File, Location, MaskPosition, PhotoSize, Sticker, Venue,
    Video, VideoNote, Voice,
};
pub use message::{EditedMessage, Message, MessageEntity, MessageEntityKind, ParseMode};
pub use passport::PassportElementError;
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use update::{CallbackQuery, ChosenInlineResult, InlineQuery, Update, UpdateKind, WebhookInfo};
pub use user::{User, UserProfilePhotos};
