use serde::Serialize;

use super::{Method, MessageOptions, Request};
use crate::{
    bot::Bot,
    domain::ChatId,
    errors::Error,
    types::{LabeledPrice, Message, ShippingOption},
    Result,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendInvoice {
    pub chat_id: ChatId,
    pub title: String,
    pub description: String,
    /// Bot-defined payload, not shown to the user.
    pub payload: String,
    pub provider_token: String,
    pub start_parameter: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub photo_url: Option<String>,
    pub photo_size: Option<u32>,
    pub photo_width: Option<u32>,
    pub photo_height: Option<u32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    /// Final price depends on the shipping method.
    pub is_flexible: Option<bool>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendInvoice {
    type Output = Message;
    const NAME: &'static str = "sendInvoice";
}

setters!(SendInvoice {
    photo_url: String,
    photo_size: u32,
    photo_width: u32,
    photo_height: u32,
    need_name: bool,
    need_phone_number: bool,
    need_email: bool,
    need_shipping_address: bool,
    is_flexible: bool,
});
message_options!(SendInvoice);

/// Invoice fields of [`Bot::send_invoice`] other than the chat.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceDetails {
    pub title: String,
    pub description: String,
    pub payload: String,
    pub provider_token: String,
    pub start_parameter: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
}

/// Reply to a flexible invoice's shipping query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerShippingQuery {
    pub shipping_query_id: String,
    pub ok: bool,
    pub shipping_options: Option<Vec<ShippingOption>>,
    pub error_message: Option<String>,
}

impl Method for AnswerShippingQuery {
    type Output = bool;
    const NAME: &'static str = "answerShippingQuery";

    fn validate(&self) -> Result<()> {
        let has_options = self.shipping_options.is_some();
        let has_error = self.error_message.is_some();
        if self.ok && (!has_options || has_error) {
            return Err(Error::precondition(
                "'shipping_options' must be provided and 'error_message' must be absent if 'ok' is true",
            ));
        }
        if !self.ok && (has_options || !has_error) {
            return Err(Error::precondition(
                "'error_message' must be provided and 'shipping_options' must be absent if 'ok' is false",
            ));
        }
        Ok(())
    }
}

setters!(AnswerShippingQuery {
    shipping_options: Vec<ShippingOption>,
    error_message: String,
});

/// Must be answered within 10 seconds of the query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: String,
    pub ok: bool,
    pub error_message: Option<String>,
}

impl Method for AnswerPreCheckoutQuery {
    type Output = bool;
    const NAME: &'static str = "answerPreCheckoutQuery";

    fn validate(&self) -> Result<()> {
        if self.ok == self.error_message.is_some() {
            return Err(Error::precondition(
                "'error_message' must be absent if 'ok' is true and provided if 'ok' is false",
            ));
        }
        Ok(())
    }
}

setters!(AnswerPreCheckoutQuery {
    error_message: String,
});

impl Bot {
    pub fn send_invoice(
        &self,
        chat_id: impl Into<ChatId>,
        invoice: InvoiceDetails,
    ) -> Request<'_, SendInvoice> {
        let InvoiceDetails {
            title,
            description,
            payload,
            provider_token,
            start_parameter,
            currency,
            prices,
        } = invoice;
        Request::new(
            self,
            SendInvoice {
                chat_id: chat_id.into(),
                title,
                description,
                payload,
                provider_token,
                start_parameter,
                currency,
                prices,
                photo_url: None,
                photo_size: None,
                photo_width: None,
                photo_height: None,
                need_name: None,
                need_phone_number: None,
                need_email: None,
                need_shipping_address: None,
                is_flexible: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn answer_shipping_query(
        &self,
        shipping_query_id: impl Into<String>,
        ok: bool,
    ) -> Request<'_, AnswerShippingQuery> {
        Request::new(
            self,
            AnswerShippingQuery {
                shipping_query_id: shipping_query_id.into(),
                ok,
                shipping_options: None,
                error_message: None,
            },
        )
    }

    pub fn answer_pre_checkout_query(
        &self,
        pre_checkout_query_id: impl Into<String>,
        ok: bool,
    ) -> Request<'_, AnswerPreCheckoutQuery> {
        Request::new(
            self,
            AnswerPreCheckoutQuery {
                pre_checkout_query_id: pre_checkout_query_id.into(),
                ok,
                error_message: None,
            },
        )
    }
}
