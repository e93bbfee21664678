use serde::Serialize;

use super::{Method, Request};
use crate::{bot::Bot, domain::UserId, types::PassportElementError};

/// Report errors in a user's Passport data; the user must fix them before
/// resubmitting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetPassportDataErrors {
    pub user_id: UserId,
    pub errors: Vec<PassportElementError>,
}

impl Method for SetPassportDataErrors {
    type Output = bool;
    const NAME: &'static str = "setPassportDataErrors";
}

impl Bot {
    pub fn set_passport_data_errors(
        &self,
        user_id: impl Into<UserId>,
        errors: Vec<PassportElementError>,
    ) -> Request<'_, SetPassportDataErrors> {
        Request::new(
            self,
            SetPassportDataErrors {
                user_id: user_id.into(),
                errors,
            },
        )
    }
}
