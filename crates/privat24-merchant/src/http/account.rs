/*
[INPUT]:  Card number and optional statement dates
[OUTPUT]: JSON form of the bank reply (balance, statement)
[POS]:    HTTP layer - card account endpoints
[UPDATE]: When adding new account endpoints or changing payload fields
*/

// ### Account Endpoints

use chrono::NaiveDate;

use crate::http::{MerchantClient, MerchantError, Result};
use crate::types::StatementPeriod;
use crate::xml::{balance_payload, statement_payload};

/// Balance inquiry endpoint path
pub const BALANCE_PATH: &str = "/balance";
/// Card statement endpoint path
pub const STATEMENT_PATH: &str = "/rest_fiz";

impl MerchantClient {
    /// Query the card balance
    ///
    /// POST /p24api/balance
    ///
    /// Falls back to the configured card when `card` is `None`.
    pub async fn balance(&self, card: Option<&str>) -> Result<String> {
        let card = self.resolve_card(card)?;
        let payload = balance_payload(card, &self.merchant().country)?;
        self.request(BALANCE_PATH, &payload).await
    }

    /// Query the card statement
    ///
    /// POST /p24api/rest_fiz
    ///
    /// Missing dates are taken from the local date when the call is made:
    /// start defaults to one month ago, end to today.
    pub async fn statement(
        &self,
        card: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<String> {
        let card = self.resolve_card(card)?;
        let period = StatementPeriod::resolve_now(start, end);
        self.statement_for(Some(card), period).await
    }

    /// Query the card statement for an already resolved period
    pub async fn statement_for(
        &self,
        card: Option<&str>,
        period: StatementPeriod,
    ) -> Result<String> {
        let card = self.resolve_card(card)?;
        let payload = statement_payload(card, &self.merchant().country, &period)?;
        self.request(STATEMENT_PATH, &payload).await
    }

    /// An explicitly passed empty card does not fall back to the default.
    fn resolve_card<'a>(&'a self, card: Option<&'a str>) -> Result<&'a str> {
        card.or(self.merchant().card.as_deref())
            .filter(|card| !card.is_empty())
            .ok_or(MerchantError::MissingCard)
    }
}
