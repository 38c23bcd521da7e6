//! Ledger (virtual) account request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer record attached to a ledger account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer's own identifier in the calling system.
    pub external_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_country: Option<String>,
}

/// Body of a create-ledger-account call.
///
/// Every field is caller-supplied; absent optional fields are left out of the
/// JSON body so the provider applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerAccountRequest {
    /// Currency code of the account (e.g. "ALGO").
    pub currency: String,

    /// Extended public key of the wallet backing the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpub: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Whether the account is compliant with the provider's KYC rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliant: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

impl LedgerAccountRequest {
    /// Start a request for the given currency.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Default::default()
        }
    }
}

/// Ledger account as created by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct LedgerAccount {
    /// Provider-assigned account identifier.
    #[serde(rename = "id")]
    pub account_id: String,

    /// Everything else the provider returned, kept verbatim.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for LedgerAccount {
    type Error = String;

    /// `id` wins; `accountId` is only taken when `id` is absent, otherwise it
    /// stays in the metadata like any other field.
    fn try_from(mut metadata: Map<String, Value>) -> Result<Self, Self::Error> {
        let key = if metadata.contains_key("id") { "id" } else { "accountId" };
        match metadata.remove(key) {
            Some(Value::String(account_id)) => Ok(Self {
                account_id,
                metadata,
            }),
            Some(other) => Err(format!(
                "invalid type for `{}`: expected a string, got {}",
                key, other
            )),
            None => Err("missing field `id`".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_and_skips_absent_fields() {
        let request = LedgerAccountRequest {
            customer: Some(Customer {
                external_id: "123654".to_string(),
                customer_country: Some("US".to_string()),
                ..Default::default()
            }),
            account_code: Some("AC_1011_B".to_string()),
            ..LedgerAccountRequest::new("ALGO")
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["currency"], "ALGO");
        assert_eq!(body["accountCode"], "AC_1011_B");
        assert_eq!(body["customer"]["externalId"], "123654");
        assert_eq!(body["customer"]["customerCountry"], "US");
        assert!(body.get("xpub").is_none());
        assert!(body.get("compliant").is_none());
        assert!(body["customer"].get("providerCountry").is_none());
    }

    #[test]
    fn test_account_keeps_provider_metadata() {
        let account: LedgerAccount = serde_json::from_str(
            r#"{"id":"5e68c66581f2ee32bc354087","currency":"ALGO","frozen":false,
                "balance":{"accountBalance":"0"}}"#,
        )
        .unwrap();
        assert_eq!(account.account_id, "5e68c66581f2ee32bc354087");
        assert_eq!(account.metadata["currency"], "ALGO");
        assert_eq!(account.metadata["balance"]["accountBalance"], "0");
        assert!(!account.metadata.contains_key("id"));
    }

    #[test]
    fn test_account_id_alias() {
        let account: LedgerAccount =
            serde_json::from_str(r#"{"accountId":"acc-1"}"#).unwrap();
        assert_eq!(account.account_id, "acc-1");
        assert!(account.metadata.is_empty());
    }

    #[test]
    fn test_account_with_both_id_keys() {
        let account: LedgerAccount =
            serde_json::from_str(r#"{"id":"x","accountId":"y","currency":"ALGO"}"#).unwrap();
        assert_eq!(account.account_id, "x");
        assert_eq!(account.metadata["accountId"], "y");
        assert_eq!(account.metadata["currency"], "ALGO");
    }

    #[test]
    fn test_account_without_id_is_rejected() {
        let err = serde_json::from_str::<LedgerAccount>(r#"{"currency":"ALGO"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));

        let err = serde_json::from_str::<LedgerAccount>(r#"{"id":42}"#).unwrap_err();
        assert!(err.to_string().contains("expected a string"));
    }
}
