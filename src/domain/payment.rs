use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::StoreError;

/// Records the API accepts implement this before being handed to a store.
pub trait Validate {
	fn validate(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentParty {
	pub account_name:        String,
	pub account_number:      String,
	pub account_number_code: String,
	pub bank_id:             String,
	pub bank_id_code:        String,
	pub name:                String,
	pub address:             String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderCharge {
	pub amount:   String,
	pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargesInformation {
	pub bearer_code:               String,
	pub receiver_charges_amount:   String,
	pub receiver_charges_currency: String,
	pub sender_charges:            Vec<SenderCharge>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignExchange {
	pub contract_reference: String,
	pub exchange_rate:      String,
	pub original_amount:    String,
	pub original_currency:  String,
}

/// A payment as stored and served by the API.
///
/// A nil `id` means the payment has not been stored yet; stores assign a
/// fresh one on save. `created_at` and `updated_at` are owned by the stores.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
	pub id:                      Uuid,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created_at:              Option<DateTime<Utc>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at:              Option<DateTime<Utc>>,
	pub amount:                  String,
	pub currency:                String,
	pub scheme:                  String,
	#[serde(rename = "type")]
	pub payment_type:            String,
	pub purpose:                 String,
	pub beneficiary:             PaymentParty,
	pub debitor_party:           PaymentParty,
	pub end_to_end_reference:    String,
	pub numeric_reference:       String,
	pub processing_date:         String,
	pub reference:               String,
	pub scheme_payment_type:     String,
	pub scheme_payment_sub_type: String,
	pub charges_information:     ChargesInformation,
	pub fx:                      ForeignExchange,
}

impl Payment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(mut self, id: Uuid) -> Self {
		self.id = id;
		self
	}

	pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = scheme.into();
		self
	}

	pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
		self.amount = amount.into();
		self
	}

	pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = currency.into();
		self
	}

	pub fn has_id(&self) -> bool {
		!self.id.is_nil()
	}
}

impl Validate for Payment {
	// Payload rules live with the caller; the stores accept any payment.
	fn validate(&self) -> Result<(), StoreError> {
		Ok(())
	}
}
