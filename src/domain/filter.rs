//! Declarative predicates applied while listing payments.
//!
//! A [`Filter`] names a [`PaymentField`], a wanted JSON value and a
//! [`FilterKind`]. Field lookup goes through the enum accessors, so an
//! unknown field name is rejected when the filter is built instead of
//! silently matching nothing.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::domain::errors::StoreError;
use crate::domain::payment::Payment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
	Id,
	CreatedAt,
	UpdatedAt,
	Amount,
	Currency,
	Scheme,
	Type,
	Purpose,
	Beneficiary,
	DebitorParty,
	EndToEndReference,
	NumericReference,
	ProcessingDate,
	Reference,
	SchemePaymentType,
	SchemePaymentSubType,
	ChargesInformation,
	Fx,
}

impl PaymentField {
	pub const ALL: [PaymentField; 18] = [
		PaymentField::Id,
		PaymentField::CreatedAt,
		PaymentField::UpdatedAt,
		PaymentField::Amount,
		PaymentField::Currency,
		PaymentField::Scheme,
		PaymentField::Type,
		PaymentField::Purpose,
		PaymentField::Beneficiary,
		PaymentField::DebitorParty,
		PaymentField::EndToEndReference,
		PaymentField::NumericReference,
		PaymentField::ProcessingDate,
		PaymentField::Reference,
		PaymentField::SchemePaymentType,
		PaymentField::SchemePaymentSubType,
		PaymentField::ChargesInformation,
		PaymentField::Fx,
	];

	/// Key of the field in the serialized payment.
	pub fn document_key(&self) -> &'static str {
		match self {
			PaymentField::Id => "id",
			PaymentField::CreatedAt => "createdAt",
			PaymentField::UpdatedAt => "updatedAt",
			PaymentField::Amount => "amount",
			PaymentField::Currency => "currency",
			PaymentField::Scheme => "scheme",
			PaymentField::Type => "type",
			PaymentField::Purpose => "purpose",
			PaymentField::Beneficiary => "beneficiary",
			PaymentField::DebitorParty => "debitorParty",
			PaymentField::EndToEndReference => "endToEndReference",
			PaymentField::NumericReference => "numericReference",
			PaymentField::ProcessingDate => "processingDate",
			PaymentField::Reference => "reference",
			PaymentField::SchemePaymentType => "schemePaymentType",
			PaymentField::SchemePaymentSubType => "schemePaymentSubType",
			PaymentField::ChargesInformation => "chargesInformation",
			PaymentField::Fx => "fx",
		}
	}

	/// Reads the field off a payment, in the same JSON shape it has on the
	/// wire. Unset timestamps read as `null`.
	pub fn value_of(&self, payment: &Payment) -> Result<Value, StoreError> {
		let value = match self {
			PaymentField::Id => Value::String(payment.id.to_string()),
			PaymentField::CreatedAt => to_value(&payment.created_at)?,
			PaymentField::UpdatedAt => to_value(&payment.updated_at)?,
			PaymentField::Amount => Value::String(payment.amount.clone()),
			PaymentField::Currency => Value::String(payment.currency.clone()),
			PaymentField::Scheme => Value::String(payment.scheme.clone()),
			PaymentField::Type => Value::String(payment.payment_type.clone()),
			PaymentField::Purpose => Value::String(payment.purpose.clone()),
			PaymentField::Beneficiary => to_value(&payment.beneficiary)?,
			PaymentField::DebitorParty => to_value(&payment.debitor_party)?,
			PaymentField::EndToEndReference => {
				Value::String(payment.end_to_end_reference.clone())
			}
			PaymentField::NumericReference => {
				Value::String(payment.numeric_reference.clone())
			}
			PaymentField::ProcessingDate => {
				Value::String(payment.processing_date.clone())
			}
			PaymentField::Reference => Value::String(payment.reference.clone()),
			PaymentField::SchemePaymentType => {
				Value::String(payment.scheme_payment_type.clone())
			}
			PaymentField::SchemePaymentSubType => {
				Value::String(payment.scheme_payment_sub_type.clone())
			}
			PaymentField::ChargesInformation => {
				to_value(&payment.charges_information)?
			}
			PaymentField::Fx => to_value(&payment.fx)?,
		};
		Ok(value)
	}
}

fn to_value<T: serde::Serialize>(field: &T) -> Result<Value, StoreError> {
	serde_json::to_value(field)
		.map_err(StoreError::serialization("reading filter field"))
}

fn normalize(name: &str) -> String {
	name.chars()
		.filter(|c| *c != '_' && *c != '-')
		.flat_map(char::to_lowercase)
		.collect()
}

impl FromStr for PaymentField {
	type Err = StoreError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		let wanted = normalize(name);
		PaymentField::ALL
			.into_iter()
			.find(|field| normalize(field.document_key()) == wanted)
			.ok_or_else(|| {
				StoreError::InvalidInput(format!("unknown payment field `{name}`"))
			})
	}
}

impl fmt::Display for PaymentField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.document_key())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
	Equal,
	In,
}

impl FromStr for FilterKind {
	type Err = StoreError;

	fn from_str(kind: &str) -> Result<Self, Self::Err> {
		match kind.to_ascii_lowercase().as_str() {
			"eq" | "equal" => Ok(FilterKind::Equal),
			"in" => Ok(FilterKind::In),
			_ => Err(StoreError::UnknownFilterType(kind.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
	pub field: PaymentField,
	pub want:  Value,
	pub kind:  FilterKind,
}

impl Filter {
	pub fn equal(field: PaymentField, want: impl Into<Value>) -> Self {
		Self {
			field,
			want: want.into(),
			kind: FilterKind::Equal,
		}
	}

	pub fn one_of<V: Into<Value>>(
		field: PaymentField,
		wants: impl IntoIterator<Item = V>,
	) -> Self {
		Self {
			field,
			want: Value::Array(wants.into_iter().map(Into::into).collect()),
			kind: FilterKind::In,
		}
	}

	pub fn is_scheme(scheme: impl Into<String>) -> Self {
		let scheme: String = scheme.into();
		Self::equal(PaymentField::Scheme, scheme)
	}

	/// Builds a filter from its textual form, e.g. `("scheme", "eq", "FPS")`
	/// or `("currency", "in", "GBP,EUR")`.
	pub fn parse(field: &str, kind: &str, raw: &str) -> Result<Self, StoreError> {
		let field = field.parse::<PaymentField>()?;
		match kind.parse::<FilterKind>()? {
			FilterKind::Equal => Ok(Self::equal(field, raw)),
			FilterKind::In => Ok(Self::one_of(
				field,
				raw.split(',').map(str::trim).filter(|v| !v.is_empty()),
			)),
		}
	}

	/// Checks the filter can be evaluated at all, independently of any record.
	pub fn validate(&self) -> Result<(), StoreError> {
		if self.want.is_null() {
			return Err(StoreError::NilValue);
		}
		if self.kind == FilterKind::In && !self.want.is_array() {
			return Err(StoreError::UnsupportedFilterValue);
		}
		Ok(())
	}

	/// Compares a field value against the wanted one.
	pub fn matches(&self, has: &Value) -> Result<bool, StoreError> {
		if self.want.is_null() && has.is_null() {
			return Err(StoreError::SomethingWentWrong);
		}
		match self.kind {
			FilterKind::Equal => Ok(*has == self.want),
			FilterKind::In => match &self.want {
				Value::Array(candidates) => {
					Ok(candidates.iter().any(|candidate| candidate == has))
				}
				_ => Err(StoreError::UnsupportedFilterValue),
			},
		}
	}

	pub fn matches_payment(&self, payment: &Payment) -> Result<bool, StoreError> {
		self.matches(&self.field.value_of(payment)?)
	}
}
