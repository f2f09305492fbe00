use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::filter::Filter;
use crate::domain::payment::Payment;

#[derive(Debug, Clone, Default)]
pub struct ListPaymentsQuery {
	pub limit:   usize,
	pub offset:  usize,
	pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavePaymentCommand {
	/// Target of an update. `None` creates a new payment.
	pub id:      Option<Uuid>,
	pub payment: Payment,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavePaymentResult {
	pub payment: Payment,
	pub created: bool,
}
