use payment_api::domain::payment::{
	ChargesInformation, ForeignExchange, Payment, PaymentParty, SenderCharge,
};
use payment_api::domain::repository::PaymentStore;
use uuid::Uuid;

/// Two scheme "A" payments followed by one scheme "B" payment.
pub fn sample_payments() -> Vec<Payment> {
	vec![
		Payment::new()
			.with_id(Uuid::new_v4())
			.with_scheme("A")
			.with_amount("10.00")
			.with_currency("GBP"),
		Payment::new()
			.with_id(Uuid::new_v4())
			.with_scheme("A")
			.with_amount("20.00")
			.with_currency("EUR"),
		Payment::new()
			.with_id(Uuid::new_v4())
			.with_scheme("B")
			.with_amount("30.00")
			.with_currency("GBP"),
	]
}

/// Saves the sample payments in order and returns them as stored.
pub async fn seed(store: &dyn PaymentStore) -> Vec<Payment> {
	let mut saved = Vec::new();
	for payment in sample_payments() {
		saved.push(store.save(payment).await.expect("Failed to seed payment"));
	}
	saved
}

pub fn detailed_payment() -> Payment {
	Payment {
		payment_type: "Payment".to_string(),
		purpose:      "Paying for goods/services".to_string(),
		beneficiary:  PaymentParty {
			account_name:        "W Owens".to_string(),
			account_number:      "31926819".to_string(),
			account_number_code: "BBAN".to_string(),
			bank_id:             "403000".to_string(),
			bank_id_code:        "GBDSC".to_string(),
			name:                "Wilfred Jeremiah Owens".to_string(),
			address:             "1 The Beneficiary Localtown SE2".to_string(),
		},
		debitor_party: PaymentParty {
			account_name:        "EJ Brown Black".to_string(),
			account_number:      "GB29XABC10161234567801".to_string(),
			account_number_code: "IBAN".to_string(),
			bank_id:             "203301".to_string(),
			bank_id_code:        "GBDSC".to_string(),
			name:                "Emelia Jane Brown".to_string(),
			address:             "10 Debtor Crescent Sourcetown NE1".to_string(),
		},
		end_to_end_reference:    "Wil piano Jan".to_string(),
		numeric_reference:       "1002001".to_string(),
		processing_date:         "2017-01-18".to_string(),
		reference:               "Payment for Em's piano lessons".to_string(),
		scheme_payment_type:     "ImmediatePayment".to_string(),
		scheme_payment_sub_type: "InternetBanking".to_string(),
		charges_information:     ChargesInformation {
			bearer_code:               "SHAR".to_string(),
			receiver_charges_amount:   "1.00".to_string(),
			receiver_charges_currency: "USD".to_string(),
			sender_charges:            vec![
				SenderCharge {
					amount:     "5.00".to_string(),
					currency: "GBP".to_string(),
				},
				SenderCharge {
					amount:     "10.00".to_string(),
					currency: "USD".to_string(),
				},
			],
		},
		fx: ForeignExchange {
			contract_reference: "FX123".to_string(),
			exchange_rate:      "2.00000".to_string(),
			original_amount:    "200.42".to_string(),
			original_currency:  "USD".to_string(),
		},
		..Payment::new()
			.with_scheme("FPS")
			.with_amount("100.21")
			.with_currency("GBP")
	}
}
