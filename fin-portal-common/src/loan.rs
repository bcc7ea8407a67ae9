use serde::{Deserialize, Serialize};

/// Loan offer returned by the loan recommendation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_product_id: i64,
    pub loan_type: String,
    pub approval_probability: f64,
    pub purchase_category: String,
    pub min_interest_rate: f64,
    pub max_interest_rate: f64,
    pub min_loan_amount: f64,
    pub max_loan_amount: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
    pub processing_fee: f64,
    pub loan_type_readable: String,
}

impl Loan {
    /// Approval probability rendered as a whole percentage
    pub fn approval_percent(&self) -> String {
        format!("{:.0}%", self.approval_probability * 100.0)
    }

    /// Interest rate range of the offer
    pub fn rate_range(&self) -> String {
        format!("{}% - {}%", self.min_interest_rate, self.max_interest_rate)
    }

    /// Loan amount range of the offer
    pub fn amount_range(&self) -> String {
        format!("${} - ${}", self.min_loan_amount, self.max_loan_amount)
    }

    /// Term range of the offer in months
    pub fn term_range(&self) -> String {
        format!("{} - {} months", self.min_term_months, self.max_term_months)
    }
}

#[cfg(test)]
mod test {
    use super::Loan;

    fn offer() -> Loan {
        Loan {
            loan_product_id: 18,
            loan_type: "eco_friendly".to_owned(),
            approval_probability: 0.7823603749275208,
            purchase_category: "Health".to_owned(),
            min_interest_rate: 3.0,
            max_interest_rate: 7.0,
            min_loan_amount: 5000.0,
            max_loan_amount: 50000.0,
            min_term_months: 12,
            max_term_months: 60,
            processing_fee: 572.28,
            loan_type_readable: "Eco Friendly Loan".to_owned(),
        }
    }

    #[test]
    fn display_helpers_should_format_offer_fields() {
        let loan = offer();

        assert_eq!(loan.approval_percent(), "78%");
        assert_eq!(loan.rate_range(), "3% - 7%");
        assert_eq!(loan.amount_range(), "$5000 - $50000");
        assert_eq!(loan.term_range(), "12 - 60 months");
    }
}
