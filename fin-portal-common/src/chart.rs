use serde::{Deserialize, Serialize};

/// Spend aggregated over a single purchase category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spend: f64,
}

/// Spend aggregated over a single payment mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSpend {
    pub mode: String,
    pub spend: f64,
}

/// Customer spending breakdown returned by the customer chart endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendData {
    pub category: Vec<CategorySpend>,
    pub payment_mode: Vec<ModeSpend>,
}

/// Revenue attributed to a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductKpi {
    pub product_name: String,
    pub amount: f64,
}

/// Revenue attributed to a single payment mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeKpi {
    pub mode: String,
    pub amount: f64,
}

/// Business revenue KPIs returned by the business chart endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub products: Vec<ProductKpi>,
    pub payment_mode: Vec<ModeKpi>,
}

/// Colors cycled over chart slices
const PALETTE: [&str; 8] = [
    "#0f4c81", "#d1495b", "#edae49", "#00798c", "#6a4c93", "#2e933c", "#e26d5c", "#30638e",
];

/// Single datum of a pie chart: label, dollar value and fill color
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

impl PieSlice {
    /// Builds palette colored slices from label/value pairs, keeping the
    /// backend's ordering
    fn from_pairs<I>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, value))| Self {
                name,
                value,
                color: PALETTE[i % PALETTE.len()],
            })
            .collect()
    }
}

impl SpendData {
    /// Slices of spend per purchase category
    pub fn category_slices(&self) -> Vec<PieSlice> {
        PieSlice::from_pairs(
            self.category
                .iter()
                .map(|entry| (entry.category.clone(), entry.spend)),
        )
    }

    /// Slices of spend per payment mode
    pub fn mode_slices(&self) -> Vec<PieSlice> {
        PieSlice::from_pairs(
            self.payment_mode
                .iter()
                .map(|entry| (entry.mode.clone(), entry.spend)),
        )
    }
}

impl KpiData {
    /// Slices of revenue per product
    pub fn product_slices(&self) -> Vec<PieSlice> {
        PieSlice::from_pairs(
            self.products
                .iter()
                .map(|entry| (entry.product_name.clone(), entry.amount)),
        )
    }

    /// Slices of revenue per payment mode
    pub fn mode_slices(&self) -> Vec<PieSlice> {
        PieSlice::from_pairs(
            self.payment_mode
                .iter()
                .map(|entry| (entry.mode.clone(), entry.amount)),
        )
    }
}

/// Start/end fractions of a full clockwise turn covered by each slice, in
/// slice order. Empty when the values sum to zero or less, since no sensible
/// pie exists for such data.
pub fn slice_spans(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let end = start + slice.value / total;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{slice_spans, KpiData, ModeKpi, PieSlice, ProductKpi, SpendData, PALETTE};

    fn slice(value: f64) -> PieSlice {
        PieSlice {
            name: "slice".to_owned(),
            value,
            color: PALETTE[0],
        }
    }

    #[test]
    fn kpi_slices_should_keep_order_and_cycle_palette() {
        let data = KpiData {
            products: (0..10)
                .map(|i| ProductKpi {
                    product_name: format!("Product {i}"),
                    amount: f64::from(i),
                })
                .collect(),
            payment_mode: vec![ModeKpi {
                mode: "Cash".to_owned(),
                amount: 10.0,
            }],
        };

        let slices = data.product_slices();

        assert_eq!(slices.len(), 10);
        assert_eq!(slices[0].name, "Product 0");
        assert_eq!(slices[9].name, "Product 9");
        assert_eq!(
            slices[8].color, slices[0].color,
            "palette wraps after {} slices",
            PALETTE.len()
        );
        assert_eq!(data.mode_slices()[0].name, "Cash");
    }

    #[test]
    fn spend_slices_should_map_categories_and_modes() {
        let data: SpendData = serde_json::from_value(serde_json::json!({
            "category": [{"category": "Food", "spend": 200.0}],
            "payment_mode": [{"mode": "Credit Card", "spend": 150.0}],
        }))
        .expect("valid spend payload");

        assert_eq!(data.category_slices()[0].name, "Food");
        assert_eq!(data.category_slices()[0].value, 200.0);
        assert_eq!(data.mode_slices()[0].name, "Credit Card");
    }

    #[test]
    fn slice_spans_should_cover_the_full_turn() {
        let spans = slice_spans(&[slice(1.0), slice(1.0), slice(2.0)]);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], (0.0, 0.25));
        assert_eq!(spans[1], (0.25, 0.5));
        assert_eq!(spans[2].1, 1.0);
    }

    #[rstest]
    #[case::no_slices(Vec::new())]
    #[case::zero_total(vec![slice(0.0), slice(0.0)])]
    fn slice_spans_should_be_empty_when(#[case] slices: Vec<PieSlice>) {
        assert!(slice_spans(&slices).is_empty());
    }
}
