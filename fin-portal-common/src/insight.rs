use serde::{Deserialize, Serialize};

/// Generated insight lists returned by the business insight endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInsight {
    pub action_items: Vec<String>,
    pub questions: Vec<String>,
}
