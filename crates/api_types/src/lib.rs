use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Request body for creating an expense.
    ///
    /// All fields are required; there are no defaults.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub title: String,
        pub amount: f64,
        pub category: String,
    }

    /// A stored expense as returned by the list endpoint.
    ///
    /// The storage identifier is serialized under `_id` as a hex string.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        #[serde(rename = "_id")]
        pub id: String,
        pub title: String,
        pub amount: f64,
        pub category: String,
    }

    /// Acknowledgment returned after a successful create.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub message: String,
        pub id: String,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::*;

    #[test]
    fn expense_view_renders_id_as_underscore_id() {
        let view = ExpenseView {
            id: "65b2f1a09c3d2b4a1f6e8d70".to_string(),
            title: "Coffee".to_string(),
            amount: 4.5,
            category: "Food".to_string(),
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["_id"], "65b2f1a09c3d2b4a1f6e8d70");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn expense_new_requires_all_fields() {
        let missing_amount = r#"{"title":"Coffee","category":"Food"}"#;
        assert!(serde_json::from_str::<ExpenseNew>(missing_amount).is_err());

        let wrong_type = r#"{"title":"Coffee","amount":"4.5","category":"Food"}"#;
        assert!(serde_json::from_str::<ExpenseNew>(wrong_type).is_err());

        let complete = r#"{"title":"Coffee","amount":4.5,"category":"Food"}"#;
        let parsed: ExpenseNew = serde_json::from_str(complete).unwrap();
        assert_eq!(parsed.title, "Coffee");
        assert_eq!(parsed.amount, 4.5);
        assert_eq!(parsed.category, "Food");
    }
}
