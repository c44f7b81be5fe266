/// PostgREST horizontal filter rendered as a `column=operator.value` query pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    expression: String,
}

impl Filter {
    /// `column=eq.value`
    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self {
            column,
            expression: format!("eq.{}", value.to_string()),
        }
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}
