use crate::Filter;

/// Parameters of a PostgREST read: column list, filters, ordering and limit.
#[derive(Debug, Clone)]
pub struct SelectQuery<'a> {
    pub columns: &'a str,
    pub filters: Vec<Filter>,
    pub order: Option<&'a str>,
    pub limit: Option<usize>,
}

impl<'a> SelectQuery<'a> {
    pub fn new(columns: &'a str) -> Self {
        Self {
            columns,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// PostgREST order expression, e.g. `id.asc`
    pub fn order(mut self, order: &'a str) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
