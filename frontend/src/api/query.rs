use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// PostgREST operators and column lists use `.`, `,` and `*` literally.
const FILTER_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*')
    .remove(b',');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// Filter/ordering parameters for a `/rest/v1/<table>` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.as_ref())));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        let direction = match order {
            Order::Asc => "asc",
            Order::Desc => "desc",
        };
        self.params
            .push(("order".into(), format!("{}.{}", column, direction)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, FILTER_VALUE),
                    utf8_percent_encode(value, FILTER_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
