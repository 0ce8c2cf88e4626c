pub mod assign;
pub mod mentor;
pub mod student;

/// Common pagination and sorting parameters for all list commands
#[derive(Debug, Default)]
pub struct PageParams<'a> {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<&'a str>,
    pub order: Option<&'a str>,
}

impl PageParams<'_> {
    /// Apply the set parameters as query-string pairs.
    pub(crate) fn apply(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(l) = self.limit {
            request = request.query(&[("limit", l.to_string())]);
        }
        if let Some(o) = self.offset {
            request = request.query(&[("offset", o.to_string())]);
        }
        if let Some(s) = self.sort {
            request = request.query(&[("sort", s)]);
        }
        if let Some(ord) = self.order {
            request = request.query(&[("order", ord)]);
        }
        request
    }
}

#[cfg(test)]
#[path = "test_server.rs"]
pub(crate) mod test_server;
