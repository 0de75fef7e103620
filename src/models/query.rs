//! Query descriptors
//!
//! A descriptor names a backend endpoint plus its path and query
//! parameters. The planner produces it; a report source executes it.

use std::fmt;

use url::Url;

/// Backend endpoints used by reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /reports/orders-by-date`
    OrdersByDate,
    /// `GET /reports/orders-by-client/{client_id}`
    OrdersByClient,
    /// `GET /orders`
    Orders,
    /// `GET /clients`
    Clients,
    /// `GET /vehicles`
    Vehicles,
    /// `GET /reports/routes-completed-by-driver/{driver_id}`
    RoutesCompletedByDriver,
    /// `GET /reports/orders-by-status`
    OrdersByStatus,
    /// `GET /reports/driver/{driver_id}/assigned-orders`
    DriverAssignedOrders,
    /// `GET /reports/available-drivers`
    AvailableDrivers,
    /// `GET /reports/drivers-all`
    AllDrivers,
    /// `GET /reports/orders-with-drivers`
    OrdersWithDrivers,
}

/// Placeholder segment replaced by the path parameter
const PARAM: &str = "{}";

impl Endpoint {
    /// Path segments; `{}` marks the path parameter
    fn segments(self) -> &'static [&'static str] {
        match self {
            Self::OrdersByDate => &["reports", "orders-by-date"],
            Self::OrdersByClient => &["reports", "orders-by-client", PARAM],
            Self::Orders => &["orders"],
            Self::Clients => &["clients"],
            Self::Vehicles => &["vehicles"],
            Self::RoutesCompletedByDriver => &["reports", "routes-completed-by-driver", PARAM],
            Self::OrdersByStatus => &["reports", "orders-by-status"],
            Self::DriverAssignedOrders => &["reports", "driver", PARAM, "assigned-orders"],
            Self::AvailableDrivers => &["reports", "available-drivers"],
            Self::AllDrivers => &["reports", "drivers-all"],
            Self::OrdersWithDrivers => &["reports", "orders-with-drivers"],
        }
    }

    /// Whether the endpoint takes a path parameter
    pub fn has_path_param(self) -> bool {
        self.segments().contains(&PARAM)
    }
}

/// A resolved request for report data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Value substituted into the endpoint path
    pub path_param: Option<String>,
    /// Query string parameters, in order
    pub params: Vec<(String, String)>,
}

impl QueryDescriptor {
    /// Descriptor without parameters
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_param: None,
            params: Vec::new(),
        }
    }

    /// Set the path parameter
    pub fn with_path_param(mut self, value: impl Into<String>) -> Self {
        self.path_param = Some(value.into());
        self
    }

    /// Append a query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        let param = self.path_param.as_deref().unwrap_or_default();
        self.endpoint
            .segments()
            .iter()
            .map(move |segment| if *segment == PARAM { param } else { *segment })
    }

    /// Unencoded path, e.g. `/reports/orders-by-client/7`
    pub fn path(&self) -> String {
        self.segments().fold(String::new(), |mut path, segment| {
            path.push('/');
            path.push_str(segment);
            path
        })
    }

    /// Full request URL under `base_url`, path and query properly encoded
    ///
    /// Any path already on `base_url` (e.g. `/api`) is kept as a prefix.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty();
            segments.extend(self.segments());
        }
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.params);
        }
        Ok(url)
    }

    /// Encoded path and query string, e.g.
    /// `/reports/orders-by-date?start_date=2024-01-01&end_date=2024-01-31`
    pub fn request_path(&self) -> String {
        match self.url("http://localhost") {
            Ok(url) => match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            },
            Err(_) => self.path(),
        }
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.request_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let query = QueryDescriptor::new(Endpoint::Orders);
        assert_eq!(query.path(), "/orders");
        assert_eq!(query.request_path(), "/orders");
    }

    #[test]
    fn test_path_param_substitution() {
        let query = QueryDescriptor::new(Endpoint::DriverAssignedOrders).with_path_param("9");
        assert_eq!(query.path(), "/reports/driver/9/assigned-orders");
        assert!(Endpoint::DriverAssignedOrders.has_path_param());
        assert!(!Endpoint::Clients.has_path_param());
    }

    #[test]
    fn test_request_path_with_query() {
        let query = QueryDescriptor::new(Endpoint::OrdersByDate)
            .with_param("start_date", "2024-01-01")
            .with_param("end_date", "2024-01-31");
        assert_eq!(
            query.request_path(),
            "/reports/orders-by-date?start_date=2024-01-01&end_date=2024-01-31"
        );
        assert_eq!(query.param("end_date"), Some("2024-01-31"));
    }

    #[test]
    fn test_url_keeps_base_prefix_and_encodes() {
        let query = QueryDescriptor::new(Endpoint::OrdersByClient).with_path_param("a b/c");
        let url = query.url("http://dispatch.local:8000/api/").unwrap();
        assert_eq!(
            url.as_str(),
            "http://dispatch.local:8000/api/reports/orders-by-client/a%20b%2Fc"
        );
    }

    #[test]
    fn test_display() {
        let query = QueryDescriptor::new(Endpoint::Vehicles);
        assert_eq!(query.to_string(), "GET /vehicles");
    }
}
