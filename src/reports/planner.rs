//! Query planning
//!
//! Turns a report category plus filter criteria into the backend request
//! that fetches its rows. Planning is a pure function of its inputs and the
//! planner configuration.

use crate::config::Settings;
use crate::models::{Endpoint, FilterCriteria, QueryDescriptor, ReportCategory};

/// Planner policy values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Driver used by driver-scoped reports when none is selected
    pub default_driver_id: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_driver_id: "1".to_string(),
        }
    }
}

impl From<&Settings> for PlannerConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            default_driver_id: settings.default_driver_id.clone(),
        }
    }
}

/// Resolves report requests to query descriptors
#[derive(Debug, Clone, Default)]
pub struct QueryPlanner {
    config: PlannerConfig,
}

impl QueryPlanner {
    /// Create a planner with the given policy
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan the query for a category
    ///
    /// Returns `None` for categories without a rule; callers treat that as an
    /// empty report rather than an error.
    pub fn plan(&self, category: &ReportCategory, filters: &FilterCriteria) -> Option<QueryDescriptor> {
        let query = match category {
            ReportCategory::Orders => {
                if let Some((start, end)) = filters.date_range() {
                    QueryDescriptor::new(Endpoint::OrdersByDate)
                        .with_param("start_date", start)
                        .with_param("end_date", end)
                } else if let Some(client_id) = filters.client_id() {
                    QueryDescriptor::new(Endpoint::OrdersByClient).with_path_param(client_id)
                } else {
                    QueryDescriptor::new(Endpoint::Orders)
                }
            }
            ReportCategory::Clients => QueryDescriptor::new(Endpoint::Clients),
            ReportCategory::Vehicles => QueryDescriptor::new(Endpoint::Vehicles),
            ReportCategory::Drivers => QueryDescriptor::new(Endpoint::RoutesCompletedByDriver)
                .with_path_param(self.driver_id(filters)),
            ReportCategory::OrderStatus => {
                match filters.status().or_else(|| filters.secondary_status()) {
                    Some(status) => {
                        QueryDescriptor::new(Endpoint::OrdersByStatus).with_param("status", status)
                    }
                    None => QueryDescriptor::new(Endpoint::Orders),
                }
            }
            ReportCategory::DriverOrders => QueryDescriptor::new(Endpoint::DriverAssignedOrders)
                .with_path_param(self.driver_id(filters)),
            ReportCategory::AvailableDrivers => QueryDescriptor::new(Endpoint::AvailableDrivers),
            ReportCategory::AllDrivers => QueryDescriptor::new(Endpoint::AllDrivers),
            ReportCategory::OrdersWithDrivers => {
                let mut query = QueryDescriptor::new(Endpoint::OrdersWithDrivers);
                if let Some((start, end)) = filters.date_range() {
                    query = query
                        .with_param("start_date", start)
                        .with_param("end_date", end);
                }
                if let Some(status) = filters.status() {
                    query = query.with_param("status", status);
                }
                query
            }
            ReportCategory::Unknown(_) => return None,
        };

        Some(query)
    }

    fn driver_id<'a>(&'a self, filters: &'a FilterCriteria) -> &'a str {
        filters
            .driver_id()
            .unwrap_or(self.config.default_driver_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> QueryPlanner {
        QueryPlanner::default()
    }

    fn plan(category: ReportCategory, filters: FilterCriteria) -> QueryDescriptor {
        planner().plan(&category, &filters).unwrap()
    }

    #[test]
    fn test_orders_date_range_wins() {
        let filters: FilterCriteria = serde_json::from_str(
            r#"{"fechaInicio": "2024-01-01", "fechaFin": "2024-01-31", "clienteId": "5"}"#,
        )
        .unwrap();
        let query = plan(ReportCategory::Orders, filters);
        assert_eq!(
            query.request_path(),
            "/reports/orders-by-date?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_orders_half_range_falls_through_to_client() {
        let filters = FilterCriteria {
            start_date: Some("2024-01-01".into()),
            client_id: Some("5".into()),
            ..Default::default()
        };
        let query = plan(ReportCategory::Orders, filters);
        assert_eq!(query.endpoint, Endpoint::OrdersByClient);
        assert_eq!(query.request_path(), "/reports/orders-by-client/5");
    }

    #[test]
    fn test_orders_unscoped() {
        let query = plan(ReportCategory::Orders, FilterCriteria::default());
        assert_eq!(query.request_path(), "/orders");
    }

    #[test]
    fn test_listing_categories() {
        assert_eq!(plan(ReportCategory::Clients, FilterCriteria::default()).request_path(), "/clients");
        assert_eq!(plan(ReportCategory::Vehicles, FilterCriteria::default()).request_path(), "/vehicles");
    }

    #[test]
    fn test_drivers_default_id() {
        let query = plan(ReportCategory::Drivers, FilterCriteria::default());
        assert_eq!(query.request_path(), "/reports/routes-completed-by-driver/1");
    }

    #[test]
    fn test_drivers_configured_default_id() {
        let planner = QueryPlanner::new(PlannerConfig {
            default_driver_id: "77".into(),
        });
        let query = planner
            .plan(&ReportCategory::Drivers, &FilterCriteria::default())
            .unwrap();
        assert_eq!(query.path_param.as_deref(), Some("77"));
    }

    #[test]
    fn test_drivers_explicit_id() {
        let filters = FilterCriteria {
            driver_id: Some("12".into()),
            ..Default::default()
        };
        let query = plan(ReportCategory::Drivers, filters);
        assert_eq!(query.request_path(), "/reports/routes-completed-by-driver/12");
    }

    #[test]
    fn test_unknown_category_has_no_plan() {
        let planned = planner().plan(
            &ReportCategory::Unknown("invoices".into()),
            &FilterCriteria::default(),
        );
        assert!(planned.is_none());
    }

    #[test]
    fn test_order_status_and_driver_orders() {
        let filters = FilterCriteria {
            status: Some("ENTREGADO".into()),
            ..Default::default()
        };
        assert_eq!(
            plan(ReportCategory::OrderStatus, filters).request_path(),
            "/reports/orders-by-status?status=ENTREGADO"
        );
        assert_eq!(
            plan(ReportCategory::DriverOrders, FilterCriteria::default()).request_path(),
            "/reports/driver/1/assigned-orders"
        );
    }

    #[test]
    fn test_orders_with_drivers_optional_params() {
        let query = plan(ReportCategory::OrdersWithDrivers, FilterCriteria::default());
        assert_eq!(query.request_path(), "/reports/orders-with-drivers");

        let filters = FilterCriteria {
            start_date: Some("2024-03-01".into()),
            end_date: Some("2024-03-31".into()),
            status: Some("pendiente".into()),
            ..Default::default()
        };
        let query = plan(ReportCategory::OrdersWithDrivers, filters);
        assert_eq!(
            query.request_path(),
            "/reports/orders-with-drivers?start_date=2024-03-01&end_date=2024-03-31&status=pendiente"
        );
    }

    #[test]
    fn test_planner_from_settings() {
        let mut settings = Settings::default();
        settings.default_driver_id = "3".into();
        assert_eq!(PlannerConfig::from(&settings).default_driver_id, "3");
    }
}
