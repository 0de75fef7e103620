//! Report categories
//!
//! A category decides which planner rule, filter predicate and aggregation
//! rule apply to a report. The set is closed but tolerant: any other
//! non-empty tag is kept as `Unknown` and produces an empty report.

use std::fmt;

/// The kind of entity a report is about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportCategory {
    /// Orders, optionally by date range or client
    Orders,
    /// Client directory
    Clients,
    /// Fleet vehicles
    Vehicles,
    /// Routes completed by a driver
    Drivers,
    /// Orders in a given status
    OrderStatus,
    /// Orders assigned to a driver
    DriverOrders,
    /// Drivers currently available
    AvailableDrivers,
    /// All drivers, active and inactive
    AllDrivers,
    /// Orders joined with their driver and vehicle
    OrdersWithDrivers,
    /// Any tag this build does not know about
    Unknown(String),
}

impl ReportCategory {
    /// Every category with a planner rule
    pub const KNOWN: &'static [ReportCategory] = &[
        ReportCategory::Orders,
        ReportCategory::Clients,
        ReportCategory::Vehicles,
        ReportCategory::Drivers,
        ReportCategory::OrderStatus,
        ReportCategory::DriverOrders,
        ReportCategory::AvailableDrivers,
        ReportCategory::AllDrivers,
        ReportCategory::OrdersWithDrivers,
    ];

    /// Parse a category tag
    ///
    /// Returns `None` for a blank tag. Tags are case-insensitive and the
    /// backend's Spanish names are accepted as aliases.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        let category = match tag.to_lowercase().replace('_', "-").as_str() {
            "orders" | "pedidos" => Self::Orders,
            "clients" | "clientes" => Self::Clients,
            "vehicles" | "vehiculos" | "vehículos" => Self::Vehicles,
            "drivers" | "conductores" => Self::Drivers,
            "order-status" | "orders-by-status" => Self::OrderStatus,
            "driver-orders" | "assigned-orders" => Self::DriverOrders,
            "available-drivers" => Self::AvailableDrivers,
            "all-drivers" | "drivers-all" => Self::AllDrivers,
            "orders-with-drivers" => Self::OrdersWithDrivers,
            _ => Self::Unknown(tag.to_string()),
        };
        Some(category)
    }

    /// Canonical tag
    pub fn tag(&self) -> &str {
        match self {
            Self::Orders => "orders",
            Self::Clients => "clients",
            Self::Vehicles => "vehicles",
            Self::Drivers => "drivers",
            Self::OrderStatus => "order-status",
            Self::DriverOrders => "driver-orders",
            Self::AvailableDrivers => "available-drivers",
            Self::AllDrivers => "all-drivers",
            Self::OrdersWithDrivers => "orders-with-drivers",
            Self::Unknown(tag) => tag,
        }
    }

    /// Human-readable report title, also used for export file names
    pub fn title(&self) -> String {
        match self {
            Self::Orders => "Orders Report".to_string(),
            Self::Clients => "Clients Report".to_string(),
            Self::Vehicles => "Vehicles Report".to_string(),
            Self::Drivers => "Completed Routes Report".to_string(),
            Self::OrderStatus => "Orders by Status Report".to_string(),
            Self::DriverOrders => "Driver Assigned Orders Report".to_string(),
            Self::AvailableDrivers => "Available Drivers Report".to_string(),
            Self::AllDrivers => "Drivers Report".to_string(),
            Self::OrdersWithDrivers => "Orders with Drivers Report".to_string(),
            Self::Unknown(tag) => format!("{} Report", tag),
        }
    }

    /// Short description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::Orders => "Orders, by date range or client when given",
            Self::Clients => "Client directory, filterable by status",
            Self::Vehicles => "Fleet vehicles, filterable by type",
            Self::Drivers => "Routes completed by a driver",
            Self::OrderStatus => "Orders in a given status",
            Self::DriverOrders => "Orders assigned to a driver",
            Self::AvailableDrivers => "Drivers currently available",
            Self::AllDrivers => "All drivers, active and inactive",
            Self::OrdersWithDrivers => "Orders with driver and vehicle details",
            Self::Unknown(_) => "Unknown report category",
        }
    }

    /// Whether rows are orders (shares the order status filter and statistics)
    pub fn is_order_shaped(&self) -> bool {
        matches!(
            self,
            Self::Orders | Self::OrderStatus | Self::DriverOrders | Self::OrdersWithDrivers
        )
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(ReportCategory::parse("orders"), Some(ReportCategory::Orders));
        assert_eq!(ReportCategory::parse(" Clients "), Some(ReportCategory::Clients));
        assert_eq!(ReportCategory::parse("vehiculos"), Some(ReportCategory::Vehicles));
        assert_eq!(
            ReportCategory::parse("available_drivers"),
            Some(ReportCategory::AvailableDrivers)
        );
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(ReportCategory::parse(""), None);
        assert_eq!(ReportCategory::parse("   "), None);
    }

    #[test]
    fn test_parse_unknown_keeps_tag() {
        let category = ReportCategory::parse("invoices").unwrap();
        assert_eq!(category, ReportCategory::Unknown("invoices".into()));
        assert_eq!(category.tag(), "invoices");
    }

    #[test]
    fn test_known_round_trip() {
        for category in ReportCategory::KNOWN {
            assert_eq!(ReportCategory::parse(category.tag()).as_ref(), Some(category));
        }
    }

    #[test]
    fn test_order_shaped() {
        assert!(ReportCategory::Orders.is_order_shaped());
        assert!(ReportCategory::OrdersWithDrivers.is_order_shaped());
        assert!(!ReportCategory::Clients.is_order_shaped());
    }
}
