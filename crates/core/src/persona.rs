//! Dashboard personas and the routing table that governs them.
//!
//! Every persona-dependent decision (home route, visible views, defect
//! analysis access) goes through an exhaustive match here rather than string
//! comparisons at call sites.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The role a dashboard session acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Customer,
    Service,
    Manufacturer,
}

/// All personas, in display order.
pub const ALL_PERSONAS: &[Persona] = &[Persona::Customer, Persona::Service, Persona::Manufacturer];

/// A section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    /// Customer's own vehicles and service history.
    MyVehicles,
    /// Customer service booking.
    ServiceBooking,
    /// Service-center work orders and bays.
    ServiceOperations,
    /// Part returns raised by a service center.
    PartReturns,
    /// Manufacturer-side quality and defect analysis.
    ManufacturingQuality,
    /// Fleet-wide failure analytics.
    FailureAnalytics,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Customer => "customer",
            Persona::Service => "service",
            Persona::Manufacturer => "manufacturer",
        }
    }

    /// Parse a persona name. Unknown names are a validation error.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "customer" => Ok(Persona::Customer),
            "service" => Ok(Persona::Service),
            "manufacturer" => Ok(Persona::Manufacturer),
            other => Err(CoreError::Validation(format!(
                "Unknown persona: '{other}'. Valid personas: customer, service, manufacturer"
            ))),
        }
    }

    /// Landing route after a session starts.
    pub fn home_route(&self) -> &'static str {
        match self {
            Persona::Customer => "/customer/dashboard",
            Persona::Service => "/service/dashboard",
            Persona::Manufacturer => "/manufacturer/dashboard",
        }
    }

    /// Views this persona may open.
    pub fn views(&self) -> &'static [DashboardView] {
        match self {
            Persona::Customer => &[DashboardView::MyVehicles, DashboardView::ServiceBooking],
            Persona::Service => &[
                DashboardView::ServiceOperations,
                DashboardView::PartReturns,
                DashboardView::FailureAnalytics,
            ],
            Persona::Manufacturer => &[
                DashboardView::ManufacturingQuality,
                DashboardView::FailureAnalytics,
            ],
        }
    }

    pub fn can_view(&self, view: DashboardView) -> bool {
        self.views().contains(&view)
    }

    /// Whether this persona may run defect analysis. Service centers raise
    /// parts; manufacturers receive them.
    pub fn can_analyze_defects(&self) -> bool {
        match self {
            Persona::Customer => false,
            Persona::Service | Persona::Manufacturer => true,
        }
    }
}
