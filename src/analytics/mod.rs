//! # Analytics Aggregation
//!
//! Pure calculation primitives (binning, growth percentages, category
//! shares) and the report assemblers that orchestrate concurrent store
//! reads into cached dashboard payloads.

pub mod assembler;
pub mod charts;
pub mod inventory;
pub mod percentage;

pub use assembler::{
    AdminCustomerSplit, AgeGroups, BarCharts, ChangePercent, CountSummary, DashboardStats,
    FulfillmentSplit, LineCharts, OrderChart, PieCharts, ReportAssembler, RevenueDistribution,
    StockAvailability, TransactionSummary, UserRatio,
};
pub use charts::{monthly_counts, monthly_totals};
pub use inventory::distribution;
pub use percentage::change_percent;
