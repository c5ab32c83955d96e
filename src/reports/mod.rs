//! Reports module for Pocketbook
//!
//! Aggregation primitives plus the monthly summary, category breakdown and
//! month-by-month reports built on top of them.

pub mod aggregate;
pub mod category;
pub mod monthly;
pub mod summary;

pub use aggregate::{by_category, by_month, group_sum, net_balance, total};
pub use category::{CategoryReport, CategoryRow};
pub use monthly::{MonthRow, MonthlyBreakdown};
pub use summary::{monthly_summary, MonthlySummary, Recommendation};
