//! # Report Assemblers
//!
//! The four admin dashboard pipelines: summary stats, pie, bar, and line
//! charts. Each assembler is cache-first; on a miss it fans out every
//! independent read concurrently, joins them all before any computation, and
//! stores the composed payload as a typed snapshot. Payloads serialize in
//! camelCase because that is the shape the dashboard frontend consumes.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{charts, inventory, percentage};
use crate::cache::{keys, ResultCache};
use crate::error::Result;
use crate::models::{Gender, OrderStatus, Role};
use crate::store::{DateRange, OrderStore, ProductStore, UserStore};

/// Marketing spend modeled as a fixed multiple of gross revenue.
/// A business-rule constant, not a derived figure.
pub const MARKETING_COST_RATE: f64 = 3.0;

/// How many recent orders the dashboard lists as transactions
pub const LATEST_TRANSACTION_COUNT: usize = 4;

/// Month-over-month growth figures for the summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePercent {
    pub revenue: i64,
    pub product: i64,
    pub user: i64,
    pub order: i64,
}

/// All-time totals shown beside the growth figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountSummary {
    pub revenue: i64,
    pub product: u64,
    pub user: u64,
    pub order: u64,
}

/// Six-month order trend, oldest bucket first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChart {
    pub order: Vec<i64>,
    pub revenue: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRatio {
    pub male: i64,
    pub female: i64,
}

/// A recent order reshaped for the dashboard transaction list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub id: Uuid,
    pub discount: i64,
    pub amount: i64,
    pub quantity: u32,
    pub status: OrderStatus,
}

/// Payload cached under `admin-stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub category_count: BTreeMap<String, i64>,
    pub change_percent: ChangePercent,
    pub count: CountSummary,
    pub chart: OrderChart,
    pub user_ratio: UserRatio,
    pub latest_transactions: Vec<TransactionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentSplit {
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAvailability {
    pub in_stock: i64,
    pub out_of_stock: u64,
}

/// Gross revenue split into margin and expense components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueDistribution {
    pub net_margin: i64,
    pub discount: i64,
    pub production_cost: i64,
    pub tax: i64,
    pub marketing_cost: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroups {
    pub teen: u64,
    pub adult: u64,
    pub old: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCustomerSplit {
    pub admin: u64,
    pub customer: u64,
}

/// Payload cached under `admin-pie-charts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieCharts {
    pub order_fulfillment: FulfillmentSplit,
    pub product_categories: BTreeMap<String, i64>,
    pub stock_availability: StockAvailability,
    pub revenue_distribution: RevenueDistribution,
    pub users_age_group: AgeGroups,
    pub admin_customer: AdminCustomerSplit,
}

/// Payload cached under `admin-bar-charts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarCharts {
    /// Product creation counts, trailing six months
    pub products: Vec<i64>,
    /// User signup counts, trailing six months
    pub users: Vec<i64>,
    /// Order counts, trailing twelve months
    pub orders: Vec<i64>,
}

/// Payload cached under `admin-line-charts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCharts {
    pub products: Vec<i64>,
    pub users: Vec<i64>,
    pub discount: Vec<i64>,
    pub revenue: Vec<i64>,
}

/// Assembles the four admin reports from the document store, caching each
/// under its report key
#[derive(Clone)]
pub struct ReportAssembler {
    products: Arc<dyn ProductStore>,
    users: Arc<dyn UserStore>,
    orders: Arc<dyn OrderStore>,
    cache: Arc<ResultCache>,
}

impl ReportAssembler {
    pub fn new(
        products: Arc<dyn ProductStore>,
        users: Arc<dyn UserStore>,
        orders: Arc<dyn OrderStore>,
        cache: Arc<ResultCache>,
    ) -> Self {
        Self {
            products,
            users,
            orders,
            cache,
        }
    }

    /// Summary stats for the dashboard landing page.
    ///
    /// Thirteen independent reads are dispatched in one join; computation
    /// starts only after every read has landed, so no figure can observe a
    /// partially loaded month.
    pub async fn dashboard_stats(&self, now: DateTime<Utc>) -> Result<DashboardStats> {
        if let Some(stats) = self.cache.get::<DashboardStats>(keys::ADMIN_STATS) {
            return Ok(stats);
        }
        tracing::debug!(report = "stats", "assembling dashboard report");

        let this_month = DateRange::current_month(now);
        let last_month = DateRange::previous_month(now);
        let six_months = DateRange::trailing_months(now, 6);

        let (
            this_month_products,
            last_month_products,
            this_month_users,
            last_month_users,
            this_month_orders,
            last_month_orders,
            product_count,
            user_count,
            all_orders,
            six_month_orders,
            categories,
            female_count,
            latest_orders,
        ) = tokio::try_join!(
            self.products.created_between(&this_month),
            self.products.created_between(&last_month),
            self.users.created_between(&this_month),
            self.users.created_between(&last_month),
            self.orders.created_between(&this_month),
            self.orders.created_between(&last_month),
            self.products.count(),
            self.users.count(),
            self.orders.all(),
            self.orders.created_between(&six_months),
            self.products.distinct_categories(),
            self.users.count_by_gender(Gender::Female),
            self.orders.latest(LATEST_TRANSACTION_COUNT),
        )?;

        let this_month_revenue: i64 = this_month_orders.iter().map(|o| o.total).sum();
        let last_month_revenue: i64 = last_month_orders.iter().map(|o| o.total).sum();
        let total_revenue: i64 = all_orders.iter().map(|o| o.total).sum();

        let change_percent = ChangePercent {
            revenue: percentage::change_percent(this_month_revenue, last_month_revenue),
            product: percentage::change_percent(
                this_month_products.len() as i64,
                last_month_products.len() as i64,
            ),
            user: percentage::change_percent(
                this_month_users.len() as i64,
                last_month_users.len() as i64,
            ),
            order: percentage::change_percent(
                this_month_orders.len() as i64,
                last_month_orders.len() as i64,
            ),
        };

        let count = CountSummary {
            revenue: total_revenue,
            product: product_count,
            user: user_count,
            order: all_orders.len() as u64,
        };

        let chart = OrderChart {
            order: charts::monthly_counts(&six_month_orders, 6, now),
            revenue: charts::monthly_totals(&six_month_orders, 6, now, |o| o.total),
        };

        let category_count =
            inventory::breakdown(self.products.as_ref(), &categories, product_count).await?;

        let user_ratio = UserRatio {
            male: user_count as i64 - female_count as i64,
            female: female_count as i64,
        };

        let latest_transactions = latest_orders
            .iter()
            .map(|order| TransactionSummary {
                id: order.id,
                discount: order.discount,
                amount: order.total,
                quantity: order.items.len() as u32,
                status: order.status,
            })
            .collect();

        let stats = DashboardStats {
            category_count,
            change_percent,
            count,
            chart,
            user_ratio,
            latest_transactions,
        };
        self.cache.set(keys::ADMIN_STATS, stats.clone());
        Ok(stats)
    }

    /// Composition breakdowns: fulfillment stages, categories, stock, the
    /// revenue split, age groups, and roles
    pub async fn pie_charts(&self, now: DateTime<Utc>) -> Result<PieCharts> {
        if let Some(pie) = self.cache.get::<PieCharts>(keys::ADMIN_PIE_CHARTS) {
            return Ok(pie);
        }
        tracing::debug!(report = "pie", "assembling dashboard report");

        let (
            processing,
            shipped,
            delivered,
            categories,
            product_count,
            out_of_stock,
            all_orders,
            all_users,
            admin_count,
            customer_count,
        ) = tokio::try_join!(
            self.orders.count_by_status(OrderStatus::Processing),
            self.orders.count_by_status(OrderStatus::Shipped),
            self.orders.count_by_status(OrderStatus::Delivered),
            self.products.distinct_categories(),
            self.products.count(),
            self.products.count_out_of_stock(),
            self.orders.all(),
            self.users.all(),
            self.users.count_by_role(Role::Admin),
            self.users.count_by_role(Role::User),
        )?;

        let product_categories =
            inventory::breakdown(self.products.as_ref(), &categories, product_count).await?;

        let gross_income: i64 = all_orders.iter().map(|o| o.total).sum();
        let discount: i64 = all_orders.iter().map(|o| o.discount).sum();
        let production_cost: i64 = all_orders.iter().map(|o| o.shipping_charges).sum();
        let tax: i64 = all_orders.iter().map(|o| o.tax).sum();
        let marketing_cost = (gross_income as f64 * MARKETING_COST_RATE).round() as i64;
        let net_margin = gross_income - discount - production_cost - tax - marketing_cost;

        let today = now.date_naive();
        let mut users_age_group = AgeGroups::default();
        for user in &all_users {
            let age = user.age_on(today);
            if age < 20 {
                users_age_group.teen += 1;
            } else if age < 40 {
                users_age_group.adult += 1;
            } else {
                users_age_group.old += 1;
            }
        }

        let pie = PieCharts {
            order_fulfillment: FulfillmentSplit {
                processing,
                shipped,
                delivered,
            },
            product_categories,
            stock_availability: StockAvailability {
                in_stock: product_count as i64 - out_of_stock as i64,
                out_of_stock,
            },
            revenue_distribution: RevenueDistribution {
                net_margin,
                discount,
                production_cost,
                tax,
                marketing_cost,
            },
            users_age_group,
            admin_customer: AdminCustomerSplit {
                admin: admin_count,
                customer: customer_count,
            },
        };
        self.cache.set(keys::ADMIN_PIE_CHARTS, pie.clone());
        Ok(pie)
    }

    /// Creation counts: products and users over six months, orders over
    /// twelve
    pub async fn bar_charts(&self, now: DateTime<Utc>) -> Result<BarCharts> {
        if let Some(bar) = self.cache.get::<BarCharts>(keys::ADMIN_BAR_CHARTS) {
            return Ok(bar);
        }
        tracing::debug!(report = "bar", "assembling dashboard report");

        let six_months = DateRange::trailing_months(now, 6);
        let twelve_months = DateRange::trailing_months(now, 12);

        let (products, users, orders) = tokio::try_join!(
            self.products.created_between(&six_months),
            self.users.created_between(&six_months),
            self.orders.created_between(&twelve_months),
        )?;

        let bar = BarCharts {
            products: charts::monthly_counts(&products, 6, now),
            users: charts::monthly_counts(&users, 6, now),
            orders: charts::monthly_counts(&orders, 12, now),
        };
        self.cache.set(keys::ADMIN_BAR_CHARTS, bar.clone());
        Ok(bar)
    }

    /// Twelve-month trends, including the discount and revenue sums drawn
    /// from the same order set
    pub async fn line_charts(&self, now: DateTime<Utc>) -> Result<LineCharts> {
        if let Some(line) = self.cache.get::<LineCharts>(keys::ADMIN_LINE_CHARTS) {
            return Ok(line);
        }
        tracing::debug!(report = "line", "assembling dashboard report");

        let twelve_months = DateRange::trailing_months(now, 12);

        let (products, users, orders) = tokio::try_join!(
            self.products.created_between(&twelve_months),
            self.users.created_between(&twelve_months),
            self.orders.created_between(&twelve_months),
        )?;

        let line = LineCharts {
            products: charts::monthly_counts(&products, 12, now),
            users: charts::monthly_counts(&users, 12, now),
            discount: charts::monthly_totals(&orders, 12, now, |o| o.discount),
            revenue: charts::monthly_totals(&orders, 12, now, |o| o.total),
        };
        self.cache.set(keys::ADMIN_LINE_CHARTS, line.clone());
        Ok(line)
    }
}
