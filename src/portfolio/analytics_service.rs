use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::constants::RISK_FREE_RATE_ANNUAL;
use crate::errors::Result;
use crate::holdings::{
    value_holdings, FxRateSourceTrait, HoldingsRepositoryTrait, LivePriceSourceTrait,
    SnapshotRepositoryTrait, TransactionRepositoryTrait, ValuedHolding,
};
use crate::market_data::{DayRange, MarketDataService};
use crate::portfolio::allocation::{
    calculate_concentration, exposure_breakdown, ConcentrationMetrics, ExposureSlice,
};
use crate::portfolio::benchmark::{align_benchmarks, BenchmarkComparison};
use crate::portfolio::diversification::{
    score_diversification, DiversificationAssessment, ScoringRules,
};
use crate::portfolio::income::{calculate_dividend_analytics, DividendAnalytics};
use crate::portfolio::performance::{
    calculate_sharpe_ratio, calculate_time_weighted_return, TimeWeightedReturn,
};

/// Everything the holdings screens need from one analytics pass.
#[derive(Debug, Clone)]
pub struct PortfolioOverview {
    pub valued_holdings: Vec<ValuedHolding>,
    pub concentration: ConcentrationMetrics,
    pub exposure: Vec<ExposureSlice>,
    pub diversification: DiversificationAssessment,
}

#[derive(Debug, Clone)]
pub struct ReturnsSummary {
    pub time_weighted: Option<TimeWeightedReturn>,
    pub sharpe_ratio: Option<Decimal>,
}

/// Front door of the analytics core. Pulls holdings, transactions and
/// snapshots from the injected stores, runs the pure calculators, and
/// leaves all I/O concerns (persistence, quote fetching, caching) to the
/// collaborators behind the traits.
pub struct AnalyticsService {
    holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    price_source: Arc<dyn LivePriceSourceTrait>,
    fx_source: Arc<dyn FxRateSourceTrait>,
    market_data_service: Arc<MarketDataService>,
    base_currency: String,
    scoring_rules: ScoringRules,
}

impl AnalyticsService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        price_source: Arc<dyn LivePriceSourceTrait>,
        fx_source: Arc<dyn FxRateSourceTrait>,
        market_data_service: Arc<MarketDataService>,
        base_currency: &str,
    ) -> Self {
        AnalyticsService {
            holdings_repository,
            transaction_repository,
            snapshot_repository,
            price_source,
            fx_source,
            market_data_service,
            base_currency: base_currency.to_string(),
            scoring_rules: ScoringRules::default(),
        }
    }

    pub fn with_scoring_rules(mut self, rules: ScoringRules) -> Self {
        self.scoring_rules = rules;
        self
    }

    /// Values the portfolio and derives concentration, exposure and the
    /// diversification assessment in one pass.
    pub fn portfolio_overview(&self, portfolio_id: &str) -> Result<PortfolioOverview> {
        let holdings = self.holdings_repository.list_by_portfolio(portfolio_id)?;
        debug!(
            "Running analytics pass over {} holdings for portfolio '{}'",
            holdings.len(),
            portfolio_id
        );

        let valued = value_holdings(
            &holdings,
            self.price_source.as_ref(),
            self.fx_source.as_ref(),
            &self.base_currency,
        );
        let concentration = calculate_concentration(&valued);
        let exposure = exposure_breakdown(&valued);
        let diversification =
            score_diversification(&valued, &concentration, &self.scoring_rules);

        Ok(PortfolioOverview {
            valued_holdings: valued,
            concentration,
            exposure,
            diversification,
        })
    }

    /// TWRR and Sharpe over the full snapshot history; either figure may
    /// be absent when the history is too thin to support it.
    pub fn returns_summary(&self, portfolio_id: &str) -> Result<ReturnsSummary> {
        let snapshots = self.snapshot_repository.list_since(portfolio_id, None)?;
        let transactions = self.transaction_repository.list_by_portfolio(portfolio_id)?;

        Ok(ReturnsSummary {
            time_weighted: calculate_time_weighted_return(&snapshots, &transactions),
            sharpe_ratio: calculate_sharpe_ratio(&snapshots, RISK_FREE_RATE_ANNUAL),
        })
    }

    /// Fetches candle series for the requested benchmark symbols and
    /// aligns them with the portfolio history. `Ok(None)` means the
    /// portfolio itself has too little history to compare.
    pub async fn benchmark_comparison(
        &self,
        portfolio_id: &str,
        symbols: &[String],
        range: DayRange,
    ) -> Result<Option<BenchmarkComparison>> {
        let snapshots = self.snapshot_repository.list_since(portfolio_id, None)?;
        let candles = self
            .market_data_service
            .get_benchmark_candles(symbols, range)
            .await?;

        Ok(align_benchmarks(&snapshots, &candles, range, Utc::now()))
    }

    pub fn dividend_analytics(&self, portfolio_id: &str) -> Result<DividendAnalytics> {
        let holdings = self.holdings_repository.list_by_portfolio(portfolio_id)?;
        let transactions = self.transaction_repository.list_by_portfolio(portfolio_id)?;

        Ok(calculate_dividend_analytics(
            &transactions,
            &holdings,
            self.fx_source.as_ref(),
            &self.base_currency,
            Utc::now(),
        ))
    }
}
