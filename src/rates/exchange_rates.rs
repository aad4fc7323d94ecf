/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::rates::fallback::FALLBACK_RATES;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Spot prices are entered in this currency, and every rate is quoted
/// against it.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Units of each currency per one unit of the reference currency. Always
/// holds the reference currency at exactly 1.0.
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeRateTable {
	rates: BTreeMap<String, f64>,
}

impl ExchangeRateTable {
	pub fn fallback() -> Self {
		Self {
			rates: FALLBACK_RATES
				.iter()
				.map(|(code, rate)| (code.to_string(), *rate))
				.collect(),
		}
	}

	/// Lays live rates over the fallback table. Live values win; entries
	/// that are not finite and positive are dropped. The reference currency
	/// is then forced back to 1.0 whatever the live source said about it,
	/// which also hides a bad reference rate from that source.
	pub fn merged_with_live(live: &BTreeMap<String, f64>) -> Self {
		let mut table = Self::fallback();

		for (code, rate) in live {
			if !rate.is_finite() || *rate <= 0.0 {
				debug!("ignoring live rate {} for {}", rate, code);
				continue;
			}
			table.rates.insert(code.to_uppercase(), *rate);
		}

		table.rates.insert(REFERENCE_CURRENCY.to_string(), 1.0);
		table
	}

	pub fn rate_for(&self, currency: &str) -> Option<f64> {
		self.rates.get(currency).copied()
	}

	/// The rate to price with. A currency missing from the table prices as
	/// though it were the reference currency; this never fails.
	pub fn effective_rate(&self, currency: &str) -> f64 {
		self.rate_for(currency).unwrap_or_else(|| {
			warn!("no exchange rate for {}, using 1.0", currency);
			1.0
		})
	}

	pub fn len(&self) -> usize {
		self.rates.len()
	}
}

/// Where a rate table came from, so a caller can tell the user when the
/// figures are not current.
#[derive(Clone, Debug, PartialEq)]
pub enum RateSource {
	Live { fetched_at: DateTime<Local> },
	Fallback { reason: String },
}

#[derive(Clone, Debug)]
pub struct LoadedRates {
	pub table: ExchangeRateTable,
	pub source: RateSource,
}

impl LoadedRates {
	pub fn fallback(reason: &str) -> Self {
		Self {
			table: ExchangeRateTable::fallback(),
			source: RateSource::Fallback {
				reason: reason.to_string(),
			},
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self.source, RateSource::Fallback { .. })
	}
}
