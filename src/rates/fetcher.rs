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
use crate::config::config_file::RatesConfig;
use crate::rates::exchange_rates::{
	ExchangeRateTable, LoadedRates, RateSource,
};
use anyhow::{bail, Error};
use chrono::Local;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The part of the rate source's document we care about. Rates are units
/// of each currency per US dollar.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
	pub rates: BTreeMap<String, f64>,
}

pub struct RatesClient {
	client: reqwest::blocking::Client,
	url: String,
}

impl RatesClient {
	pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
		Ok(RatesClient {
			client: reqwest::blocking::Client::builder()
				.timeout(timeout)
				.build()?,
			url: url.to_string(),
		})
	}

	pub fn from_config(config: &RatesConfig) -> Result<Self, Error> {
		Self::new(
			config.api_url.as_deref().unwrap_or(DEFAULT_RATES_URL),
			Duration::from_secs(
				config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			),
		)
	}

	/// Sends the GET and decodes the body. Errors on non-2xx response codes
	/// and on bodies without a rates map.
	pub fn fetch(&self) -> Result<RatesResponse, Error> {
		debug!("Sending GET to {}", self.url);
		let response = self.client.get(&self.url).send()?;

		if !response.status().is_success() {
			bail!("Request failed with status: {}", response.status());
		}

		let response_data: RatesResponse = response.json()?;
		Ok(response_data)
	}

	/// Fetches live rates and merges them over the fallback table. Any
	/// failure is logged and answered with the fallback table alone.
	pub fn load(&self) -> LoadedRates {
		match self.fetch() {
			Ok(response) => {
				let table = ExchangeRateTable::merged_with_live(&response.rates);
				info!("Exchange rates loaded ({} currencies)", table.len());
				LoadedRates {
					table,
					source: RateSource::Live {
						fetched_at: Local::now(),
					},
				}
			},
			Err(e) => {
				warn!("Currency API error, using fallback rates: {}", e);
				LoadedRates::fallback(&e.to_string())
			},
		}
	}
}

/// Loads the rate table the way the config asks for: from the network, or
/// straight from the fallback table when offline.
pub fn load_rates(config: &RatesConfig, offline: bool) -> LoadedRates {
	if offline || config.offline.unwrap_or(false) {
		info!("Offline, using fallback rates");
		return LoadedRates::fallback("offline");
	}

	match RatesClient::from_config(config) {
		Ok(client) => client.load(),
		Err(e) => {
			warn!("Unable to build HTTP client, using fallback rates: {}", e);
			LoadedRates::fallback(&e.to_string())
		},
	}
}
