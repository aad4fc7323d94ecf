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
use crate::pricing::error::PricingError;
use crate::pricing::purity::karat_factor;
use crate::pricing::spot::SpotPrice;
use crate::pricing::weight::{
	WeightSpec, GRAMS_PER_TOLA, GRAMS_PER_TROY_OUNCE,
};
use crate::rates::exchange_rates::ExchangeRateTable;

/// How a final price was arrived at.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
	pub grams: f64,
	pub purity_factor: f64,

	/// In the reference currency, for pure metal
	pub price_per_gram: f64,

	/// Units of the target currency per unit of the reference currency;
	/// 1.0 when the target currency has no rate.
	pub exchange_rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceResult {
	pub price: f64,
	pub currency: String,
	pub breakdown: Breakdown,
}

/// One line of the reference table; all prices in the target currency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceRow {
	pub karat: u8,
	pub per_gram: f64,
	pub per_tola: f64,
	pub per_ounce: f64,
}

/// Price per tola given a price per troy ounce. Zero when no usable price
/// is given.
pub fn derive_tola_price(spot_per_ounce: f64) -> f64 {
	// NaN fails this comparison too
	if !(spot_per_ounce > 0.0) {
		return 0.0;
	}
	(spot_per_ounce / GRAMS_PER_TROY_OUNCE) * GRAMS_PER_TOLA
}

/// Prices a weight of metal at the given purity in the given currency.
pub fn compute_final_price(
	spot: SpotPrice,
	weight: &WeightSpec,
	purity_factor: f64,
	currency: &str,
	rates: &ExchangeRateTable,
) -> Result<PriceResult, PricingError> {
	if !spot.is_set() {
		return Err(PricingError::NoSpotPrice);
	}
	if !weight.is_valid() {
		return Err(PricingError::InvalidWeight(weight.magnitude));
	}

	let price_per_gram = spot.per_gram();
	let grams = weight.grams();
	let exchange_rate = rates.effective_rate(currency);

	// Equal to price_per_gram * grams, but exact when pricing whole ounces
	let ounces = grams / GRAMS_PER_TROY_OUNCE;
	let price = spot.per_ounce() * ounces * purity_factor * exchange_rate;

	Ok(PriceResult {
		price,
		currency: currency.to_string(),
		breakdown: Breakdown {
			grams,
			purity_factor,
			price_per_gram,
			exchange_rate,
		},
	})
}

/// Per-gram, per-tola and per-ounce prices for each karat, in the order
/// given. Empty when no spot price is set.
pub fn build_reference_table(
	spot: SpotPrice,
	currency: &str,
	rates: &ExchangeRateTable,
	karats: &[u8],
) -> Vec<ReferenceRow> {
	if !spot.is_set() {
		return Vec::new();
	}

	let exchange_rate = rates.effective_rate(currency);

	karats
		.iter()
		.map(|&karat| {
			let factor = karat_factor(karat);
			let per_gram = spot.per_gram() * factor * exchange_rate;
			ReferenceRow {
				karat,
				per_gram,
				per_tola: per_gram * GRAMS_PER_TOLA,
				per_ounce: spot.per_ounce() * factor * exchange_rate,
			}
		})
		.collect()
}
