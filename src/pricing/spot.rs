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
use crate::pricing::engine::derive_tola_price;
use crate::pricing::weight::GRAMS_PER_TROY_OUNCE;

/// Price of one troy ounce in the reference currency, as entered by the
/// user. Zero means nothing usable was entered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpotPrice {
	per_ounce: f64,
}

impl SpotPrice {
	/// Anything that is not a finite positive number leaves the price unset
	/// rather than failing; calculations refuse to run until it is set.
	pub fn new(per_ounce: f64) -> Self {
		if per_ounce.is_finite() && per_ounce > 0.0 {
			Self { per_ounce }
		} else {
			Self::unset()
		}
	}

	pub fn unset() -> Self {
		Self { per_ounce: 0.0 }
	}

	pub fn is_set(&self) -> bool {
		self.per_ounce > 0.0
	}

	pub fn per_ounce(&self) -> f64 {
		self.per_ounce
	}

	pub fn per_gram(&self) -> f64 {
		self.per_ounce / GRAMS_PER_TROY_OUNCE
	}

	pub fn per_tola(&self) -> f64 {
		derive_tola_price(self.per_ounce)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_input_is_unset() {
		for value in [0.0, -12.0, f64::NAN, f64::INFINITY] {
			let spot = SpotPrice::new(value);
			assert!(!spot.is_set(), "{} should not set a price", value);
			assert_eq!(spot.per_ounce(), 0.0);
			assert_eq!(spot.per_gram(), 0.0);
			assert_eq!(spot.per_tola(), 0.0);
		}
	}

	#[test]
	fn test_derived_prices() {
		let spot = SpotPrice::new(2000.0);
		assert!(spot.is_set());
		assert_eq!(spot.per_ounce(), 2000.0);
		assert!((spot.per_gram() - 64.301_445_175).abs() < 1e-8);
		assert!((spot.per_tola() - 749.999_196_232).abs() < 1e-8);
	}
}
