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
use crate::util::quant::Quant;

/// Renders a price for display. How many decimals are shown depends on how
/// large the value is: four-figure-plus aggregates read better whole, while
/// the per-gram price of a weak currency needs its fractions.
///
/// |num| >= 10,000 gives 0 decimals, >= 100 gives exactly 2, and anything
/// smaller gives 2 to 4 with trailing zeros past the second dropped. Ties
/// round away from zero.
pub fn format_magnitude(num: f64) -> String {
	if num.is_nan() {
		return "NaN".to_string();
	}
	if num.is_infinite() {
		let sign = if num < 0.0 { "-" } else { "" };
		return format!("{}∞", sign);
	}

	let (min_places, max_places) = decimal_places(num.abs());

	match Quant::from_f64(num) {
		Ok(mut quant) => {
			quant.round(max_places);
			quant.set_render_precision(min_places);
			format!("{:.*}", max_places as usize, quant)
		},
		// Far past any real price; not worth grouping
		Err(_) => format!("{:.0}", num),
	}
}

fn decimal_places(magnitude: f64) -> (u32, u32) {
	if magnitude >= 10_000.0 {
		(0, 0)
	} else if magnitude >= 100.0 {
		(2, 2)
	} else {
		(2, 4)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_large_values_are_whole() {
		assert_eq!(format_magnitude(15000.0), "15,000");
		assert_eq!(format_magnitude(10000.5), "10,001");
		assert_eq!(format_magnitude(1_234_567.49), "1,234,567");
		assert_eq!(format_magnitude(556000.0), "556,000");
	}

	#[test]
	fn test_mid_values_have_two_places() {
		assert_eq!(format_magnitude(150.5), "150.50");
		assert_eq!(format_magnitude(100.0), "100.00");
		assert_eq!(format_magnitude(1234.567), "1,234.57");
		assert_eq!(format_magnitude(749.9991962319352), "750.00");
	}

	#[test]
	fn test_rounding_can_cross_tiers() {
		assert_eq!(format_magnitude(9999.999), "10,000.00");
		assert_eq!(format_magnitude(99.99996), "100.00");
	}

	#[test]
	fn test_small_values_keep_up_to_four_places() {
		assert_eq!(format_magnitude(5.12345), "5.1235");
		assert_eq!(format_magnitude(64.3014451749803), "64.3014");
		assert_eq!(format_magnitude(5.1), "5.10");
		assert_eq!(format_magnitude(5.0), "5.00");
		assert_eq!(format_magnitude(0.123), "0.123");
		assert_eq!(format_magnitude(0.00004), "0.00");
		assert_eq!(format_magnitude(0.0), "0.00");
	}

	#[test]
	fn test_negative_values_use_magnitude() {
		assert_eq!(format_magnitude(-150.5), "-150.50");
		assert_eq!(format_magnitude(-15000.0), "-15,000");
		assert_eq!(format_magnitude(-0.00001), "0.00");
	}

	#[test]
	fn test_non_finite() {
		assert_eq!(format_magnitude(f64::NAN), "NaN");
		assert_eq!(format_magnitude(f64::INFINITY), "∞");
		assert_eq!(format_magnitude(f64::NEG_INFINITY), "-∞");
	}

	#[test]
	fn test_beyond_renderable() {
		assert_eq!(format_magnitude(1e25), format!("{:.0}", 1e25));
	}
}
