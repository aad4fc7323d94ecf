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
use anyhow::{anyhow, bail, Error};
use std::fmt;

/// A decimal number backed by a fraction of u128s. Prices are computed as
/// floats; this exists so they can be rounded and rendered the way a person
/// reads them, from the shortest decimal that represents the float rather
/// than from its binary expansion.
///
/// Automatically simplifies its underlying fractional representation.
#[derive(Clone, Copy, Debug)]
pub struct Quant {
	numerator: u128,
	denominator: u128,

	/// Is always false if the numerator is zero, else is intuitive.
	is_negative: bool,

	/// The minimum number of decimal places to render. More are rendered
	/// when the formatter asks for them and the value has them.
	///
	/// Has no effect on the underlying fraction.
	render_precision: u32,
}

impl Quant {
	/// Floats at or beyond this magnitude are refused by `from_f64`; below
	/// it, rounding to a handful of decimal places cannot overflow.
	pub const MAX_FLOAT: f64 = 1e20;

	/// Decimal places kept when reading a float. Rounding half away from
	/// zero to fewer places than this only depends on the digits kept.
	const FLOAT_DIGITS: usize = 12;

	pub fn from_str(input: &str) -> Result<Self, Error> {
		// Check for negative sign explicitly and removing it for parsing
		let is_negative = input.starts_with('-');
		let sanitized = input.trim_start_matches('-');

		let (numerator, denominator, precision) =
			match sanitized.split_once('.') {
				None => (sanitized.parse::<u128>()?, 1, 0),
				Some((whole, decimal)) => {
					if decimal.contains('.') {
						bail!("Invalid decimal format");
					}
					let precision = decimal.len() as u32;
					let scale = 10u128
						.checked_pow(precision)
						.ok_or_else(|| anyhow!("too many decimal places"))?;
					let numerator = whole
						.parse::<u128>()?
						.checked_mul(scale)
						.and_then(|n| n.checked_add(decimal.parse().ok()?))
						.ok_or_else(|| anyhow!("invalid decimal: {}", input))?;
					(numerator, scale, precision)
				},
			};

		let mut out = Self {
			numerator,
			denominator,
			render_precision: precision,
			is_negative: is_negative && numerator > 0,
		};
		out.reduce();
		Ok(out)
	}

	/// Reads a float through its shortest round-tripping decimal form, so
	/// that e.g. 5.12345 is 512345/100000 and not the nearest binary value.
	pub fn from_f64(value: f64) -> Result<Self, Error> {
		if !value.is_finite() {
			bail!("{} has no decimal form", value);
		}
		if value.abs() >= Self::MAX_FLOAT {
			bail!("{} is too large to render", value);
		}

		let repr = value.to_string();
		match repr.split_once('.') {
			Some((whole, decimal)) if decimal.len() > Self::FLOAT_DIGITS => {
				Self::from_str(&format!(
					"{}.{}",
					whole,
					&decimal[..Self::FLOAT_DIGITS]
				))
			},
			_ => Self::from_str(&repr),
		}
	}

	/// Modifies the underlying fraction to represent a value that is rounded
	/// off to the given number of decimal places, with ties rounded away from
	/// zero. Only meant for values read by `from_f64` and a few places.
	pub fn round(&mut self, decimal_places: u32) {
		self.reduce();

		let scale = 10u128.pow(decimal_places);
		let scaled_numerator = self.numerator * scale;
		let quotient = scaled_numerator / self.denominator;
		let remainder = scaled_numerator % self.denominator;

		let rounded_quotient = if remainder * 2 >= self.denominator {
			quotient + 1
		} else {
			quotient
		};

		self.numerator = rounded_quotient;
		self.denominator = scale;
		self.is_negative = self.is_negative && rounded_quotient > 0;

		self.reduce();
	}

	pub fn set_render_precision(&mut self, precision: u32) {
		self.render_precision = precision;
	}

	/// Reduces the underlying fraction as much as possible while still
	/// representing the same value.
	fn reduce(&mut self) {
		let gcd = Self::gcd(self.numerator, self.denominator);
		self.numerator /= gcd;
		self.denominator /= gcd;
	}

	/// Implementation of Euclid's algorithm for greatest common divisor
	fn gcd(mut a: u128, mut b: u128) -> u128 {
		while b != 0 {
			let temp = b;
			b = a % b;
			a = temp;
		}
		a
	}
}

/// Renders at least `render_precision` decimal places, and at most the
/// formatter's precision when one is given. Digits past the minimum are
/// dropped when they are trailing zeros. The integer part is grouped in
/// thousands with commas.
impl fmt::Display for Quant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let integer_part = self.numerator / self.denominator;
		let mut remainder = self.numerator % self.denominator;

		let mut fraction_str = String::new();
		let precision = f.precision().unwrap_or(self.render_precision as usize);
		for _ in 0..precision {
			if remainder == 0 {
				break;
			}
			remainder *= 10;
			let digit = remainder / self.denominator;
			remainder %= self.denominator;
			fraction_str.push(std::char::from_digit(digit as u32, 10).unwrap());
		}

		if fraction_str.len() < self.render_precision as usize {
			let zeros_to_add =
				self.render_precision as usize - fraction_str.len();
			fraction_str.push_str(&"0".repeat(zeros_to_add));
		}

		while fraction_str.ends_with('0')
			&& fraction_str.len() > self.render_precision as usize
		{
			fraction_str.pop();
		}

		let mut int_str = integer_part.to_string();
		let mut i = int_str.len() as isize - 3;
		while i > 0 {
			int_str.insert(i as usize, ',');
			i -= 3;
		}

		let formatted = if fraction_str.is_empty() {
			int_str
		} else {
			format!("{}.{}", int_str, fraction_str)
		};

		if self.is_negative {
			write!(f, "-{}", formatted)
		} else {
			write!(f, "{}", formatted)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod parsing {
		use super::*;

		#[test]
		fn test_from_str_integer() {
			let quant = Quant::from_str("2000").unwrap();
			assert_eq!(quant.numerator, 2000);
			assert_eq!(quant.denominator, 1);
			assert_eq!(quant.render_precision, 0);
		}

		#[test]
		fn test_from_str_decimal_reduces() {
			let quant = Quant::from_str("31.1035").unwrap();
			assert_eq!(quant.numerator, 62207);
			assert_eq!(quant.denominator, 2000);
			assert_eq!(quant.render_precision, 4);
		}

		#[test]
		fn test_from_str_negative_zero() {
			let quant = Quant::from_str("-0.00").unwrap();
			assert!(!quant.is_negative);
			assert_eq!(quant.to_string(), "0.00");
		}

		#[test]
		fn test_from_str_invalid() {
			assert!(Quant::from_str("1.2.3").is_err());
			assert!(Quant::from_str("abc").is_err());
			assert!(Quant::from_str("").is_err());
			assert!(Quant::from_str("1.").is_err());
		}

		#[test]
		fn test_from_str_too_precise() {
			let input = format!("1.{}", "1".repeat(40));
			assert!(Quant::from_str(&input).is_err());
		}

		#[test]
		fn test_from_f64_uses_shortest_form() {
			let quant = Quant::from_f64(5.12345).unwrap();
			assert_eq!(quant.numerator, 102469);
			assert_eq!(quant.denominator, 20000);
		}

		#[test]
		fn test_from_f64_truncates_long_fractions() {
			let quant = Quant::from_f64(1.0 / 3.0).unwrap();
			assert_eq!(quant.denominator, 10u128.pow(12));
			assert_eq!(quant.numerator, 333_333_333_333);
		}

		#[test]
		fn test_from_f64_tiny() {
			let quant = Quant::from_f64(1e-7).unwrap();
			assert_eq!(quant.numerator, 1);
			assert_eq!(quant.denominator, 10_000_000);
		}

		#[test]
		fn test_from_f64_refuses_non_finite_and_huge() {
			assert!(Quant::from_f64(f64::NAN).is_err());
			assert!(Quant::from_f64(f64::INFINITY).is_err());
			assert!(Quant::from_f64(-1e25).is_err());
			assert!(Quant::from_f64(9.9e19).is_ok());
		}
	}

	mod rounding {
		use super::*;

		fn rounded(value: f64, places: u32) -> String {
			let mut quant = Quant::from_f64(value).unwrap();
			quant.round(places);
			quant.set_render_precision(places);
			quant.to_string()
		}

		#[test]
		fn test_round_down() {
			assert_eq!(rounded(64.30144517, 4), "64.3014");
		}

		#[test]
		fn test_round_up() {
			assert_eq!(rounded(749.9991962, 2), "750.00");
		}

		#[test]
		fn test_ties_away_from_zero() {
			assert_eq!(rounded(5.12345, 4), "5.1235");
			assert_eq!(rounded(2.5, 0), "3");
			assert_eq!(rounded(-2.5, 0), "-3");
			assert_eq!(rounded(0.125, 2), "0.13");
		}

		#[test]
		fn test_round_to_zero_drops_sign() {
			assert_eq!(rounded(-0.0004, 2), "0.00");
		}
	}

	mod display {
		use super::*;

		#[test]
		fn test_grouping() {
			let quant = Quant::from_str("1234567").unwrap();
			assert_eq!(quant.to_string(), "1,234,567");

			let quant = Quant::from_str("-123456.5").unwrap();
			assert_eq!(quant.to_string(), "-123,456.5");

			let quant = Quant::from_str("100").unwrap();
			assert_eq!(quant.to_string(), "100");
		}

		#[test]
		fn test_minimum_precision_pads() {
			let mut quant = Quant::from_str("5.1").unwrap();
			quant.set_render_precision(2);
			assert_eq!(format!("{:.4}", quant), "5.10");
		}

		#[test]
		fn test_formatter_precision_caps() {
			let mut quant = Quant::from_str("5.123").unwrap();
			quant.set_render_precision(2);
			assert_eq!(format!("{:.4}", quant), "5.123");
			assert_eq!(format!("{:.2}", quant), "5.12");
		}

		#[test]
		fn test_trailing_zeros_trimmed_past_minimum() {
			let mut quant = Quant::from_str("7.1000").unwrap();
			quant.set_render_precision(2);
			assert_eq!(format!("{:.4}", quant), "7.10");
		}
	}
}
