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
use clap::ValueEnum;

pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;
pub const GRAMS_PER_TOLA: f64 = 11.6638;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// The closed set of mass units a weight can be entered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WeightUnit {
	Gram,
	Tola,
	/// Always the troy ounce
	Ounce,
	#[value(name = "kg")]
	Kilogram,
}

impl WeightUnit {
	pub fn grams_per_unit(&self) -> f64 {
		match self {
			WeightUnit::Gram => 1.0,
			WeightUnit::Tola => GRAMS_PER_TOLA,
			WeightUnit::Ounce => GRAMS_PER_TROY_OUNCE,
			WeightUnit::Kilogram => GRAMS_PER_KILOGRAM,
		}
	}

	/// Parses a unit by name. Anything outside the four known units is an
	/// error; a magnitude is never silently taken to be in grams.
	pub fn from_str(s: &str) -> Result<Self, PricingError> {
		match s.trim().to_lowercase().as_str() {
			"gram" | "g" => Ok(WeightUnit::Gram),
			"tola" => Ok(WeightUnit::Tola),
			"ounce" | "oz" => Ok(WeightUnit::Ounce),
			"kg" | "kilogram" => Ok(WeightUnit::Kilogram),
			_ => Err(PricingError::UnknownUnit(s.to_string())),
		}
	}

	/// Human label, pluralized unless the magnitude is exactly one.
	pub fn label(&self, magnitude: f64) -> &'static str {
		let singular = magnitude == 1.0;
		match self {
			WeightUnit::Gram if singular => "gram",
			WeightUnit::Gram => "grams",
			WeightUnit::Tola if singular => "tola",
			WeightUnit::Tola => "tolas",
			WeightUnit::Ounce if singular => "troy ounce",
			WeightUnit::Ounce => "troy ounces",
			WeightUnit::Kilogram if singular => "kilogram",
			WeightUnit::Kilogram => "kilograms",
		}
	}
}

/// A weight as entered: not validated until it is priced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightSpec {
	pub magnitude: f64,
	pub unit: WeightUnit,
}

impl WeightSpec {
	pub fn new(magnitude: f64, unit: WeightUnit) -> Self {
		Self { magnitude, unit }
	}

	pub fn is_valid(&self) -> bool {
		self.magnitude.is_finite() && self.magnitude > 0.0
	}

	pub fn grams(&self) -> f64 {
		convert_weight_to_grams(self.magnitude, self.unit)
	}
}

impl std::fmt::Display for WeightSpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.magnitude, self.unit.label(self.magnitude))
	}
}

pub fn convert_weight_to_grams(magnitude: f64, unit: WeightUnit) -> f64 {
	magnitude * unit.grams_per_unit()
}
