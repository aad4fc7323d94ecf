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
use std::fmt;

/// Standard gold purities, in the order the reference table lists them.
pub const KARATS: [u8; 6] = [24, 22, 21, 18, 14, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metal {
	Gold,
	Silver,
}

impl Metal {
	pub fn from_str(s: &str) -> Result<Self, anyhow::Error> {
		match s.trim().to_lowercase().as_str() {
			"gold" => Ok(Metal::Gold),
			"silver" => Ok(Metal::Silver),
			_ => anyhow::bail!("unknown metal: {}", s),
		}
	}

	/// Resolves the purity to price at. Gold defaults to 24K; silver only
	/// comes pure.
	pub fn purity(&self, karat: Option<u8>) -> Result<Purity, PricingError> {
		match (self, karat) {
			(Metal::Gold, None) => Ok(Purity::Karat(24)),
			(Metal::Gold, Some(k)) => Purity::from_karat(k),
			(Metal::Silver, None) => Ok(Purity::Pure),
			(Metal::Silver, Some(_)) => Err(PricingError::NoKaratForSilver),
		}
	}
}

impl fmt::Display for Metal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Metal::Gold => write!(f, "gold"),
			Metal::Silver => write!(f, "silver"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Purity {
	Karat(u8),
	Pure,
}

impl Purity {
	pub fn from_karat(karat: u8) -> Result<Self, PricingError> {
		if KARATS.contains(&karat) {
			Ok(Purity::Karat(karat))
		} else {
			Err(PricingError::UnsupportedKarat(karat))
		}
	}

	/// Share of pure metal, karat / 24.
	pub fn factor(&self) -> f64 {
		match self {
			Purity::Karat(k) => karat_factor(*k),
			Purity::Pure => 1.0,
		}
	}

	pub fn label(&self, metal: Metal) -> String {
		match (self, metal) {
			(Purity::Karat(k), _) => format!("{}K", k),
			(Purity::Pure, Metal::Silver) => "Pure Silver".to_string(),
			(Purity::Pure, Metal::Gold) => "Pure Gold".to_string(),
		}
	}
}

pub fn karat_factor(karat: u8) -> f64 {
	karat as f64 / 24.0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_factors() {
		assert_eq!(Purity::Karat(24).factor(), 1.0);
		assert_eq!(Purity::Karat(18).factor(), 0.75);
		assert_eq!(Purity::Karat(12).factor(), 0.5);
		assert_eq!(Purity::Pure.factor(), 1.0);
		assert!((Purity::Karat(22).factor() - 0.916_666_666_7).abs() < 1e-9);
	}

	#[test]
	fn test_only_standard_karats() {
		for k in KARATS {
			assert_eq!(Purity::from_karat(k), Ok(Purity::Karat(k)));
		}
		assert_eq!(
			Purity::from_karat(15),
			Err(PricingError::UnsupportedKarat(15))
		);
		assert_eq!(Purity::from_karat(0), Err(PricingError::UnsupportedKarat(0)));
	}

	#[test]
	fn test_metal_purity() {
		assert_eq!(Metal::Gold.purity(None), Ok(Purity::Karat(24)));
		assert_eq!(Metal::Gold.purity(Some(18)), Ok(Purity::Karat(18)));
		assert_eq!(Metal::Silver.purity(None), Ok(Purity::Pure));
		assert_eq!(
			Metal::Silver.purity(Some(22)),
			Err(PricingError::NoKaratForSilver)
		);
	}

	#[test]
	fn test_labels() {
		assert_eq!(Purity::Karat(21).label(Metal::Gold), "21K");
		assert_eq!(Purity::Pure.label(Metal::Silver), "Pure Silver");
	}

	#[test]
	fn test_metal_from_str() {
		assert_eq!(Metal::from_str("Silver").unwrap(), Metal::Silver);
		assert!(Metal::from_str("platinum").is_err());
	}
}
