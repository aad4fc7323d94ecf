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
use thiserror::Error;

/// Reasons a calculation is refused. None of them leave anything behind;
/// the caller fixes its input and asks again.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
	#[error("Please enter the price per ounce first")]
	NoSpotPrice,

	#[error("Please enter a valid weight greater than 0 (got {0})")]
	InvalidWeight(f64),

	#[error("Unsupported karat: {0} (expected one of 24, 22, 21, 18, 14, 10)")]
	UnsupportedKarat(u8),

	#[error("Unknown weight unit: {0}")]
	UnknownUnit(String),

	#[error("Silver is priced as pure; karat does not apply")]
	NoKaratForSilver,
}
