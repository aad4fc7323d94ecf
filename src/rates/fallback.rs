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

/// Units of each currency per US dollar, used whenever live rates cannot be
/// fetched. Also the base that live rates are laid over, which keeps
/// currencies the live source does not quote (PKR, BDT, NGN, QAR, VND, LKR,
/// NPR with some providers) usable.
pub const FALLBACK_RATES: &[(&str, f64)] = &[
	("USD", 1.0),
	("EUR", 0.92),
	("GBP", 0.79),
	("PKR", 278.0),
	("INR", 83.0),
	("AED", 3.67),
	("SAR", 3.75),
	("CAD", 1.36),
	("AUD", 1.53),
	("JPY", 149.0),
	("CNY", 7.24),
	("CHF", 0.88),
	("TRY", 30.5),
	("MYR", 4.72),
	("SGD", 1.34),
	("HKD", 7.82),
	("KRW", 1320.0),
	("IDR", 15700.0),
	("THB", 35.5),
	("PHP", 56.5),
	("BDT", 110.0),
	("EGP", 30.9),
	("ZAR", 18.5),
	("NGN", 1550.0),
	("BRL", 4.97),
	("MXN", 17.2),
	("RUB", 92.0),
	("PLN", 4.02),
	("SEK", 10.5),
	("NOK", 10.8),
	("DKK", 6.88),
	("NZD", 1.64),
	("CZK", 22.8),
	("HUF", 358.0),
	("ILS", 3.65),
	("KWD", 0.31),
	("QAR", 3.64),
	("BHD", 0.38),
	("OMR", 0.38),
	("JOD", 0.71),
	("MAD", 10.0),
	("KES", 153.0),
	("VND", 24500.0),
	("LKR", 323.0),
	("NPR", 133.0),
	("RON", 4.58),
	("BGN", 1.80),
	("ISK", 138.0),
];
