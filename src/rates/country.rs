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

/// A country a price can be shown for, and how its currency is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Country {
	pub name: &'static str,
	pub code: &'static str,
	pub currency: &'static str,
	pub symbol: &'static str,
}

/// Shown for a currency no listed country uses.
pub const DEFAULT_SYMBOL: &str = "$";

const fn country(
	name: &'static str,
	code: &'static str,
	currency: &'static str,
	symbol: &'static str,
) -> Country {
	Country {
		name,
		code,
		currency,
		symbol,
	}
}

pub const COUNTRIES: &[Country] = &[
	country("United States", "US", "USD", "$"),
	country("Pakistan", "PK", "PKR", "₨"),
	country("India", "IN", "INR", "₹"),
	country("United Arab Emirates", "AE", "AED", "د.إ"),
	country("Saudi Arabia", "SA", "SAR", "﷼"),
	country("United Kingdom", "GB", "GBP", "£"),
	country("European Union", "EU", "EUR", "€"),
	country("Canada", "CA", "CAD", "C$"),
	country("Australia", "AU", "AUD", "A$"),
	country("Japan", "JP", "JPY", "¥"),
	country("China", "CN", "CNY", "¥"),
	country("Switzerland", "CH", "CHF", "Fr"),
	country("Turkey", "TR", "TRY", "₺"),
	country("Malaysia", "MY", "MYR", "RM"),
	country("Singapore", "SG", "SGD", "S$"),
	country("Hong Kong", "HK", "HKD", "HK$"),
	country("South Korea", "KR", "KRW", "₩"),
	country("Indonesia", "ID", "IDR", "Rp"),
	country("Thailand", "TH", "THB", "฿"),
	country("Philippines", "PH", "PHP", "₱"),
	country("Bangladesh", "BD", "BDT", "৳"),
	country("Egypt", "EG", "EGP", "E£"),
	country("South Africa", "ZA", "ZAR", "R"),
	country("Nigeria", "NG", "NGN", "₦"),
	country("Brazil", "BR", "BRL", "R$"),
	country("Mexico", "MX", "MXN", "MX$"),
	country("Russia", "RU", "RUB", "₽"),
	country("Poland", "PL", "PLN", "zł"),
	country("Sweden", "SE", "SEK", "kr"),
	country("Norway", "NO", "NOK", "kr"),
	country("Denmark", "DK", "DKK", "kr"),
	country("New Zealand", "NZ", "NZD", "NZ$"),
	country("Czech Republic", "CZ", "CZK", "Kč"),
	country("Hungary", "HU", "HUF", "Ft"),
	country("Israel", "IL", "ILS", "₪"),
	country("Kuwait", "KW", "KWD", "د.ك"),
	country("Qatar", "QA", "QAR", "ر.ق"),
	country("Bahrain", "BH", "BHD", ".د.ب"),
	country("Oman", "OM", "OMR", "ر.ع."),
	country("Jordan", "JO", "JOD", "د.ا"),
	country("Morocco", "MA", "MAD", "د.م."),
	country("Kenya", "KE", "KES", "KSh"),
	country("Vietnam", "VN", "VND", "₫"),
	country("Sri Lanka", "LK", "LKR", "Rs"),
	country("Nepal", "NP", "NPR", "रू"),
	country("Romania", "RO", "RON", "lei"),
	country("Bulgaria", "BG", "BGN", "лв"),
	country("Croatia", "HR", "EUR", "€"),
	country("Iceland", "IS", "ISK", "kr"),
];

/// Symbol of the first listed country using the currency.
pub fn symbol_for(currency: &str) -> &'static str {
	COUNTRIES
		.iter()
		.find(|c| c.currency == currency)
		.map(|c| c.symbol)
		.unwrap_or(DEFAULT_SYMBOL)
}

pub fn sorted_by_name() -> Vec<&'static Country> {
	let mut countries: Vec<&Country> = COUNTRIES.iter().collect();
	countries.sort_by(|a, b| a.name.cmp(b.name));
	countries
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::fallback::FALLBACK_RATES;

	#[test]
	fn test_symbol_lookup() {
		assert_eq!(symbol_for("PKR"), "₨");
		assert_eq!(symbol_for("USD"), "$");
		assert_eq!(symbol_for("EUR"), "€");
		assert_eq!(symbol_for("XYZ"), DEFAULT_SYMBOL);
	}

	#[test]
	fn test_sorted_by_name() {
		let sorted = sorted_by_name();
		assert_eq!(sorted.len(), COUNTRIES.len());
		assert_eq!(sorted[0].name, "Australia");
		assert_eq!(sorted[sorted.len() - 1].name, "Vietnam");
		assert!(sorted.windows(2).all(|w| w[0].name <= w[1].name));
	}

	#[test]
	fn test_every_currency_has_fallback_rate() {
		for country in COUNTRIES {
			assert!(
				FALLBACK_RATES.iter().any(|(code, _)| *code == country.currency),
				"{} has no fallback rate",
				country.currency
			);
		}
	}
}
