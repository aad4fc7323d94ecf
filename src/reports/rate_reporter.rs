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
use crate::pricing::format::format_magnitude;
use crate::rates::country::sorted_by_name;
use crate::rates::exchange_rates::{LoadedRates, RateSource};
use crate::reports::table::Table;

pub struct RateReporter {
	rates: LoadedRates,
}

impl RateReporter {
	pub fn new(rates: LoadedRates) -> RateReporter {
		Self { rates }
	}

	/// Prints the rate of every listed country's currency, by country name.
	pub fn print_all_rates(&self) {
		self.rate_table().print();
		println!();
		println!("{}", describe_source(&self.rates.source));
	}

	fn rate_table(&self) -> Table {
		let mut table = Table::new(5);
		table.right_align(vec![4]);

		table.add_header(vec!["Country", "Code", "Currency", "Symbol", "Rate"]);
		table.add_separator();

		for country in sorted_by_name() {
			let rate = match self.rates.table.rate_for(country.currency) {
				Some(rate) => format_magnitude(rate),
				None => "-".to_string(),
			};

			table.add_row(vec![
				country.name,
				country.code,
				country.currency,
				country.symbol,
				&rate,
			]);
		}

		table
	}
}

/// One line telling the user how current the rates are.
pub fn describe_source(source: &RateSource) -> String {
	match source {
		RateSource::Live { fetched_at } => {
			format!("Live exchange rates, updated {}", fetched_at.format("%H:%M"))
		},
		RateSource::Fallback { reason } => {
			format!("Using fallback exchange rates ({})", reason)
		},
	}
}

/// Prints the fallback notice after a report, if it applies.
pub fn print_fallback_note(rates: &LoadedRates) {
	if rates.is_fallback() {
		println!();
		println!("{}", describe_source(&rates.source));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::country::COUNTRIES;
	use chrono::{Local, TimeZone};

	#[test]
	fn test_rate_table_lists_every_country() {
		let reporter = RateReporter::new(LoadedRates::fallback("offline"));
		let rendered = reporter.rate_table().render();
		let lines: Vec<&str> = rendered.lines().collect();

		assert_eq!(lines.len(), COUNTRIES.len() + 2);
		assert!(lines[2].starts_with("Australia"));
		assert!(lines[2].ends_with("1.53"));
		assert!(lines.iter().any(|l| l.starts_with("Pakistan")
			&& l.ends_with("278.00")));
		assert!(lines.iter().any(|l| l.starts_with("Indonesia")
			&& l.ends_with("15,700")));
	}

	#[test]
	fn test_describe_source() {
		let fetched_at = Local.with_ymd_and_hms(2025, 3, 1, 9, 5, 0).unwrap();
		assert_eq!(
			describe_source(&RateSource::Live { fetched_at }),
			"Live exchange rates, updated 09:05"
		);
		assert_eq!(
			describe_source(&RateSource::Fallback {
				reason: "offline".to_string()
			}),
			"Using fallback exchange rates (offline)"
		);
	}
}
