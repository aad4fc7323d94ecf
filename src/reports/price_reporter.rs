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
use crate::pricing::engine::{PriceResult, ReferenceRow};
use crate::pricing::format::format_magnitude;
use crate::pricing::purity::{Metal, Purity};
use crate::pricing::spot::SpotPrice;
use crate::pricing::weight::WeightSpec;
use crate::rates::country::symbol_for;
use crate::rates::exchange_rates::REFERENCE_CURRENCY;
use crate::reports::table::Table;

/// Lays out prices for one metal in one currency.
pub struct PriceReporter {
	metal: Metal,
	currency: String,
	symbol: &'static str,
}

impl PriceReporter {
	pub fn new(metal: Metal, currency: &str) -> Self {
		Self {
			metal,
			currency: currency.to_string(),
			symbol: symbol_for(currency),
		}
	}

	/// Prints a final price and how it was reached.
	pub fn print_result(
		&self,
		result: &PriceResult,
		weight: &WeightSpec,
		purity: Purity,
	) {
		self.result_table(result, weight, purity).print();
	}

	/// Prints the per-karat reference table, or a prompt when there is
	/// nothing to show yet.
	pub fn print_reference_table(&self, rows: &[ReferenceRow]) {
		match self.reference_table(rows) {
			Some(table) => {
				println!("{} prices in {}", self.metal_title(), self.currency);
				table.print();
			},
			None => println!("Enter {} price to see table", self.metal),
		}
	}

	/// Prints what the spot price works out to per unit, in the reference
	/// currency.
	pub fn print_spot(&self, spot: SpotPrice) {
		if !spot.is_set() {
			println!("Enter {} price per ounce to see prices", self.metal);
			return;
		}
		Self::spot_table(spot).print();
	}

	fn result_table(
		&self,
		result: &PriceResult,
		weight: &WeightSpec,
		purity: Purity,
	) -> Table {
		let b = &result.breakdown;

		let mut table = Table::new(2);
		table.right_align(vec![1]);

		table.add_row(vec!["Price", &self.money(result.price)]);
		table.add_row(vec!["Currency", &result.currency]);
		table.add_separator();
		table.add_row(vec!["Weight", &weight.to_string()]);
		table.add_row(vec!["Purity", &purity.label(self.metal)]);
		table.add_row(vec!["Spot price", &format!("${:.2}/g", b.price_per_gram)]);
		table.add_row(vec!["Purity factor", &format!("{:.3}", b.purity_factor)]);
		table.add_row(vec![
			"Exchange rate",
			&format!(
				"1 {} = {:.2} {}",
				REFERENCE_CURRENCY, b.exchange_rate, result.currency
			),
		]);

		table
	}

	fn reference_table(&self, rows: &[ReferenceRow]) -> Option<Table> {
		if rows.is_empty() {
			return None;
		}

		let mut table = Table::new(4);
		table.right_align(vec![1, 2, 3]);

		table.add_header(vec!["Purity", "Per Gram", "Per Tola", "Per Ounce"]);
		table.add_separator();

		for row in rows {
			table.add_row(vec![
				&format!("{}K", row.karat),
				&self.money(row.per_gram),
				&self.money(row.per_tola),
				&self.money(row.per_ounce),
			]);
		}

		Some(table)
	}

	fn spot_table(spot: SpotPrice) -> Table {
		let mut table = Table::new(3);
		table.right_align(vec![1]);

		for (unit, price) in [
			("Ounce", spot.per_ounce()),
			("Gram", spot.per_gram()),
			("Tola", spot.per_tola()),
		] {
			table.add_row(vec![
				unit,
				&format!("${}", format_magnitude(price)),
				REFERENCE_CURRENCY,
			]);
		}

		table
	}

	fn money(&self, value: f64) -> String {
		format!("{}{}", self.symbol, format_magnitude(value))
	}

	fn metal_title(&self) -> &'static str {
		match self.metal {
			Metal::Gold => "Gold",
			Metal::Silver => "Silver",
		}
	}
}
