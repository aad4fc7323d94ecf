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
use crate::config::config_file::Config;
use crate::pricing::engine::{build_reference_table, compute_final_price};
use crate::pricing::purity::{Metal, KARATS};
use crate::pricing::spot::SpotPrice;
use crate::pricing::weight::{WeightSpec, WeightUnit};
use crate::rates::exchange_rates::REFERENCE_CURRENCY;
use crate::rates::fetcher::load_rates;
use crate::reports::price_reporter::PriceReporter;
use crate::reports::rate_reporter::{print_fallback_note, RateReporter};
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

mod config;
mod pricing;
mod rates;
mod reports;
mod util;

#[derive(Parser)]
#[command(
	name = "karat",
	version = "1.0",
	about = "Gold and silver price calculator"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Spot price of one troy ounce, in USD
	#[arg(short, long)]
	spot: Option<f64>,

	/// Weight of metal to price
	#[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
	weight: f64,

	/// Unit the weight is given in (default: gram)
	#[arg(short, long)]
	unit: Option<WeightUnit>,

	/// Purity of gold in karats (default: 24)
	#[arg(short, long)]
	karat: Option<u8>,

	/// Metal to price (default: gold)
	#[arg(short, long)]
	metal: Option<Metal>,

	/// Currency to show prices in (default: USD)
	#[arg(short, long)]
	currency: Option<String>,

	/// Use built-in exchange rates instead of fetching live ones
	#[arg(long)]
	offline: bool,

	/// Custom config file location (default: ~/.config/karat/config.toml)
	#[arg(long)]
	config: Option<String>,
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Price, // price of a given weight and purity
	Table, // reference table across karats
	Spot,  // spot price per ounce, gram and tola
	Rates, // exchange rates by country
}

/// What to price, after flags and config defaults are combined. Flags win.
struct Selection {
	metal: Metal,
	unit: WeightUnit,
	currency: String,
}

impl Selection {
	fn resolve(args: &Cli, config: &Config) -> Result<Self, Error> {
		let defaults = config.defaults();

		let metal = match (args.metal, &defaults.metal) {
			(Some(metal), _) => metal,
			(None, Some(name)) => Metal::from_str(name)?,
			(None, None) => Metal::Gold,
		};

		let unit = match (args.unit, &defaults.unit) {
			(Some(unit), _) => unit,
			(None, Some(name)) => WeightUnit::from_str(name)?,
			(None, None) => WeightUnit::Gram,
		};

		let currency = args
			.currency
			.as_ref()
			.or(defaults.currency.as_ref())
			.map(|c| c.trim().to_uppercase())
			.unwrap_or_else(|| REFERENCE_CURRENCY.to_string());
		if currency.is_empty() {
			bail!("Currency cannot be empty");
		}

		Ok(Self {
			metal,
			unit,
			currency,
		})
	}
}

fn main() -> Result<(), Error> {
	init_tracing();

	let args = Cli::parse();
	let config = Config::load(args.config.as_ref())?;
	let selection = Selection::resolve(&args, &config)?;

	// an absent or unusable price leaves it unset; commands decide what
	// that means for them
	let spot = SpotPrice::new(args.spot.unwrap_or(0.0));
	let reporter = PriceReporter::new(selection.metal, &selection.currency);

	match args.command {
		Directive::Price => {
			let purity = selection.metal.purity(args.karat)?;
			let weight = WeightSpec::new(args.weight, selection.unit);
			let rates = load_rates(config.rates(), args.offline);

			let result = compute_final_price(
				spot,
				&weight,
				purity.factor(),
				&selection.currency,
				&rates.table,
			)?;

			reporter.print_result(&result, &weight, purity);
			print_fallback_note(&rates);
		},
		Directive::Table => {
			let rates = load_rates(config.rates(), args.offline);
			let rows = build_reference_table(
				spot,
				&selection.currency,
				&rates.table,
				&KARATS,
			);

			reporter.print_reference_table(&rows);
			print_fallback_note(&rates);
		},
		Directive::Spot => reporter.print_spot(spot),
		Directive::Rates => {
			let rates = load_rates(config.rates(), args.offline);
			RateReporter::new(rates).print_all_rates();
		},
	}

	Ok(())
}

/// Diagnostics go to stderr so that reports on stdout stay clean. Quiet
/// unless RUST_LOG says otherwise.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
