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
use anyhow::{anyhow, Error};
use dirs::home_dir;
use serde::Deserialize;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub rates: Option<RatesConfig>,
	pub defaults: Option<Defaults>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatesConfig {
	pub api_url: Option<String>,
	pub timeout_secs: Option<u64>,

	/// If set, never contact the rate source and use the fallback table.
	pub offline: Option<bool>,
}

/// Values used when the matching command-line flag is absent.
#[derive(Debug, Default, Deserialize)]
pub struct Defaults {
	pub currency: Option<String>,
	pub metal: Option<String>,
	pub unit: Option<String>,
}

impl Config {
	pub fn from_toml(content: &str) -> Result<Self, Error> {
		toml::from_str(content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))
	}

	/// Reads the config from the given path, or the default path if none.
	/// A missing file at the default path is created empty; a missing file
	/// at a given path is an error.
	pub fn load(custom_config_path: Option<&String>) -> Result<Self, Error> {
		let config_path = match &custom_config_path {
			None => home_dir()
				.ok_or_else(|| anyhow!("Unable to determine home directory"))?
				.join(".config/karat/config.toml"),
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read {}: {}", config_path.display(), e)
		})?;
		Self::from_toml(&content)
	}

	pub fn rates(&self) -> &RatesConfig {
		static EMPTY: RatesConfig = RatesConfig {
			api_url: None,
			timeout_secs: None,
			offline: None,
		};
		self.rates.as_ref().unwrap_or(&EMPTY)
	}

	pub fn defaults(&self) -> &Defaults {
		static EMPTY: Defaults = Defaults {
			currency: None,
			metal: None,
			unit: None,
		};
		self.defaults.as_ref().unwrap_or(&EMPTY)
	}
}
