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
use std::fs;
use std::process::Command;

const TEST_DATA: &str = "tests/test_data";

/// Dynamically collects test cases from a given directory: pairs of
/// `<name>_args.txt`, holding the flags to run with, and `<name>_out.txt`,
/// holding what to expect.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("{}/{}", TEST_DATA, subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_args.txt") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_args.txt", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

#[test]
fn test_integration_price() {
	let test_cases = collect_test_cases("price");
	execute("price", test_cases, true, "price");
}

#[test]
fn test_integration_reference_table() {
	let test_cases = collect_test_cases("table");
	execute("table", test_cases, true, "table");
}

#[test]
fn test_integration_spot() {
	let test_cases = collect_test_cases("spot");
	execute("spot", test_cases, true, "spot");
}

#[test]
fn test_integration_rates() {
	let test_cases = collect_test_cases("rates");
	execute("rates", test_cases, true, "rates");
}

/// Expected output of a failing case is a message that must appear on
/// stderr.
#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute("failures", test_cases, false, "price");
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	should_succeed: bool,
	cmd: &str,
) {
	let config = format!("{}/config.toml", TEST_DATA);

	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let args =
			fs::read_to_string(format!("{}/{}/{}", TEST_DATA, subfolder, input_file))
				.expect("Failed to read args file");

		let all_args = [
			vec!["run", "--", "--config", config.as_str(), cmd],
			args.split_whitespace().collect(),
		]
		.concat();

		let output = Command::new("cargo")
			.args(all_args)
			.env_remove("RUST_LOG")
			.output()
			.expect("Failed to execute process");

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			TEST_DATA, subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);

			let stderr = String::from_utf8_lossy(&output.stderr);
			assert!(
				stderr.contains(expected_output.trim()),
				"{} failed without {:?}; stderr:\n{}",
				input_file,
				expected_output.trim(),
				stderr
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
