//! Interactive prompts for the report flow.

use anyhow::{Context, Result};
use dialoguer::Input;
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;

/// Asks for the primary API URL, defaulting to the configured one.
pub fn prompt_primary_url(term: &Term, default: &str) -> Result<String> {
    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API URL")
        .default(default.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            let trimmed = input.trim();
            if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                Ok(())
            } else {
                Err("Enter a full http(s):// URL")
            }
        })
        .interact_text_on(term)
        .context("Failed to read API URL")?;

    Ok(url.trim().to_string())
}

/// Splits a comma-separated selection into upper-cased codes.
pub fn parse_selection(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Returns the codes from `selected` that are not in `available`.
pub fn invalid_selections(selected: &[String], available: &[String]) -> Vec<String> {
    selected
        .iter()
        .filter(|code| !available.contains(*code))
        .cloned()
        .collect()
}

/// Lets the user narrow the report to a subset of the available
/// currencies. Blank input selects everything; unknown codes are rejected
/// and the prompt repeats, never partially accepted.
pub fn select_currencies(term: &Term, available: &[String]) -> Result<Vec<String>> {
    term.write_line(&format!(
        "Available currencies: {}",
        available.join(", ")
    ))?;

    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Currency codes (comma-separated, blank for all)")
            .allow_empty(true)
            .interact_text_on(term)
            .context("Failed to read currency selection")?;

        if input.trim().is_empty() {
            return Ok(available.to_vec());
        }

        let selected = parse_selection(&input);
        if selected.is_empty() {
            term.write_line("Nothing selected. Please try again.")?;
            continue;
        }

        let invalid = invalid_selections(&selected, available);
        if invalid.is_empty() {
            return Ok(selected);
        }
        term.write_line(&format!(
            "Invalid currencies: {}. Please try again.",
            invalid.join(", ")
        ))?;
    }
}

/// Holds the session open so diagnostics stay visible when the binary was
/// launched outside a shell.
pub fn acknowledge_exit(term: &Term) {
    if term.write_line("Press Enter to exit...").is_ok() {
        let _ = term.read_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<String> {
        vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()]
    }

    #[test]
    fn test_selection_is_trimmed_and_uppercased() {
        assert_eq!(parse_selection("usd, eur"), vec!["USD", "EUR"]);
        assert_eq!(parse_selection(" gbp "), vec!["GBP"]);
    }

    #[test]
    fn test_blank_fragments_are_dropped() {
        assert_eq!(parse_selection("usd,,eur,"), vec!["USD", "EUR"]);
        assert!(parse_selection(" , ").is_empty());
    }

    #[test]
    fn test_known_codes_pass_validation() {
        let selected = parse_selection("usd, eur");
        assert!(invalid_selections(&selected, &available()).is_empty());
    }

    #[test]
    fn test_unknown_codes_are_reported() {
        let selected = parse_selection("usd, xyz, abc");
        assert_eq!(
            invalid_selections(&selected, &available()),
            vec!["XYZ", "ABC"]
        );
    }
}
