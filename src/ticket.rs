use crate::domain::Todo;
use regex::Regex;
use std::env;

/// URL template with a `{}` placeholder for the ticket ID
const TICKET_URL_VAR: &str = "RODO_TICKET_URL";

/// Comma-separated list of ticket ID prefixes, e.g. "PROJ,OPS"
const TICKET_PREFIX_VAR: &str = "RODO_TICKET_PREFIX";

/// Ticket hand-off settings read from the environment. The feature is
/// active only when both variables are set and non-empty.
#[derive(Debug, Clone, Default)]
pub struct TicketConfig {
    pub url: String,
    pub prefixes: Vec<String>,
}

impl TicketConfig {
    pub fn from_env() -> Self {
        let url = env::var(TICKET_URL_VAR).unwrap_or_default();
        let prefixes = env::var(TICKET_PREFIX_VAR)
            .unwrap_or_default()
            .split(',')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self { url, prefixes }
    }

    pub fn is_enabled(&self) -> bool {
        !self.url.is_empty() && !self.prefixes.is_empty()
    }

    /// Collect ticket IDs like "PROJ-1234" from the item's text and notes
    pub fn extract_tickets(&self, todo: &Todo) -> Vec<String> {
        let mut tickets = Vec::new();
        for prefix in &self.prefixes {
            let pattern = format!("{}-[0-9]+", regex::escape(prefix));
            let Ok(re) = Regex::new(&pattern) else {
                continue;
            };
            for haystack in [&todo.text, &todo.notes] {
                tickets.extend(re.find_iter(haystack).map(|m| m.as_str().to_string()));
            }
        }
        tickets
    }

    /// Resolve the browser URL for the first ticket mentioned on the item
    pub fn ticket_url(&self, todo: &Todo) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let tickets = self.extract_tickets(todo);
        let first = tickets.first()?;
        Some(self.url.replacen("{}", first, 1))
    }
}

/// Open the first ticket referenced by the item in the OS browser.
/// A missing configuration or a failing browser is a silent no-op.
pub fn open_for(todo: &Todo) {
    let config = TicketConfig::from_env();
    if let Some(url) = config.ticket_url(todo) {
        let _ = open::that(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, prefixes: &[&str]) -> TicketConfig {
        TicketConfig {
            url: url.to_string(),
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn todo(text: &str, notes: &str) -> Todo {
        Todo {
            text: text.to_string(),
            done: false,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_extract_from_text_and_notes() {
        let config = config("https://tickets.example.com/{}", &["PROJ"]);
        let todo = todo("fix PROJ-12 regression", "related: PROJ-7");
        assert_eq!(config.extract_tickets(&todo), ["PROJ-12", "PROJ-7"]);
    }

    #[test]
    fn test_extract_with_multiple_prefixes() {
        let config = config("https://tickets.example.com/{}", &["PROJ", "OPS"]);
        let todo = todo("OPS-3 blocks PROJ-1", "");
        let tickets = config.extract_tickets(&todo);
        assert!(tickets.contains(&"PROJ-1".to_string()));
        assert!(tickets.contains(&"OPS-3".to_string()));
    }

    #[test]
    fn test_url_uses_first_match() {
        let config = config("https://tickets.example.com/browse/{}", &["PROJ"]);
        let todo = todo("PROJ-12 and PROJ-34", "");
        assert_eq!(
            config.ticket_url(&todo).unwrap(),
            "https://tickets.example.com/browse/PROJ-12"
        );
    }

    #[test]
    fn test_no_match_yields_no_url() {
        let config = config("https://tickets.example.com/{}", &["PROJ"]);
        let todo = todo("water the plants", "");
        assert!(config.ticket_url(&todo).is_none());
    }

    #[test]
    fn test_unconfigured_is_disabled() {
        let config = TicketConfig::default();
        assert!(!config.is_enabled());
        let todo = todo("PROJ-12", "");
        assert!(config.ticket_url(&todo).is_none());
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        let config = config("https://tickets.example.com/{}", &["A.B"]);
        let todo = todo("AXB-1 A.B-2", "");
        assert_eq!(config.extract_tickets(&todo), ["A.B-2"]);
    }
}
