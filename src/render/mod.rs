//! HTML rendering of the registry as a page of cards.
//!
//! Markup lives in minijinja templates under `templates/`. Their `.html`
//! names switch on HTML auto-escaping, so registry text is escaped wherever
//! it lands in the page.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::install::{self, EnvValues};
use crate::registry::Entry;

const PAGE_TEMPLATE: &str = "page.html";
const CARD_TEMPLATE: &str = "card.html";

pub const EMPTY_REGISTRY_MESSAGE: &str = "No MCPs found in the registry.";
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading MCP registry. Re-run `mcpverse render -v` to see the cause.";

/// Data behind one card.
#[derive(Debug, Serialize)]
struct CardContext<'a> {
    entry: &'a Entry,
    /// Same name `list` and `show` print.
    name: &'a str,
    /// Installation command with every placeholder left in place.
    command_line: Option<String>,
}

impl<'a> CardContext<'a> {
    fn new(entry: &'a Entry) -> Self {
        Self {
            entry,
            name: entry.display_name(),
            command_line: install::build_command_line(entry, &EnvValues::new()),
        }
    }
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    cards: Vec<CardContext<'a>>,
    /// Shown instead of the cards when there are none.
    message: &'a str,
    failed: bool,
}

fn build_env() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(PAGE_TEMPLATE, include_str!("templates/page.html"))?;
    env.add_template(CARD_TEMPLATE, include_str!("templates/card.html"))?;
    Ok(env)
}

/// Entries ordered by displayed name, ignoring case, then by id.
pub fn sorted_for_display(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_cached_key(|e| (e.display_name().to_lowercase(), e.id.clone()));
    sorted
}

pub fn render_card(entry: &Entry) -> Result<String, minijinja::Error> {
    build_env()?
        .get_template(CARD_TEMPLATE)?
        .render(context! { card => CardContext::new(entry) })
}

/// Full HTML document listing `entries` as cards.
pub fn render_page(entries: &[Entry], title: &str) -> Result<String, minijinja::Error> {
    render(&PageContext {
        title,
        cards: sorted_for_display(entries)
            .into_iter()
            .map(CardContext::new)
            .collect(),
        message: EMPTY_REGISTRY_MESSAGE,
        failed: false,
    })
}

/// Page written in place of the catalog when the registry can't be loaded.
pub fn render_error_page(title: &str) -> Result<String, minijinja::Error> {
    render(&PageContext {
        title,
        cards: Vec::new(),
        message: LOAD_ERROR_MESSAGE,
        failed: true,
    })
}

fn render(page: &PageContext) -> Result<String, minijinja::Error> {
    build_env()?.get_template(PAGE_TEMPLATE)?.render(page)
}
