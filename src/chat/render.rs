//! Text rendering for recommendation results
//!
//! Formats strain records as bordered text cards for the terminal, standing
//! in for the HTML cards of the original widget.

use crate::models::Strain;
use crate::utils::helpers::{format_list, truncate_text};

const CARD_WIDTH: usize = 58;
const DESCRIPTION_LIMIT: usize = 220;

/// Render a single strain as a text card
pub fn strain_card(strain: &Strain) -> String {
    let rule = "─".repeat(CARD_WIDTH);
    let mut lines = vec![
        format!("┌{}", rule),
        format!("│ {}  [{}]", strain.name, strain.strain_type),
        format!("│ THC: {}   CBD: {}", strain.thc_content, strain.cbd_content),
        format!("│ Effects: {}", format_list(&strain.effects)),
        format!("│ Flavors: {}", format_list(&strain.flavors)),
    ];

    for chunk in wrap(&truncate_text(&strain.description, DESCRIPTION_LIMIT), CARD_WIDTH - 2) {
        lines.push(format!("│ {}", chunk));
    }

    if let Some(benefits) = &strain.medical_benefits {
        if !benefits.is_empty() {
            lines.push(format!("│ Medical: {}", format_list(benefits)));
        }
    }
    if let Some(growing_time) = &strain.growing_time {
        lines.push(format!("│ Flowering: {}", growing_time));
    }

    lines.push(format!("└{}", rule));
    lines.join("\n")
}

/// Render all cards separated by blank lines
pub fn strain_cards(strains: &[Strain]) -> String {
    strains
        .iter()
        .map(strain_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Greedy word wrap at `width` characters
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
