//! Custom-property stylesheet rendering.

use std::fmt::Write;

use super::strategy::Strategy;
use super::synth::{Theme, ThemeSet};
use super::tokens::{SemanticTokenSet, TokenRole};

/// Knobs for the emitted stylesheet. Colors are not affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Value of `--radius`, written once in the light block
    pub radius: String,
    /// Selector scoping the dark block
    pub dark_selector: String,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            radius: "0.5rem".to_string(),
            dark_selector: ".dark".to_string(),
        }
    }
}

fn write_block(out: &mut String, selector: &str, set: &SemanticTokenSet, radius: Option<&str>) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{selector} {{");
    for (role, color) in set.iter() {
        let _ = writeln!(out, "  --{}: {};", role.css_name(), color);
        if role == TokenRole::Ring {
            if let Some(radius) = radius {
                let _ = writeln!(out, "  --radius: {radius};");
            }
        }
    }
    out.push_str("}\n");
}

impl Theme {
    /// Render with the default `:root` / `.dark` layout.
    pub fn to_css(&self) -> String {
        self.to_css_with(&StylesheetOptions::default())
    }

    pub fn to_css_with(&self, options: &StylesheetOptions) -> String {
        let mut out = String::new();
        write_block(&mut out, ":root", &self.light, Some(&options.radius));
        out.push('\n');
        write_block(&mut out, &options.dark_selector, &self.dark, None);
        out.trim().to_string()
    }
}

impl ThemeSet {
    /// Stylesheet text per strategy, in [`Strategy::ALL`] order.
    pub fn to_css_map(&self, options: &StylesheetOptions) -> Vec<(Strategy, String)> {
        self.iter()
            .map(|theme| (theme.strategy, theme.to_css_with(options)))
            .collect()
    }
}
