use std::fmt::Write;

use wordpeek_config::ui::UiConfig;
use wordpeek_types::ViewModel;

/// Plain-text frame for one view model
pub fn render(view: &ViewModel, ui: &UiConfig) -> String {
    let mut out = String::new();

    match view {
        ViewModel::List { tokens } => {
            out.push_str("Words:\n");
            if tokens.is_empty() {
                out.push_str("  (no words)\n");
            }
            for (i, token) in tokens.iter().enumerate() {
                let _ = writeln!(out, "  {:>3}. {}", i + 1, token);
            }
        }
        ViewModel::Loading { header } => {
            let _ = writeln!(out, "< {}", header);
            out.push_str("  loading...\n");
        }
        ViewModel::Detail {
            header,
            tabs,
            explanations,
            examples,
            attribution,
            ..
        } => {
            let _ = writeln!(out, "< {}", header);

            let tab_row: Vec<String> = tabs
                .iter()
                .map(|tab| match (tab.active, tab.enabled) {
                    (true, _) => format!("[{}]", tab.label),
                    (false, true) => format!(" {} ", tab.label),
                    (false, false) => format!(" ({}) ", tab.label),
                })
                .collect();
            let _ = writeln!(out, "  {}", tab_row.join(" "));

            for definition in explanations.iter().take(ui.max_explanations) {
                let _ = writeln!(out, "  - {}", definition);
            }

            if !examples.is_empty() {
                out.push_str("  Examples:\n");
                for example in examples.iter().take(ui.max_examples) {
                    let _ = writeln!(out, "    \"{}\"", example);
                }
            }

            let _ = writeln!(out, "  Source: {} <{}>", attribution.text, attribution.url);
        }
    }

    out
}
