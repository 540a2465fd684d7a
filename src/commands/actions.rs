use crate::binding::ActionBinding;
use crate::config::DisplayConfig;
use crate::formatting::format_header;

/// Render every action with its loads, one load per line
pub fn format_actions(binding: &ActionBinding, display: &DisplayConfig) -> String {
    let mut output = format_header("Actions", true, display);

    let width = binding.names().map(|n| n.chars().count()).max().unwrap_or(0);
    for (name, spec) in binding.iter() {
        for (i, load) in spec.loads.iter().enumerate() {
            let label = if i == 0 { name } else { "" };
            output.push_str(&format!("{:<width$}  {}\n", label, load, width = width));
        }
        if spec.announce {
            output.push_str(&format!("{:<width$}  (announced at debug level)\n", "", width = width));
        }
    }
    output
}

pub fn run(binding: &ActionBinding, display: &DisplayConfig) {
    print!("{}", format_actions(binding, display));
}
