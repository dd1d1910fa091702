use maud::{html, Markup};

/// A filter dropdown. The blank option reads "All {label}s" and clears
/// the constraint. A current value missing from `options` (a region tile
/// link, say) is still listed so the control shows what is applied.
pub fn select_filter(name: &str, label: &str, options: &[&str], selected: &str) -> Markup {
    let unlisted = !selected.is_empty() && !options.contains(&selected);

    html! {
        label class="filter" {
            span class="sr-only" { (label) }
            select name=(name) {
                option value="" selected[selected.is_empty()] { "All " (label) "s" }
                @if unlisted {
                    option value=(selected) selected { (selected) }
                }
                @for option in options {
                    option value=(option) selected[*option == selected] { (option) }
                }
            }
        }
    }
}
