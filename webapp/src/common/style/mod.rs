use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// page transition keyframes are generated from api::motion at startup and
// are not part of this bundle
pub const MODERN_STYLES: &str = concat!(
    r#"
*,
*::before,
*::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: Inter, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: var(--ink);
  background: var(--page-bg);
  transition: background-color var(--steady) var(--ease), color var(--steady) var(--ease);
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

h1 { margin-bottom: var(--gap-4); }
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_is_defined() {
        for (i, _) in MODERN_STYLES.match_indices("var(--") {
            let rest = &MODERN_STYLES[i + 4..];
            let name = &rest[..rest.find(')').unwrap()];

            assert!(
                CSS_VARIABLES.contains(&format!("{name}:")),
                "{name} is used but never defined"
            );
        }
    }

    #[test]
    fn unused_layout_helpers_are_gone() {
        for selector in [".flex-col", ".form-group", ".grid {"] {
            assert!(!MODERN_STYLES.contains(selector), "{selector} is still bundled");
        }
    }

    #[test]
    fn journey_highlight_is_styled() {
        assert!(PAGE_STYLES.contains(".journey-card.active"));
        assert!(PAGE_STYLES.contains(".hero-backdrop"));
    }
}
