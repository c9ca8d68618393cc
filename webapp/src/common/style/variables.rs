// design tokens
//
// the light palette sits on :root; the theme store adds or removes the dark class on
// <html>, which swaps the surface and ink colours below
pub const CSS_VARIABLES: &str = r#"
:root {
  --accent: #3B82F6;
  --accent-strong: #2563EB;
  --accent-soft: rgba(59, 130, 246, 0.15);
  --danger: #DC2626;

  --page-bg: #F8FAFC;
  --panel: #FFFFFF;
  --panel-alt: #EEF2F7;
  --ink: #0F172A;
  --ink-muted: #475569;
  --ink-faint: #94A3B8;
  --line: #E2E8F0;
  --shade: rgba(15, 23, 42, 0.6);
  --placeholder: #CBD5E1;

  --gap-1: 4px;
  --gap-2: 8px;
  --gap-3: 12px;
  --gap-4: 16px;
  --gap-6: 24px;
  --gap-8: 32px;
  --gap-12: 48px;

  --round-sm: 4px;
  --round: 8px;
  --round-lg: 16px;
  --pill: 999px;

  --lift: 0 2px 6px rgba(15, 23, 42, 0.08);
  --lift-high: 0 12px 28px rgba(15, 23, 42, 0.16);

  --header-h: 64px;
  --content-w: 1120px;

  --quick: 150ms;
  --steady: 300ms;
  --ease: ease-in-out;
}

:root.dark {
  --page-bg: #0B1120;
  --panel: #1E293B;
  --panel-alt: #273449;
  --ink: #F1F5F9;
  --ink-muted: #CBD5E1;
  --ink-faint: #64748B;
  --line: #334155;
  --shade: rgba(0, 0, 0, 0.75);
  --placeholder: #334155;

  --lift: 0 2px 6px rgba(0, 0, 0, 0.45);
  --lift-high: 0 12px 28px rgba(0, 0, 0, 0.6);
}
"#;
