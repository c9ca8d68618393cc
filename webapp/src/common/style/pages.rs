// layout shell and page-specific rules
pub const PAGE_STYLES: &str = r#"
.app-shell { min-height: 100vh; display: flex; flex-direction: column; }

.app-header {
  position: sticky;
  top: 0;
  z-index: 20;
  height: var(--header-h);
  background: var(--panel);
  border-bottom: 1px solid var(--line);
}

.nav-container {
  height: 100%;
  max-width: var(--content-w);
  margin: 0 auto;
  padding: 0 var(--gap-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo { color: var(--ink); font-size: 1.2rem; font-weight: 800; }

.nav-links { display: flex; align-items: center; gap: var(--gap-2); }

.nav-link { color: var(--ink-muted); padding: var(--gap-2) var(--gap-3); }
.nav-link.active { color: var(--accent); box-shadow: inset 0 -2px 0 var(--accent); }

.theme-toggle {
  margin-left: var(--gap-2);
  padding: var(--gap-1) var(--gap-3);
  border: 1px solid var(--line);
  border-radius: var(--pill);
  background: transparent;
  color: var(--ink);
  font: inherit;
  cursor: pointer;
}

.page-outlet { flex: 1; padding: var(--gap-8) 0 var(--gap-12); }

.app-footer {
  padding: var(--gap-6) 0;
  border-top: 1px solid var(--line);
  color: var(--ink-faint);
  font-size: 0.85rem;
}

.footer-links { display: flex; gap: var(--gap-4); }

/* home */
.hero {
  position: relative;
  overflow: hidden;
  min-height: 70vh;
  display: grid;
  place-items: center;
  text-align: center;
  border-radius: var(--round-lg);
  color: #FFFFFF;
  background: linear-gradient(180deg, #1E293B, #020617);
}

/* no backdrop when the backgrounds failed to load */
.hero.degraded { background: linear-gradient(180deg, #111827, #000000); }

.hero-backdrop {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

.hero-backdrop::after {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.7));
}

.hero-content { position: relative; padding: var(--gap-8) var(--gap-4); }

.hero-title { font-size: clamp(2.2rem, 6vw, 4rem); font-weight: 800; line-height: 1.1; }

.hero-role {
  min-height: 2.4rem;
  margin: var(--gap-4) 0;
  color: var(--accent);
  font-size: clamp(1.3rem, 3vw, 2rem);
  font-weight: 700;
}

.hero-subtitle { color: var(--ink-muted); font-size: 1.15rem; margin-bottom: var(--gap-6); }
.hero .hero-subtitle { color: #E2E8F0; }

.hero-actions { display: flex; justify-content: center; gap: var(--gap-3); }

/* work */
.category-card { cursor: pointer; }

.coming-soon {
  margin-top: var(--gap-6);
  padding: var(--gap-4);
  border-radius: var(--round);
  background: var(--accent-soft);
  color: var(--ink);
}

/* project list and detail */
.breadcrumb { color: var(--ink-faint); margin-bottom: var(--gap-3); }

.project-detail {
  display: grid;
  grid-template-columns: minmax(0, 3fr) minmax(0, 2fr);
  gap: var(--gap-8);
}

.carousel img {
  display: block;
  width: 100%;
  border-radius: var(--round-lg);
  cursor: zoom-in;
}

.carousel-controls {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: var(--gap-3);
}

.thumbnails { display: flex; gap: var(--gap-2); margin-top: var(--gap-3); overflow-x: auto; }

.thumbnails img {
  width: 88px;
  height: 56px;
  object-fit: cover;
  border: 2px solid transparent;
  border-radius: var(--round-sm);
  cursor: pointer;
}

.thumbnails img.selected { border-color: var(--accent); }

.detail-section { margin-bottom: var(--gap-6); }
.detail-section h2 { font-size: 1.1rem; margin-bottom: var(--gap-2); }

.fullscreen-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: grid;
  place-items: center;
  background: rgba(0, 0, 0, 0.92);
}

.fullscreen-overlay img { max-width: 94vw; max-height: 88vh; }

/* about */
.journey { margin-top: var(--gap-12); }
.journey h2 { text-align: center; margin-bottom: var(--gap-8); }

.timeline { position: relative; list-style: none; }

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 4px;
  transform: translateX(-50%);
  background: var(--accent-soft);
}

.timeline-step { display: flex; margin-bottom: var(--gap-8); }
.timeline-step.mirrored { flex-direction: row-reverse; }

.journey-card {
  position: relative;
  width: calc(50% - var(--gap-6));
  padding: var(--gap-6);
  border: 2px solid transparent;
  transition: border-color var(--steady) var(--ease), box-shadow var(--steady) var(--ease);
}

.journey-card.active { border-color: var(--accent); box-shadow: var(--lift-high); }

.journey-icon { display: block; font-size: 2.2rem; margin-bottom: var(--gap-3); }

.journey-year {
  display: block;
  color: var(--accent);
  font-size: 0.85rem;
  font-weight: 600;
  margin-bottom: var(--gap-1);
}

.journey-card p { color: var(--ink-muted); }

/* status blocks */
.error-state,
.empty-state,
.loading-state {
  padding: var(--gap-12) 0;
  text-align: center;
  color: var(--ink-muted);
}

.error-state h1,
.error-state h2 { color: var(--danger); margin-bottom: var(--gap-3); }

@media (max-width: 860px) {
  .project-detail { grid-template-columns: 1fr; }
  .timeline::before { left: var(--gap-2); }
  .timeline-step,
  .timeline-step.mirrored { flex-direction: row; padding-left: var(--gap-8); }
  .journey-card { width: 100%; }
}
"#;
