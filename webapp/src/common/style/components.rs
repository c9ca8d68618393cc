// shared building blocks: buttons, cards, project tiles, tags, the contact modal and the
// loading placeholder
pub const BASE_COMPONENTS: &str = r#"
.container {
  width: 100%;
  max-width: var(--content-w);
  margin: 0 auto;
  padding: 0 var(--gap-4);
}

.flex { display: flex; }
.items-center { align-items: center; }
.justify-between { justify-content: space-between; }

.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--gap-2);
  border: 0;
  border-radius: var(--pill);
  padding: var(--gap-2) var(--gap-4);
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--quick) var(--ease), color var(--quick) var(--ease);
}

.btn:hover { text-decoration: none; }
.btn:focus-visible { outline: 2px solid var(--accent); outline-offset: 2px; }

.btn-primary { background: var(--accent); color: #FFFFFF; }
.btn-primary:hover { background: var(--accent-strong); }

.btn-secondary { background: var(--panel-alt); color: var(--ink); }
.btn-secondary:hover { background: var(--accent-soft); }

.btn-sm { padding: var(--gap-1) var(--gap-3); font-size: 0.85rem; }
.btn-lg { padding: var(--gap-3) var(--gap-6); font-size: 1.1rem; }

.btn-close {
  border: 0;
  background: transparent;
  color: var(--ink-muted);
  font-size: 1.6rem;
  line-height: 1;
  cursor: pointer;
}

.card {
  background: var(--panel);
  border: 1px solid var(--line);
  border-radius: var(--round-lg);
  box-shadow: var(--lift);
}

.form-label {
  display: block;
  color: var(--ink-muted);
  font-size: 0.85rem;
  margin-bottom: var(--gap-1);
}

.form-input {
  width: 100%;
  padding: var(--gap-2) var(--gap-4);
  border: 1px solid var(--line);
  border-radius: var(--pill);
  background: var(--panel);
  color: var(--ink);
  font: inherit;
}

.form-input:focus { outline: none; border-color: var(--accent); }

/* project and category tiles */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--gap-6);
}

.project-card {
  display: block;
  overflow: hidden;
  color: var(--ink);
  background: var(--panel);
  border-radius: var(--round-lg);
  box-shadow: var(--lift);
  transition: box-shadow var(--steady) var(--ease);
}

.project-card:hover { box-shadow: var(--lift-high); text-decoration: none; }

.project-card-image { position: relative; }

.project-card-image img {
  display: block;
  width: 100%;
  aspect-ratio: 16/10;
  object-fit: cover;
}

.project-card-info { padding: var(--gap-4); }

.project-card-info .overview {
  color: var(--ink-muted);
  font-size: 0.9rem;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.badge {
  position: absolute;
  left: var(--gap-3);
  bottom: var(--gap-3);
  padding: 2px var(--gap-3);
  border-radius: var(--pill);
  background: var(--accent);
  color: #FFFFFF;
  font-size: 0.75rem;
  font-weight: 600;
}

.tags { display: flex; flex-wrap: wrap; gap: var(--gap-2); margin-top: var(--gap-3); }

.tag {
  padding: 2px var(--gap-3);
  border-radius: var(--pill);
  background: var(--accent-soft);
  color: var(--accent-strong);
  font-size: 0.8rem;
}

:root.dark .tag { color: var(--accent); }

/* contact modal */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: grid;
  place-items: center;
  background: var(--shade);
}

.modal-content {
  width: min(440px, 92vw);
  background: var(--panel);
  border-radius: var(--round-lg);
  box-shadow: var(--lift-high);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--gap-4) var(--gap-6);
  border-bottom: 1px solid var(--line);
}

.modal-body { padding: var(--gap-4) var(--gap-6) var(--gap-6); }

.contact-row {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: var(--gap-3);
  padding: var(--gap-3) 0;
  border-bottom: 1px solid var(--line);
}

/* placeholder shown while images or documents load */
.skeleton {
  border-radius: var(--round);
  background: var(--placeholder);
  animation: skeleton-pulse 1.2s var(--ease) infinite alternate;
}

@keyframes skeleton-pulse {
  from { opacity: 1; }
  to { opacity: 0.45; }
}
"#;
