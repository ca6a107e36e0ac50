//! Global CSS styles for Hostboard.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-page: #f4f6f8;
  --surface-card: #ffffff;
  --surface-border: #e2e6ea;

  /* Accent */
  --accent: #3a65e0;
  --accent-soft: rgba(58, 101, 224, 0.12);

  /* Text */
  --text-primary: #1c2430;
  --text-secondary: #5d6b7a;
  --text-muted: #93a0ad;

  /* Status */
  --status-online: #2f9e6e;
  --status-offline: #b04a4a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', -apple-system, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface-page);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
  line-height: 1.5;
}

/* === Dashboard === */
.dashboard {
  max-width: 960px;
  margin: 0 auto;
  padding: 32px 24px;
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.dashboard__heading {
  font-size: 1.5rem;
  font-weight: 600;
}

.dashboard__refreshed-at {
  color: var(--text-muted);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

/* === Info Card === */
.info-card {
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 10px;
  padding: 20px 24px;
}

.info-card__title-cta {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 16px;
}

.info-card__title {
  display: flex;
  align-items: baseline;
  gap: 10px;
}

.info-card__title h2 {
  font-size: 1.1rem;
  font-weight: 600;
}

.info-card__host-count {
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: 0.9rem;
}

.info-card__title-detail {
  color: var(--text-muted);
  font-size: 0.85rem;
  min-height: 1.1em;
}

.info-card__description {
  color: var(--text-secondary);
  font-size: 0.9rem;
  margin: 8px 0 16px;
}

.info-card__action-button {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  color: var(--accent);
  text-decoration: none;
  white-space: nowrap;
}

.info-card__action-text {
  font-weight: 500;
}

.info-card__action-arrow {
  width: 10px;
  height: 18px;
}

/* === Button === */
.button {
  border: none;
  cursor: pointer;
  font: inherit;
  transition: opacity var(--transition-fast);
}

.button:hover {
  opacity: 0.8;
}

.button--solid {
  background: var(--accent);
  color: #ffffff;
  border-radius: 6px;
  padding: 8px 16px;
}

.button--text-link {
  background: none;
  color: var(--accent);
  padding: 0;
}

/* === Host Summary === */
.host-summary__tiles {
  display: flex;
  gap: 16px;
}

.host-summary__tile {
  flex: 1;
  background: var(--accent-soft);
  border-radius: 8px;
  padding: 14px;
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.host-summary__platform {
  color: var(--text-secondary);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.host-summary__count {
  font-size: 1.6rem;
  font-weight: 600;
  font-family: var(--font-mono);
}

.host-summary__filter {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  margin-top: 12px;
  color: var(--text-secondary);
  font-size: 0.85rem;
  cursor: pointer;
}

.host-summary__filter-note {
  font-style: italic;
}

/* === Activity Feed === */
.activity-feed {
  list-style: none;
}

.activity-feed__entry {
  display: flex;
  gap: 8px;
  padding: 8px 0;
  border-bottom: 1px solid var(--surface-border);
}

.activity-feed__entry:last-child {
  border-bottom: none;
}

.activity-feed__actor {
  font-weight: 600;
}

.activity-feed__when {
  margin-left: auto;
  color: var(--text-muted);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.activity-feed__empty {
  color: var(--text-muted);
  padding: 8px 0;
}

/* === Hosts Page === */
.hosts {
  max-width: 960px;
  margin: 0 auto;
  padding: 32px 24px;
}

.hosts__header {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 20px;
}

.hosts__filter-badge {
  background: var(--accent-soft);
  color: var(--accent);
  border-radius: 999px;
  padding: 2px 10px;
  font-size: 0.8rem;
}

.hosts__back {
  margin-left: auto;
  color: var(--accent);
  text-decoration: none;
}

.hosts__table {
  width: 100%;
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: 10px;
  border-collapse: collapse;
}

.hosts__table th,
.hosts__table td {
  text-align: left;
  padding: 10px 16px;
  border-bottom: 1px solid var(--surface-border);
}

.hosts__table th {
  color: var(--text-secondary);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.hosts__table tr:last-child td {
  border-bottom: none;
}
"#;
