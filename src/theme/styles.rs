//! Global CSS styles for the filter bar.
//!
//! Per-pill colours, shadow and scale are resolved in `pillbar-core` and set
//! inline; this sheet covers layout, typography and the context menu.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --font-system: -apple-system, BlinkMacSystemFont, 'SF Pro Text', 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-caption: 0.6875rem;
  --text-body: 1.0625rem;
  --text-title: 2.125rem;

  /* Spacing */
  --row-gap: 12px;
  --label-gap: 6px;
  --pill-pad-y: 18px;
  --pill-pad-x: 20px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-system);
  min-height: 100vh;
  overflow: hidden;
}

/* === Page === */
.page {
  display: flex;
  flex-direction: column;
  align-items: stretch;
  gap: 8px;
  min-height: 100vh;
  padding: 0 16px;
}

.page-title {
  font-size: var(--text-title);
  font-weight: 700;
  padding-top: 20px;
  padding-bottom: 4px;
}

/* === Filter Bar === */
.pill-bar {
  position: relative;
}

.pill-row {
  display: flex;
  gap: var(--row-gap);
  overflow-x: auto;
  overflow-y: visible;
  padding: 4px 16px 16px;
  scrollbar-width: none;
}

.pill-row::-webkit-scrollbar {
  display: none;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  flex-shrink: 0;
  padding: var(--pill-pad-y) var(--pill-pad-x);
  border-radius: 999px;
  font-family: inherit;
  font-size: var(--text-body);
  font-weight: 600;
  white-space: nowrap;
  cursor: pointer;
  user-select: none;
  -webkit-tap-highlight-color: transparent;
}

.pill:focus-visible {
  outline: 2px solid #0a84ff;
  outline-offset: 2px;
}

.pill-icon {
  flex-shrink: 0;
}

.pill-label {
  display: inline-flex;
  align-items: center;
  gap: var(--label-gap);
}

.pill-badge {
  font-size: var(--text-caption);
  font-weight: 700;
  padding: 2px 6px;
  border-radius: 999px;
  background: rgba(120, 120, 128, 0.16);
  backdrop-filter: blur(20px);
  -webkit-backdrop-filter: blur(20px);
}

/* === Context Menu === */
.pill-menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 10;
}

.pill-menu {
  position: absolute;
  left: 16px;
  top: 100%;
  z-index: 11;
  min-width: 220px;
  padding: 6px 0;
  border-radius: 12px;
  background: rgba(250, 250, 250, 0.92);
  color: #000;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(30px);
  -webkit-backdrop-filter: blur(30px);
}

.page[data-appearance="dark"] .pill-menu {
  background: rgba(44, 44, 46, 0.92);
  color: #fff;
}

.pill-menu-title {
  padding: 6px 16px;
  font-size: var(--text-caption);
  opacity: 0.6;
}

.pill-menu-item {
  display: flex;
  align-items: center;
  gap: 10px;
  width: 100%;
  padding: 10px 16px;
  border: none;
  background: transparent;
  color: inherit;
  font: inherit;
  text-align: left;
  cursor: pointer;
}

.pill-menu-item:hover {
  background: rgba(120, 120, 128, 0.16);
}
"#;
