//! Global CSS styles for the storefront.
//!
//! Class names follow the components in `storefront-ui`; modifiers such as
//! `.selected`, `.disabled` and `.urgent` are added alongside the base class.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand */
  --brand: #1b6e3c;
  --brand-dark: #124d2a;
  --brand-light: #e6f2ea;
  --accent: #f2a900;

  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f6f6f4;
  --border: #dedcd6;

  /* Text */
  --text-primary: #1d1d1b;
  --text-secondary: #5c5b57;
  --text-muted: #8a8984;

  /* Semantic */
  --danger: #c62828;
  --warning: #e65100;
  --success: #2e7d32;

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
  --space-xl: 2.5rem;

  --radius: 8px;
  --radius-pill: 999px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface-muted);
}

/* === Shell === */
.site-header {
  display: flex;
  align-items: center;
  gap: var(--space-lg);
  padding: var(--space-md) var(--space-xl);
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}
.site-header-brand { display: flex; align-items: center; gap: var(--space-sm); text-decoration: none; color: var(--brand); font-weight: 700; }
.site-header-logo { width: 32px; height: 32px; }
.site-header-nav ul { display: flex; gap: var(--space-md); list-style: none; margin: 0; padding: 0; }
.site-nav-link { color: var(--text-secondary); text-decoration: none; padding: var(--space-xs) 0; }
.site-nav-link.active { color: var(--brand); border-bottom: 2px solid var(--brand); }
.site-header-search { flex: 1; max-width: 480px; }
.site-main { padding: var(--space-xl); }

.site-footer { padding: var(--space-xl); background: var(--brand-dark); color: #fff; }
.site-footer-columns { display: flex; gap: var(--space-xl); }
.site-footer-column ul { list-style: none; padding: 0; }
.site-footer-link { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
.site-footer-copyright { margin-top: var(--space-lg); font-size: 0.85rem; opacity: 0.7; }

.page-title { font-size: 1.75rem; margin: 0 0 var(--space-lg); }
.cart-page { display: grid; grid-template-columns: 1fr 360px; gap: var(--space-xl); }
.cart-sidebar { display: flex; flex-direction: column; gap: var(--space-md); }
.rewards-page { display: flex; flex-direction: column; gap: var(--space-lg); max-width: 960px; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: var(--space-md); }

/* === Button === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-sm);
  border: 1px solid transparent;
  border-radius: var(--radius-pill);
  font: inherit;
  font-weight: 600;
  cursor: pointer;
}
.btn-full { width: 100%; }
.btn.disabled, .btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-sm { padding: 0.25rem 0.75rem; font-size: 0.85rem; }
.btn-md { padding: 0.5rem 1.25rem; }
.btn-lg { padding: 0.75rem 1.75rem; font-size: 1.1rem; }
.btn-primary { background: var(--brand); color: #fff; }
.btn-secondary { background: var(--brand-light); color: var(--brand-dark); }
.btn-outline { background: transparent; border-color: var(--brand); color: var(--brand); }
.btn-text { background: transparent; color: var(--brand); padding-left: 0; padding-right: 0; }
.btn-multiline { flex-direction: column; gap: 0; line-height: 1.2; }
.btn-label-top { font-size: 0.75rem; font-weight: 500; }
.icon-btn { width: 40px; height: 40px; padding: 0; border-radius: 50%; background: var(--surface); border: 1px solid var(--border); }
.btn-icon { width: 18px; height: 18px; }

/* === Chip === */
.chip { display: inline-flex; align-items: center; gap: var(--space-xs); padding: 0.2rem 0.7rem; border-radius: var(--radius-pill); border: 1px solid var(--border); background: var(--surface); font-size: 0.8rem; }
.chip.selected { background: var(--brand); color: #fff; border-color: var(--brand); }
.chip.disabled { opacity: 0.5; }

/* === Form controls === */
.checkbox { display: flex; align-items: center; gap: var(--space-sm); cursor: pointer; }
.checkbox-box { width: 20px; height: 20px; border: 2px solid var(--border); border-radius: 4px; background: var(--surface); display: grid; place-items: center; }
.checkbox.checked .checkbox-box { background: var(--brand); border-color: var(--brand); }
.checkbox.disabled { opacity: 0.5; cursor: not-allowed; }

.text-field { display: flex; flex-direction: column; gap: var(--space-xs); }
.text-field-label { font-size: 0.85rem; color: var(--text-secondary); }
.text-field-control { display: flex; align-items: center; border: 1px solid var(--border); border-radius: var(--radius); background: var(--surface); padding: 0 var(--space-sm); }
.text-field.focused .text-field-control { border-color: var(--brand); }
.text-field.has-error .text-field-control { border-color: var(--danger); }
.text-field-input { flex: 1; border: none; outline: none; padding: var(--space-sm) 0; font: inherit; background: transparent; }
.text-field-helper { font-size: 0.8rem; color: var(--text-muted); }
.text-field-error { font-size: 0.8rem; color: var(--danger); }

.dropdown { position: relative; display: inline-flex; flex-direction: column; gap: var(--space-xs); }
.dropdown-trigger { display: flex; align-items: center; justify-content: space-between; gap: var(--space-md); min-width: 160px; padding: var(--space-sm) var(--space-md); border: 1px solid var(--border); border-radius: var(--radius); background: var(--surface); font: inherit; cursor: pointer; }
.dropdown.placeholder-shown .dropdown-value { color: var(--text-muted); }
.dropdown-backdrop { position: fixed; inset: 0; z-index: 10; }
.dropdown-list { position: absolute; top: 100%; left: 0; right: 0; z-index: 11; margin: 4px 0 0; padding: var(--space-xs) 0; list-style: none; background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12); }
.dropdown-option { padding: var(--space-sm) var(--space-md); cursor: pointer; }
.dropdown-option.highlighted { background: var(--brand-light); }
.dropdown-option.selected { font-weight: 600; }
.dropdown-option.disabled { color: var(--text-muted); cursor: not-allowed; }

.radio-selector { display: flex; flex-direction: column; gap: var(--space-sm); }
.radio-selector .selected { border-color: var(--brand); }
.radio-text { display: flex; flex-direction: column; }
.radio-description { font-size: 0.8rem; color: var(--text-secondary); }

/* === Ratings & loyalty === */
.review-stars { display: inline-flex; align-items: center; gap: var(--space-xs); }
.star-stop-filled { stop-color: var(--accent); }
.star-stop-empty { stop-color: var(--border); }
.review-count { font-size: 0.8rem; color: var(--text-muted); }

.loyalty-progress-track { position: relative; display: flex; gap: 4px; height: 10px; }
.loyalty-progress-segment { flex: 1; border-radius: var(--radius-pill); background: var(--border); }
.loyalty-progress-segment.filled { background: var(--brand); }
.loyalty-progress-indicator { position: absolute; top: -4px; width: 18px; height: 18px; margin-left: -9px; border-radius: 50%; background: var(--surface); border: 3px solid var(--brand); }
.loyalty-progress-labels { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--text-muted); }

.loyalty-status-card, .loyalty-rewards, .points-chart, .order-summary, .fulfillment-card {
  padding: var(--space-lg);
  background: var(--surface);
  border-radius: var(--radius);
  border: 1px solid var(--border);
}
.loyalty-status-tier { font-weight: 700; color: var(--accent); text-transform: uppercase; }
.loyalty-status-points { font-size: 2rem; font-weight: 700; }
.loyalty-status-next.complete { color: var(--success); }

.reward { display: flex; gap: var(--space-md); padding: var(--space-md) 0; border-bottom: 1px solid var(--border); }
.reward-headline { font-weight: 700; font-size: 1.1rem; }
.reward-expiry { font-size: 0.8rem; color: var(--text-muted); }
.reward-expiry.urgent { color: var(--warning); font-weight: 600; }
.reward-birthday .reward-headline { color: var(--accent); }

.rewards-dial-track { stroke: var(--border); fill: none; }
.rewards-dial-fill { stroke: var(--brand); fill: none; stroke-linecap: round; transition: stroke-dashoffset 0.4s ease; }
.rewards-dial-ready .rewards-dial-fill { stroke: var(--accent); }
.rewards-dial-points { font-size: 2rem; font-weight: 700; }

.points-chart-bars { display: flex; align-items: flex-end; gap: var(--space-sm); height: 200px; }
.points-chart-column { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; align-items: center; height: 100%; }
.points-chart-bar { width: 100%; background: var(--brand); border-radius: 4px 4px 0 0; }
.points-chart-axis { display: flex; flex-direction: column; justify-content: space-between; font-size: 0.7rem; color: var(--text-muted); }
.points-chart-body { display: flex; gap: var(--space-sm); }

.points-earned-amount { font-weight: 700; color: var(--brand); }

/* === Products === */
.product-card { display: flex; flex-direction: column; gap: var(--space-sm); padding: var(--space-md); background: var(--surface); border-radius: var(--radius); border: 1px solid var(--border); }
.product-card-image, .mini-product-image { width: 100%; aspect-ratio: 1; object-fit: contain; }
.product-card-price { font-weight: 700; }
.product-card-unit { font-size: 0.8rem; color: var(--text-muted); }
.quantity-selector { display: inline-flex; align-items: center; gap: var(--space-sm); border: 1px solid var(--brand); border-radius: var(--radius-pill); padding: 2px; }
.quantity-btn { width: 32px; height: 32px; border: none; border-radius: 50%; background: var(--brand-light); cursor: pointer; }
.quantity-btn:disabled { opacity: 0.4; cursor: not-allowed; }
.quantity-value { min-width: 2ch; text-align: center; font-weight: 600; }

.related-products-track { display: grid; grid-template-columns: repeat(4, 1fr); gap: var(--space-md); }
.related-products-header { display: flex; justify-content: space-between; align-items: center; }
.product-tab.active { border-bottom: 2px solid var(--brand); color: var(--brand); }

/* === Order === */
.summary-line { display: flex; justify-content: space-between; padding: var(--space-xs) 0; }
.summary-line.savings .summary-value { color: var(--success); }
.summary-line.total { font-weight: 700; border-top: 1px solid var(--border); margin-top: var(--space-sm); padding-top: var(--space-sm); }
.order-step.done { color: var(--success); }
.order-step.current { font-weight: 700; color: var(--brand); }

/* === Cart header === */
.cart-header { display: inline-flex; align-items: center; gap: var(--space-sm); padding: var(--space-xs) var(--space-md); border-radius: var(--radius-pill); background: var(--brand-light); border: none; font: inherit; }
.cart-header.clickable { cursor: pointer; }
.cart-header-total { font-weight: 700; }
"#;
