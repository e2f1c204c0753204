//! Embedded stylesheet.
//!
//! The page ships as a single file, so styling is inlined in `<head>`.

/// Stylesheet inlined into every rendered page.
pub const STYLESHEET: &str = r"*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: #111827; color: #ffffff; font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.5; }
a { color: inherit; }
.container { max-width: 1280px; margin: 0 auto; padding: 2.5rem 1.5rem; }
.hero { display: flex; flex-direction: column; align-items: center; gap: 3rem; }
.hero-portrait { width: 20rem; height: 20rem; flex-shrink: 0; }
.hero-portrait img { width: 100%; height: 100%; border-radius: 9999px; object-fit: cover; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3); }
.hero-text { flex: 1; text-align: center; }
.hero-name { font-size: 2.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.hero-role { font-size: 1.5rem; font-weight: 700; color: #818cf8; margin: 0 0 1rem; }
.hero-bio { color: #d1d5db; margin: 0 0 1.5rem; }
.contacts { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.5rem; }
.contact { display: flex; align-items: center; justify-content: center; gap: 0.5rem; color: #818cf8; text-decoration: underline; }
.contact:hover { color: #a5b4fc; }
.icon { width: 1.25rem; height: 1.25rem; }
.button { display: inline-flex; align-items: center; gap: 0.5rem; background: #4f46e5; color: #ffffff; padding: 0.75rem 1.5rem; border-radius: 0.5rem; text-decoration: none; transition: background-color 0.2s; }
.button:hover { background: #4338ca; }
.section-title { display: flex; align-items: center; justify-content: center; margin-bottom: 3rem; }
.section-title .rule { flex-grow: 1; border-top: 1px solid #d1d5db; }
.section-title h2 { margin: 0 1rem; font-size: 1.875rem; font-weight: 700; text-align: center; }
.categories { display: flex; flex-direction: column; gap: 4rem; }
.category-heading { font-size: 1.5rem; font-weight: 700; color: #818cf8; margin: 0 0 2rem; }
.grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.card { background: #1f2937; border-radius: 0.5rem; overflow: hidden; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3); transition: transform 0.3s; }
.card:hover { transform: scale(1.05); }
.card-image { display: block; width: 100%; aspect-ratio: 16 / 9; object-fit: cover; }
.card-placeholder { aspect-ratio: 16 / 9; background: #e5e7eb; border: 2px dashed #9ca3af; }
.card-body { padding: 1.5rem; }
.card-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.card-description { color: #d1d5db; margin: 0 0 1rem; }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.chip { padding: 0.25rem 0.75rem; background: #312e81; color: #c7d2fe; border-radius: 9999px; font-size: 0.875rem; }
.card-link { display: inline-block; background: #4f46e5; color: #ffffff; padding: 0.5rem 1rem; border-radius: 0.5rem; text-decoration: none; transition: background-color 0.2s; }
.card-link:hover { background: #4338ca; }
.card-link-disabled, .card-link-disabled:hover { background: #4b5563; color: #9ca3af; cursor: not-allowed; }
@media (min-width: 768px) {
  .hero { flex-direction: row; }
  .hero-text { text-align: left; }
  .contact { justify-content: flex-start; }
  .grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
  .grid { grid-template-columns: repeat(3, 1fr); }
}
";
