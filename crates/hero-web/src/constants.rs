// DOM contract and injected styling for the hero surfaces.

pub const CANVAS_ID: &str = "hero-canvas";

pub const CONTAINER_CLASS: &str = "scroll-hero";
pub const CANVAS_CLASS: &str = "hero-canvas";
pub const RAIL_CLASS: &str = "scroll-progress";
pub const RAIL_BAR_CLASS: &str = "scroll-progress-bar";
pub const NAV_CLASS: &str = "hero-nav";
pub const NAV_LOGO_CLASS: &str = "hero-nav-logo";
pub const NAV_ITEM_CLASS: &str = "hero-nav-item";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const SECTION_CLASS: &str = "hero-section";
pub const SECTION_CONTENT_CLASS: &str = "section-content";
pub const HEADLINE_CLASS: &str = "section-headline";
pub const SUBHEADLINE_CLASS: &str = "section-subheadline";
pub const BODY_CLASS: &str = "section-body";
pub const OVERLAY_CLASS: &str = "loading-overlay";
pub const OVERLAY_LOADED_CLASS: &str = "loaded";

// Injected once per mount; removed again at teardown.
pub const HERO_CSS: &str = r#"
.scroll-hero { position: relative; width: 100%; min-height: 100vh; overflow: hidden; background: transparent; }
.hero-canvas { position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; }
.scroll-progress { position: fixed; left: 12px; top: 0; bottom: 0; width: 3px; background: rgba(16,185,129,0.15); z-index: 40; }
.scroll-progress-bar { width: 3px; height: 100%; background: linear-gradient(180deg,#10b981,#14b8a6); transform: scaleY(0); transform-origin: top; }
.hero-nav { position: fixed; top: 0; left: 0; right: 0; display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; z-index: 50; }
.hero-nav-logo { color: #d1fae5; font-weight: 700; letter-spacing: 0.2em; }
.hero-nav-item { color: rgba(209,250,229,0.6); margin-left: 1.5rem; text-decoration: none; transition: color .3s ease; }
.hero-nav-item.active { color: #34d399; }
.hero-section { min-height: 90vh; display: flex; align-items: center; justify-content: center; position: relative; z-index: 30; }
.section-content { text-align: center; max-width: 900px; padding: 2rem; }
.section-headline { font-size: 4rem; font-weight: 800; color: #a7f3d0; margin: 0; }
.section-subheadline { font-size: 2rem; color: #6ee7b7; margin-top: 0.75rem; }
.section-body { font-size: 1.1rem; color: rgba(209,250,229,0.9); margin-top: 2rem; }
.loading-overlay { position: fixed; inset: 0; display: grid; place-items: center; background: rgba(2,6,23,0.6); color: white; z-index: 60; transition: opacity .6s ease; }
.loading-overlay.loaded { opacity: 0; pointer-events: none; }
@media (max-width: 767px) {
  .hero-section { min-height: 110vh; }
  .section-headline { font-size: 2.5rem; }
}
"#;
