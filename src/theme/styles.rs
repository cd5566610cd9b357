//! Global CSS styles for Folio.
//!
//! Glass-morphism over a dark teal gradient, layered on top of Bootstrap 5.
//! Element motion (section reveals, card hovers, caption slides, the nav
//! panel) arrives as inline styles; this sheet only holds resting looks and
//! the keyframes those inline styles refer to.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --backdrop-start: #0f2027;
  --backdrop-mid: #203a43;
  --backdrop-end: #2c5364;

  /* GLASS */
  --glass: rgba(255, 255, 255, 0.08);
  --glass-strong: rgba(255, 255, 255, 0.15);
  --glass-border: rgba(255, 255, 255, 0.18);
  --glass-accent: rgba(13, 202, 240, 0.25);
  --glass-blur: blur(12px);

  /* TEXT */
  --text-primary: #f8f9fa;
  --text-muted: rgba(248, 249, 250, 0.7);

  /* Shadows */
  --shadow-base: 0 4px 6px rgba(0, 0, 0, 0.1);
  --shadow-raised: 0 10px 20px rgba(0, 0, 0, 0.2);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slide: 1s ease-in-out;
}

/* === Global Reset === */
html, body {
  height: 100%;
  margin: 0;
  overflow: hidden;
}

body {
  background: linear-gradient(135deg, var(--backdrop-start), var(--backdrop-mid), var(--backdrop-end));
  color: var(--text-primary);
  -webkit-font-smoothing: antialiased;
}

/* The page is its own scroll container */
.page {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
}

a {
  color: inherit;
}

.icon-dark {
  color: var(--text-primary);
}

/* === Navigation === */
.glass-nav {
  background: var(--glass);
  backdrop-filter: var(--glass-blur);
  -webkit-backdrop-filter: var(--glass-blur);
  border-bottom: 1px solid var(--glass-border);
}

.glass-nav .nav-link {
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.glass-nav .nav-link:hover {
  color: var(--text-primary);
}

.navbar-collapse {
  overflow: hidden;
}

/* Wide windows always show the links, whatever the panel animation says */
@media (min-width: 992px) {
  .navbar-collapse {
    max-height: none !important;
    opacity: 1 !important;
    overflow: visible !important;
  }
}

/* === Hero === */
.glass-hero {
  background:
    linear-gradient(rgba(15, 32, 39, 0.55), rgba(44, 83, 100, 0.75)),
    url("https://images.unsplash.com/photo-1498050108023-c5249f4df085?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80") center / cover no-repeat;
}

/* === Entrance Animations === */
.animate-fadeIn {
  animation: fadeIn 1s ease-out both;
}

.animate-float {
  animation: float 6s ease-in-out infinite;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

/* Click pulse; two identical copies so consecutive clicks restart it */
@keyframes folio-pulse-a {
  from { transform: scale(1); }
  to { transform: scale(var(--pulse-scale, 0.95)); }
}

@keyframes folio-pulse-b {
  from { transform: scale(1); }
  to { transform: scale(var(--pulse-scale, 0.95)); }
}

/* === Badges & Buttons === */
.badge-glass {
  background: var(--glass-strong);
  border: 1px solid var(--glass-border);
  color: var(--text-primary);
  font-weight: 500;
  backdrop-filter: var(--glass-blur);
}

.btn-glass,
.btn-glass-primary {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  color: var(--text-primary);
  backdrop-filter: var(--glass-blur);
  transition: background var(--transition-normal), transform var(--transition-fast);
}

.btn-glass-primary {
  background: var(--glass-accent);
}

.btn-glass:hover,
.btn-glass-primary:hover {
  background: var(--glass-strong);
  color: var(--text-primary);
  transform: translateY(-2px);
}

/* === Slideshow === */
.slideshow {
  position: relative;
  height: 400px;
  overflow: hidden;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
}

.slideshow-empty {
  background: var(--glass);
}

.slide {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  opacity: 0;
  transition: opacity var(--transition-slide);
}

.slide.active {
  opacity: 1;
}

/* === Sections === */
.section {
  padding: 100px 0;
}

/* === Cards === */
.glass-card {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  backdrop-filter: var(--glass-blur);
  -webkit-backdrop-filter: var(--glass-blur);
  color: var(--text-primary);
  box-shadow: var(--shadow-base);
}

.project-card .card-title {
  font-weight: 600;
}

.project-card .card-text {
  color: var(--text-muted);
}

/* === Gallery === */
.gallery-item {
  position: relative;
  overflow: hidden;
  aspect-ratio: 4 / 3;
}

.gallery-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.gallery-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.75));
}

.gallery-caption small {
  color: var(--text-muted);
}

/* === Social Links === */
.social-icon-glass {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.6rem 1.2rem;
  border-radius: 2rem;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  color: var(--text-primary);
  text-decoration: none;
  transition: background var(--transition-normal), transform var(--transition-fast);
}

.social-icon-glass:hover {
  background: var(--glass-strong);
  color: var(--text-primary);
  transform: translateY(-3px);
}

footer small {
  color: var(--text-muted);
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  .animate-fadeIn,
  .animate-float {
    animation: none;
  }

  .slide {
    transition: none;
  }

  .page {
    scroll-behavior: auto;
  }
}

/* === Responsive === */
@media (max-width: 768px) {
  .section {
    padding: 60px 0;
  }

  .slideshow {
    height: 240px;
  }
}
"#;
