//! Global CSS styles for Keepsake.
//!
//! Lavender birthday palette, light and dark variable sets.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app {
  /* PASTELS */
  --lavender: #E6E6FA;
  --blush: #FFB3D9;
  --peach: #FFDAB9;
  --periwinkle: #CCCCFF;
  --off-white: #FAF9F6;

  /* ACCENTS */
  --coral: #FF6B9D;
  --gold: #FFD700;
  --deep-purple: #663399;

  /* TEXT */
  --text-primary: #36454F;
  --text-secondary: rgba(54, 69, 79, 0.7);
  --text-muted: #708090;

  /* SURFACES */
  --page-bg: linear-gradient(120deg, var(--lavender), var(--blush), var(--peach));
  --panel-bg: rgba(255, 255, 255, 0.6);
  --panel-ring: rgba(0, 0, 0, 0.05);
  --chip-border: rgba(0, 0, 0, 0.1);
  --heading: var(--deep-purple);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms ease;
}

.app.dark {
  --text-primary: #EDEBF7;
  --text-secondary: rgba(237, 235, 247, 0.7);
  --text-muted: rgba(237, 235, 247, 0.5);

  --page-bg: linear-gradient(120deg, #141022, #241a38, #1f1833);
  --panel-bg: rgba(0, 0, 0, 0.4);
  --panel-ring: rgba(255, 255, 255, 0.1);
  --chip-border: rgba(255, 255, 255, 0.15);
  --heading: #CCB3F0;
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
}

body {
  min-height: 100vh;
}

.app {
  font-family: 'Quicksand', 'Segoe UI', Georgia, sans-serif;
  background-image: var(--page-bg);
  background-size: 300% 300%;
  background-attachment: fixed;
  animation: gradient-move 18s ease-in-out infinite;
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

@keyframes gradient-move {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

/* === Typography === */
.page-title {
  color: var(--heading);
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  text-shadow: 0 0 18px rgba(230, 230, 250, 0.65);
}

.section-header {
  color: var(--heading);
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
}

.body-text {
  color: var(--text-secondary);
  max-width: 65ch;
  margin: 0 auto;
}

.handwritten {
  font-family: 'Caveat', cursive;
  font-size: 1.2em;
  color: var(--coral);
}

/* === Panels === */
.panel {
  background: var(--panel-bg);
  border-radius: 24px;
  box-shadow: 0 10px 30px rgba(102, 51, 153, 0.12);
  border: 1px solid var(--panel-ring);
  backdrop-filter: blur(8px);
  padding: 1.5rem;
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--coral);
  color: white;
  border: none;
  border-radius: 999px;
  padding: 0.75rem 2rem;
  font-size: 1.1rem;
  font-weight: 600;
  cursor: pointer;
  box-shadow: 0 0 24px rgba(230, 230, 250, 0.75);
  transition: box-shadow var(--transition-normal), transform var(--transition-fast);
}

.btn-primary:hover {
  box-shadow: 0 0 40px rgba(230, 230, 250, 0.95);
  transform: scale(1.02);
}

.btn-secondary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--chip-border);
  border-radius: 999px;
  padding: 0.5rem 1.25rem;
  font-size: 0.95rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-secondary:hover {
  background: rgba(0, 0, 0, 0.05);
}

.app.dark .btn-secondary:hover {
  background: rgba(255, 255, 255, 0.1);
}

/* === Landing === */
.landing {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  min-height: 100vh;
  padding: 2rem;
  text-align: center;
  overflow: hidden;
}

.typewriter-cursor {
  display: inline-block;
  width: 3px;
  margin-left: 4px;
  border-left: 2px solid currentColor;
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.star {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.9);
  box-shadow: 0 0 6px rgba(255, 255, 255, 0.8);
  animation: twinkle ease-in-out infinite;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 1; }
}

.balloon {
  position: absolute;
  bottom: -140px;
  animation: float-up linear infinite;
}

@keyframes float-up {
  0% { transform: translateY(0); opacity: 0; }
  10% { opacity: 0.9; }
  90% { opacity: 0.9; }
  100% { transform: translateY(-120vh); opacity: 0; }
}

.sparkle-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(1px);
}

.sparkle {
  position: absolute;
  color: var(--gold);
  text-shadow: 0 0 6px rgba(255, 215, 0, 0.8);
  animation: sparkle-pop 0.8s ease-out both;
}

@keyframes sparkle-pop {
  0% { opacity: 0; transform: scale(0); }
  50% { opacity: 1; }
  100% { opacity: 0; transform: scale(1.4); }
}

/* === Birthday page === */
.birthday-main {
  position: relative;
  max-width: 64rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 6rem;
}

.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  min-height: 70vh;
  text-align: center;
}

.hero-subtitle {
  background: var(--panel-bg);
  border-radius: 999px;
  border: 1px solid var(--panel-ring);
  padding: 0.5rem 1.25rem;
  color: var(--text-secondary);
}

.top-controls {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 20;
  display: flex;
  gap: 0.5rem;
}

.theme-toggle {
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 50;
  width: 2.5rem;
  height: 2.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: 1px solid var(--chip-border);
  background: var(--panel-bg);
  color: var(--text-primary);
  font-size: 1.1rem;
  cursor: pointer;
}

.candle-flame {
  animation: flicker 0.9s ease-in-out infinite;
  transform-origin: center bottom;
}

@keyframes flicker {
  0%, 100% { opacity: 0.75; transform: scale(1); }
  50% { opacity: 1; transform: scale(1.15); }
}

/* === Message === */
.message-panel {
  padding: 2rem;
  text-align: center;
}

.message-text {
  font-size: 1.15rem;
  line-height: 2;
  color: var(--text-primary);
  max-width: 60ch;
  margin: 1rem auto 0;
}

/* === Countdown === */
.countdown-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  margin-top: 1.5rem;
}

.countdown-ring {
  position: relative;
  width: 180px;
  height: 180px;
}

.countdown-ring-label {
  position: absolute;
  inset: 0;
  display: grid;
  place-items: center;
  text-align: center;
  pointer-events: none;
}

.countdown-ring-caption {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.countdown-ring-days {
  font-size: 2.5rem;
  font-weight: 800;
  color: var(--heading);
}

.countdown-cards {
  display: grid;
  grid-template-columns: repeat(4, minmax(5rem, 1fr));
  gap: 1rem;
}

.flip-card {
  background: var(--panel-bg);
  border-radius: 14px;
  border: 1px solid var(--panel-ring);
  padding: 0.75rem 1rem;
  text-align: center;
  min-width: 5rem;
}

.flip-card-value {
  font-size: 1.6rem;
  font-weight: 700;
  color: var(--heading);
  font-variant-numeric: tabular-nums;
}

.flip-card-label {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.countdown-quote {
  margin: 1.5rem auto 0;
  max-width: 42rem;
  border: 1px solid var(--periwinkle);
  border-radius: 16px;
  background: var(--panel-bg);
  padding: 1rem;
  text-align: center;
}

/* === Memory timeline === */
.memories-main {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 3rem;
  padding-left: 3.5rem;
}

.timeline::before {
  content: "";
  position: absolute;
  left: 1.5rem;
  top: 0;
  height: 100%;
  width: 1px;
  background: var(--periwinkle);
}

.timeline-summary {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 2rem;
  padding-left: 3.5rem;
}

.count-chip {
  border: 1px solid var(--chip-border);
  border-radius: 999px;
  padding: 0.25rem 1rem;
  font-size: 0.9rem;
}

.year-card {
  position: relative;
  border-radius: 24px;
  background: var(--panel-bg);
  border: 1px solid var(--panel-ring);
  backdrop-filter: blur(8px);
  padding: 1.25rem;
}

.year-node {
  position: absolute;
  left: -3rem;
  top: 0.75rem;
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--lavender);
  color: #111;
  font-size: 0.75rem;
  font-weight: 800;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
}

.year-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.year-title {
  font-size: 1.4rem;
  font-weight: 600;
  color: var(--heading);
}

.preview-strip {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.75rem;
  overflow-x: auto;
  padding-bottom: 0.25rem;
}

.preview-thumb {
  flex-shrink: 0;
  width: 7rem;
  height: 5rem;
  border-radius: 8px;
  border: 1px solid var(--chip-border);
  overflow: hidden;
  padding: 0;
  cursor: pointer;
  background: var(--panel-bg);
  transition: transform var(--transition-fast);
}

.preview-thumb:hover {
  transform: scale(1.02);
}

.preview-thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-grid {
  columns: 3 14rem;
  column-gap: 1rem;
  margin-top: 1.25rem;
}

.polaroid {
  break-inside: avoid;
  margin-bottom: 1rem;
  padding: 0.75rem;
}

.polaroid:nth-child(odd) { transform: rotate(-1deg); }
.polaroid:nth-child(even) { transform: rotate(1deg); }

.polaroid-inner {
  background: white;
  border-radius: 8px;
  padding: 0.5rem;
  box-shadow: 0 6px 18px rgba(0, 0, 0, 0.12);
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.polaroid-inner:hover {
  transform: scale(1.015);
}

.polaroid-inner img {
  width: 100%;
  height: auto;
  border-radius: 4px;
  display: block;
}

.polaroid-caption {
  margin-top: 0.5rem;
  text-align: center;
  font-size: 0.9rem;
  color: #111;
  overflow-wrap: break-word;
}

.empty-year {
  margin-top: 0.75rem;
  color: var(--text-muted);
  font-size: 0.9rem;
  font-style: italic;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  padding: 1rem;
  outline: none;
}

.lightbox-frame {
  position: relative;
  width: 92vw;
  max-width: 64rem;
  height: 80vh;
  border-radius: 12px;
  background: rgba(0, 0, 0, 0.3);
  border: 1px solid rgba(255, 255, 255, 0.1);
  overflow: hidden;
}

.lightbox-frame img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.lightbox-caption {
  position: absolute;
  bottom: 0.75rem;
  left: 50%;
  transform: translateX(-50%);
  color: white;
  background: rgba(0, 0, 0, 0.4);
  border-radius: 999px;
  padding: 0.25rem 1rem;
  font-size: 0.9rem;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  background: rgba(0, 0, 0, 0.4);
  color: white;
  font-size: 1.25rem;
  cursor: pointer;
}

.lightbox-nav:hover { background: rgba(0, 0, 0, 0.6); }
.lightbox-nav.prev { left: 0.5rem; }
.lightbox-nav.next { right: 0.5rem; }

.lightbox-close {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 999px;
  padding: 0.25rem 0.75rem;
  background: rgba(0, 0, 0, 0.4);
  color: white;
  cursor: pointer;
}

/* === Final surprise === */
.surprise-panel {
  position: relative;
  overflow: hidden;
  text-align: center;
  padding: 2rem 1.5rem;
}

.surprise-actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.certificate-frame {
  margin: 1.5rem auto 0;
  max-width: 48rem;
  border-radius: 16px;
  border: 1px solid var(--chip-border);
  background: var(--off-white);
  padding: 1rem;
}

.certificate-frame img {
  width: 100%;
  height: auto;
  display: block;
  border-radius: 8px;
}

.share-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.status-text {
  margin-top: 0.75rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}
"#;
