//! Page-wide stylesheet. Colors arrive inline from the active theme (or as
//! `--token` variables where a rule needs a pseudo-class or media query);
//! this sheet owns layout, transitions, and responsive behavior only.

pub const GLOBAL_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

html {
    scroll-padding-top: 4rem;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

/* Top navigation */
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 3.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.25rem;
    z-index: 20;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav-link {
    background: transparent;
    border: none;
    color: var(--nav-link-color, #ffffff);
    font-size: 1rem;
    padding: 0.5rem 0.75rem;
    cursor: pointer;
    border-radius: 4px;
}

.nav-link:hover {
    background: rgba(255, 255, 255, 0.15);
}

.theme-switch {
    border: none;
    border-radius: 50%;
    width: 2.25rem;
    height: 2.25rem;
    font-size: 1.1rem;
    cursor: pointer;
}

/* Burger is a mobile-only affordance */
.burger {
    display: none;
    flex-direction: column;
    justify-content: space-around;
    width: 2rem;
    height: 2rem;
    background: transparent;
    border: none;
    cursor: pointer;
    padding: 0;
    z-index: 25;
}

.burger-bar {
    width: 2rem;
    height: 0.25rem;
    border-radius: 10px;
    transition: transform 0.3s linear, opacity 0.3s linear;
    transform-origin: 1px;
}

.burger.open .burger-bar:nth-child(1) {
    transform: rotate(45deg);
}

.burger.open .burger-bar:nth-child(2) {
    opacity: 0;
}

.burger.open .burger-bar:nth-child(3) {
    transform: rotate(-45deg);
}

.nav-overlay {
    display: none;
}

@media (max-width: 768px) {
    .burger {
        display: flex;
    }

    .nav-links {
        position: fixed;
        top: 0;
        right: 0;
        height: 100vh;
        width: 70vw;
        max-width: 20rem;
        flex-direction: column;
        align-items: flex-start;
        gap: 1rem;
        padding: 5rem 2rem 2rem 2rem;
        background: var(--drawer-bg, #ffffff);
        transform: translateX(100%);
        transition: transform 0.3s ease-in-out;
        z-index: 22;
    }

    .nav-links.open {
        transform: translateX(0);
    }

    /* Drawer links sit on the card background, not the header gradient */
    .nav-links .nav-link {
        color: var(--drawer-link-color, #4B4B4B);
        font-size: 1.1rem;
    }

    .nav-overlay {
        display: block;
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.55);
        z-index: 21;
        border: none;
        padding: 0;
    }
}

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 5rem 1.5rem 2rem 1.5rem;
}

.hero h1 {
    font-size: 2.75rem;
    margin: 0 0 0.5rem 0;
}

.hero p {
    font-size: 1.25rem;
    margin: 0 0 2rem 0;
}

.hero-cta {
    border: none;
    border-radius: 6px;
    padding: 0.75rem 1.5rem;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.2s ease-out;
}

.hero-cta:hover {
    transform: translateY(-2px);
}

/* Sections */
.section-header {
    padding: 2.5rem 1rem;
    text-align: center;
}

.section-header h2 {
    margin: 0;
    font-size: 1.75rem;
}

.about-layout {
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: center;
    width: 100%;
    padding: 1rem;
}

.about-column {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    width: 100%;
    padding: 2rem 20rem;
}

.skill-row {
    display: flex;
    align-items: center;
    justify-content: flex-start;
    flex-wrap: wrap;
    gap: 1rem;
    overflow-x: hidden;
}

.skill-logo {
    transition: transform 0.2s ease-out;
}

.skill-logo:hover {
    transform: scale(1.1) rotate(6deg);
}

@media (max-width: 768px) {
    .about-layout {
        flex-direction: column;
    }

    .about-column {
        padding: 2rem;
    }

    .skill-row {
        justify-content: center;
    }
}

/* Cards */
.project-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 2rem 2rem 0.5rem 2rem;
}

.project-card {
    width: 20rem;
    border-radius: 8px;
    overflow: hidden;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
    transition: transform 0.2s ease-out;
}

.project-card:hover {
    transform: translateY(-4px);
}

.project-card img {
    width: 100%;
    height: 12rem;
    object-fit: cover;
    object-position: top;
    display: block;
}

.tag-chip {
    display: inline-block;
    padding: 0.15rem 0.5rem;
    margin: 0 0.35rem 0.35rem 0;
    border-radius: 4px;
    font-size: 0.8rem;
    color: #ffffff;
}

.game-card {
    max-width: 46rem;
    width: 100%;
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 2rem;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
}

.game-screenshots {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 1rem;
}

.game-screenshots img {
    width: 9rem;
    height: auto;
    border-radius: 4px;
}

.video-frame {
    width: 560px;
    height: 315px;
    margin: 2rem 0;
}

@media (max-width: 768px) {
    .project-row {
        justify-content: center;
    }

    .video-frame {
        width: 100%;
        height: 360px;
    }
}

/* Contact */
.contact-row {
    display: flex;
    align-items: center;
    justify-content: center;
    flex-wrap: wrap;
    gap: 1rem;
    padding: 1rem 0 2rem 0;
}

.social-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    font-size: 1.25rem;
    text-decoration: none;
    transition: transform 0.2s ease-out;
}

.social-icon:hover {
    transform: scale(1.1);
}

/* Scroll-to-top */
.scroll-top {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    width: 3rem;
    height: 3rem;
    border: none;
    border-radius: 50%;
    font-size: 1.25rem;
    cursor: pointer;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.35);
    z-index: 18;
}

.scroll-top:hover {
    transform: translateY(-2px);
}
"#;
