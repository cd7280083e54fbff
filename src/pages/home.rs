//! The single portfolio page: hero, about, projects, contact.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::components::projects_section::ProjectsSection;

/// Whole-page layout. Every `<section>` takes part in the scroll reveal.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main>
            <section id="home" class="hero">
                <h1 class="hero__title">"Hi, I build things for the web"</h1>
                <p class="hero__subtitle">"Developer \u{00b7} Designer \u{00b7} Problem solver"</p>
                <a href="#projects" class="btn btn--primary">"See my work"</a>
            </section>

            <section id="about" class="about glass">
                <h2 class="section-title">"About"</h2>
                <img class="about__photo" data-src="/assets/profile.jpg" alt="Profile photo"/>
                <p>
                    "I enjoy turning ideas into fast, accessible websites and applications. "
                    "Below is a selection of recent projects; filter them by technology."
                </p>
            </section>

            <ProjectsSection/>

            <section id="contact" class="contact">
                <h2 class="section-title">"Contact"</h2>
                <ContactForm/>
            </section>
        </main>
        <footer class="footer">
            <a href="#home">"Back to top \u{2191}"</a>
        </footer>
    }
}
