use log::info;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::config;

/// Smooth-scrolls the section with the given id into view. Unknown ids are
/// ignored so nav links never blow up on a half-rendered page.
pub fn scroll_to_section(section_id: &str) {
    let element = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Opens the url in a new tab. Popup blockers can refuse; the page stays put.
pub fn open_external(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    highlights: [&'static str; 3],
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "🛡️",
        title: "Seguridad del Material",
        description: "Protección y respaldo completo de todo el material grabado. Sistemas redundantes y protocolos de seguridad para evitar pérdidas.",
        highlights: ["Respaldos múltiples", "Verificación de integridad", "Protocolos de seguridad"],
    },
    Service {
        icon: "🎥",
        title: "Configuración de Cámaras",
        description: "Configuración técnica óptima de equipos de grabación y calibración precisa para obtener la mejor calidad de imagen.",
        highlights: ["Calibración profesional", "Optimización de settings", "Control de exposición"],
    },
    Service {
        icon: "🎨",
        title: "Corrección de Color en Vivo",
        description: "Corrección y gradación de color en tiempo real para que el cliente visualice el resultado final durante la grabación.",
        highlights: ["Color grading en vivo", "LUTs personalizados", "Preview en tiempo real"],
    },
    Service {
        icon: "🖥️",
        title: "Monitoreo Técnico",
        description: "Supervisión continua de parámetros técnicos y calidad de imagen durante toda la producción.",
        highlights: ["Control de calidad", "Análisis técnico", "Reportes detallados"],
    },
    Service {
        icon: "🎬",
        title: "Workflow Digital",
        description: "Diseño e implementación de flujos de trabajo digitales eficientes para optimizar la producción.",
        highlights: ["Flujos optimizados", "Integración de sistemas", "Automatización"],
    },
    Service {
        icon: "⚡",
        title: "Soporte Técnico 24/7",
        description: "Disponibilidad completa durante la producción con respuesta inmediata ante cualquier incidencia técnica.",
        highlights: ["Disponibilidad total", "Respuesta inmediata", "Soluciones rápidas"],
    },
];

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const EXPERIENCE_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "🎬",
        title: "Largometrajes",
        description: "Participación en más de 15 producciones cinematográficas",
    },
    Highlight {
        icon: "🖥️",
        title: "Series de TV",
        description: "Trabajo continuo en series para plataformas streaming",
    },
    Highlight {
        icon: "⭐",
        title: "Comerciales",
        description: "Colaboración con marcas reconocidas internacionalmente",
    },
];

struct Project {
    title: &'static str,
    kind: &'static str,
    description: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Largometraje Independiente",
        kind: "Película",
        description: "Responsable de la seguridad del material y corrección de color en tiempo real para producción independiente.",
        image: "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    },
    Project {
        title: "Serie Streaming",
        kind: "Serie TV",
        description: "Configuración de workflow digital y monitoreo técnico para serie de 8 episodios.",
        image: "https://images.unsplash.com/photo-1518611012118-696072aa579a?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    },
    Project {
        title: "Campaña Publicitaria",
        kind: "Comercial",
        description: "Corrección de color en vivo y configuración de cámaras para campaña de marca internacional.",
        image: "https://images.unsplash.com/photo-1492619375914-88005aa9e8fb?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    },
];

const STATS: [(&str, &str); 3] = [
    ("50+", "Producciones"),
    ("5+", "Años Experiencia"),
    ("100%", "Satisfacción"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            info!("Rendering home page");
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_whatsapp = Callback::from(|_: MouseEvent| open_external(&config::whatsapp_url()));
    let goto_services = Callback::from(|_: MouseEvent| scroll_to_section("servicios"));

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <div class="hero-text">
                        <Badge class="hero-badge">{"Técnico de la Imagen Digital"}</Badge>
                        <h1>
                            {"Protejo y Perfecciono tu "}
                            <span class="accent-gradient">{"Visión Audiovisual"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Especialista DIT con experiencia en producciones cinematográficas, series y comerciales. Garantizo la seguridad de tu material, configuración óptima de cámaras y corrección de color en tiempo real."}
                        </p>
                        <div class="hero-cta-group">
                            <Button size={ButtonSize::Large} class="hero-cta" onclick={open_whatsapp.clone()}>
                                {"💬 Contactar por WhatsApp"}
                            </Button>
                            <Button size={ButtonSize::Large} variant={ButtonVariant::Outline} class="hero-secondary" onclick={goto_services}>
                                {"Ver Servicios"}
                            </Button>
                        </div>
                        <div class="hero-stats">
                            { for STATS.iter().map(|&(value, label)| html! {
                                <div class="stat">
                                    <div class="stat-value">{value}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="hero-image">
                        <img
                            src="https://images.unsplash.com/photo-1492619375914-88005aa9e8fb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80"
                            alt="Cámara profesional de video para producciones cinematográficas"
                            loading="lazy"
                        />
                    </div>
                </div>
            </header>

            <section id="servicios" class="services-section">
                <div class="section-heading">
                    <h2>{"Servicios Especializados DIT"}</h2>
                    <p>{"Ofrezco servicios completos de técnico de imagen digital para garantizar la máxima calidad en tu producción audiovisual"}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Card class="service-card">
                            <CardContent class="service-card-content">
                                <span class="service-icon">{service.icon}</span>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="check-list">
                                    { for service.highlights.iter().map(|highlight| html! {
                                        <li><span class="check">{"✓"}</span>{*highlight}</li>
                                    }) }
                                </ul>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </section>

            <section id="experiencia" class="experience-section">
                <div class="experience-content">
                    <div class="experience-text">
                        <h2>{"Experiencia Profesional"}</h2>
                        <p class="section-lead">
                            {"Con más de 5 años de experiencia en la industria audiovisual, he trabajado en producciones de alto nivel garantizando la máxima calidad técnica y seguridad del material."}
                        </p>
                        <div class="experience-highlights">
                            { for EXPERIENCE_HIGHLIGHTS.iter().map(|highlight| html! {
                                <div class="experience-item">
                                    <div class="experience-icon">{highlight.icon}</div>
                                    <div>
                                        <h3>{highlight.title}</h3>
                                        <p>{highlight.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="experience-image">
                        <img
                            src="https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80"
                            alt="Equipo profesional de DIT en acción"
                            loading="lazy"
                        />
                    </div>
                </div>
            </section>

            <section id="proyectos" class="projects-section">
                <div class="section-heading">
                    <h2>{"Proyectos Destacados"}</h2>
                    <p>{"Algunos de los proyectos más importantes en los que he participado como DIT"}</p>
                </div>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <Card class="project-card">
                            <div class="project-media">
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <Badge class="project-tag">{project.kind}</Badge>
                            </div>
                            <CardContent class="project-card-content">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </section>

            <section id="contacto" class="contact-section">
                <h2>{"¿Listo para tu Próxima Producción?"}</h2>
                <p class="section-lead">
                    {"Contacta conmigo para discutir los requerimientos técnicos de tu proyecto audiovisual. Garantizo profesionalismo, calidad y seguridad en cada producción."}
                </p>
                <div class="contact-grid">
                    <Card class="contact-card">
                        <h3>{"Servicios DIT"}</h3>
                        <ul class="check-list">
                            <li><span class="check">{"✓"}</span>{"Seguridad del material"}</li>
                            <li><span class="check">{"✓"}</span>{"Configuración de cámaras"}</li>
                            <li><span class="check">{"✓"}</span>{"Corrección de color en vivo"}</li>
                            <li><span class="check">{"✓"}</span>{"Monitoreo técnico"}</li>
                            <li><span class="check">{"✓"}</span>{"Soporte 24/7"}</li>
                        </ul>
                    </Card>
                    <Card class="contact-card">
                        <h3>{"Desarrollo Web"}</h3>
                        <p>{"También ofrezco servicios de desarrollo web profesional para empresas y profesionales que buscan una presencia digital de calidad."}</p>
                        <ul class="check-list">
                            <li><span class="check">{"✓"}</span>{"Páginas web profesionales"}</li>
                            <li><span class="check">{"✓"}</span>{"Diseño responsive"}</li>
                            <li><span class="check">{"✓"}</span>{"Optimización SEO"}</li>
                        </ul>
                    </Card>
                </div>
                <Button size={ButtonSize::Large} class="whatsapp-cta contact-cta" onclick={open_whatsapp.clone()}>
                    {"💬 Contactar por WhatsApp"}
                </Button>
            </section>

            <footer class="footer">
                <div class="footer-brand">{"DIT"}<span class="accent">{"Pro"}</span></div>
                <p>{"Técnico de la Imagen Digital | Desarrollo Web Profesional"}</p>
                <Button variant={ButtonVariant::Ghost} size={ButtonSize::Small} class="footer-whatsapp" onclick={open_whatsapp.clone()}>
                    {"💬 WhatsApp"}
                </Button>
                <div class="footer-copy">{"© 2024 DITPro. Todos los derechos reservados."}</div>
            </footer>

            <div class="whatsapp-float-wrap">
                <Button class="whatsapp-float" onclick={open_whatsapp}>
                    {"💬"}
                </Button>
            </div>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #0f172a 100%);
                        color: #ffffff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        line-height: 1.5;
                    }

                    .landing-page h1,
                    .landing-page h2,
                    .landing-page h3,
                    .landing-page p,
                    .landing-page ul {
                        margin: 0;
                    }

                    .accent {
                        color: #fbbf24;
                    }

                    .accent-gradient {
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    /* UI primitives */

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border: 1px solid transparent;
                        border-radius: 8px;
                        font-size: 0.95rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.2s ease, color 0.2s ease, border-color 0.2s ease;
                    }

                    .btn:disabled {
                        opacity: 0.5;
                        pointer-events: none;
                    }

                    .btn-default {
                        background: #2563eb;
                        color: #ffffff;
                    }

                    .btn-default:hover {
                        background: #1d4ed8;
                    }

                    .btn-outline {
                        background: transparent;
                        border-color: rgba(255, 255, 255, 0.25);
                        color: #ffffff;
                    }

                    .btn-outline:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .btn-ghost {
                        background: transparent;
                        color: #94a3b8;
                    }

                    .btn-ghost:hover {
                        background: rgba(255, 255, 255, 0.08);
                        color: #ffffff;
                    }

                    .btn-md {
                        height: 2.5rem;
                        padding: 0 1rem;
                    }

                    .btn-sm {
                        height: 2.25rem;
                        padding: 0 0.75rem;
                        font-size: 0.85rem;
                    }

                    .btn-lg {
                        height: 2.9rem;
                        padding: 0 2rem;
                        font-size: 1.05rem;
                    }

                    .badge {
                        display: inline-flex;
                        align-items: center;
                        border: 1px solid transparent;
                        border-radius: 9999px;
                        padding: 0.2rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }

                    .badge-default {
                        background: #2563eb;
                        color: #ffffff;
                    }

                    .badge-secondary {
                        background: rgba(255, 255, 255, 0.1);
                        color: #e2e8f0;
                    }

                    .badge-destructive {
                        background: #dc2626;
                        color: #ffffff;
                    }

                    .badge-outline {
                        background: transparent;
                        border-color: rgba(255, 255, 255, 0.3);
                        color: #ffffff;
                    }

                    .card {
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid #334155;
                        border-radius: 16px;
                        transition: background 0.3s ease;
                    }

                    .card:hover {
                        background: rgba(30, 41, 59, 0.7);
                    }

                    .card-content {
                        padding: 2rem;
                    }

                    /* Navigation */

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        transition: background 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(2, 6, 23, 0.85);
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }

                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #ffffff;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        padding: 0;
                        font-size: 0.95rem;
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #ffffff;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.4rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #ffffff;
                        border-radius: 2px;
                    }

                    .whatsapp-cta {
                        background: #16a34a;
                    }

                    .whatsapp-cta:hover {
                        background: #15803d;
                    }

                    /* Hero */

                    .hero {
                        padding: 8rem 1.5rem 4rem;
                    }

                    .hero-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-text {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                    }

                    .hero-badge {
                        background: rgba(251, 191, 36, 0.2);
                        border-color: rgba(251, 191, 36, 0.3);
                        color: #fbbf24;
                    }

                    .hero h1 {
                        font-size: 3.2rem;
                        font-weight: 700;
                        line-height: 1.15;
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: #cbd5e1;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .hero-cta {
                        background: linear-gradient(90deg, #f59e0b, #ea580c);
                    }

                    .hero-cta:hover {
                        background: linear-gradient(90deg, #d97706, #c2410c);
                    }

                    .hero-secondary {
                        border-color: rgba(255, 255, 255, 0.2);
                    }

                    .hero-stats {
                        display: flex;
                        gap: 2.5rem;
                        padding-top: 0.5rem;
                    }

                    .stat {
                        text-align: center;
                    }

                    .stat-value {
                        font-size: 1.6rem;
                        font-weight: 700;
                    }

                    .stat-label {
                        font-size: 0.85rem;
                        color: #94a3b8;
                    }

                    .hero-image img {
                        width: 100%;
                        height: 600px;
                        object-fit: cover;
                        border-radius: 24px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                    }

                    /* Sections */

                    .section-heading {
                        max-width: 760px;
                        margin: 0 auto 4rem;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .section-heading h2,
                    .experience-text h2,
                    .contact-section h2 {
                        font-size: 2.4rem;
                        font-weight: 700;
                    }

                    .section-heading p,
                    .section-lead {
                        font-size: 1.15rem;
                        color: #cbd5e1;
                    }

                    .services-section {
                        padding: 5rem 1.5rem;
                        background: rgba(0, 0, 0, 0.2);
                    }

                    .services-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .service-card-content {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                    }

                    .service-icon {
                        font-size: 2.4rem;
                    }

                    .service-card h3 {
                        font-size: 1.3rem;
                        font-weight: 700;
                    }

                    .service-card p {
                        color: #cbd5e1;
                    }

                    .check-list {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                        font-size: 0.9rem;
                        color: #94a3b8;
                    }

                    .check-list li {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                    }

                    .check {
                        color: #4ade80;
                        font-weight: 700;
                    }

                    .experience-section {
                        padding: 5rem 1.5rem;
                    }

                    .experience-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    .experience-text {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .experience-highlights {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .experience-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }

                    .experience-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(251, 191, 36, 0.15);
                        border-radius: 12px;
                        font-size: 1.4rem;
                    }

                    .experience-item h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                    }

                    .experience-item p {
                        color: #94a3b8;
                    }

                    .experience-image img {
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        border-radius: 24px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                    }

                    .projects-section {
                        padding: 5rem 1.5rem;
                        background: rgba(0, 0, 0, 0.2);
                    }

                    .projects-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .project-card {
                        overflow: hidden;
                    }

                    .project-media {
                        position: relative;
                        height: 12rem;
                    }

                    .project-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .project-tag {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: rgba(251, 191, 36, 0.9);
                        color: #111111;
                    }

                    .project-card-content {
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }

                    .project-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .project-card p {
                        color: #cbd5e1;
                    }

                    .contact-section {
                        padding: 5rem 1.5rem;
                        max-width: 960px;
                        margin: 0 auto;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }

                    .contact-grid {
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }

                    .contact-card {
                        padding: 2rem;
                        text-align: left;
                        display: flex;
                        flex-direction: column;
                        gap: 1.2rem;
                    }

                    .contact-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }

                    .contact-card p {
                        color: #cbd5e1;
                    }

                    .contact-cta {
                        padding: 0 3rem;
                        font-size: 1.1rem;
                    }

                    /* Footer */

                    .footer {
                        padding: 3rem 1.5rem;
                        background: rgba(0, 0, 0, 0.4);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.2rem;
                    }

                    .footer-brand {
                        font-size: 1.4rem;
                        font-weight: 700;
                    }

                    .footer p {
                        color: #94a3b8;
                    }

                    .footer-copy {
                        width: 100%;
                        margin-top: 1rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.85rem;
                        color: #64748b;
                    }

                    .whatsapp-float-wrap {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                    }

                    .whatsapp-float {
                        width: 3.5rem;
                        height: 3.5rem;
                        padding: 0;
                        border-radius: 50%;
                        background: #22c55e;
                        font-size: 1.4rem;
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.35);
                    }

                    .whatsapp-float:hover {
                        background: #16a34a;
                    }

                    @media (max-width: 900px) {
                        .services-grid,
                        .projects-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .hero {
                            padding-top: 6.5rem;
                        }

                        .hero-content,
                        .experience-content,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero h1 {
                            font-size: 2.3rem;
                        }

                        .hero-image img,
                        .experience-image img {
                            height: 340px;
                        }

                        .services-grid,
                        .projects-grid {
                            grid-template-columns: 1fr;
                        }

                        .nav-right {
                            display: none;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: stretch;
                            padding: 1rem 1.5rem 1.5rem;
                            background: rgba(2, 6, 23, 0.95);
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        }

                        .burger-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
