use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod components {
    pub mod badge;
    pub mod button;
    pub mod card;
    pub mod class_list;
}
mod pages {
    pub mod home;
}

use components::button::Button;
use components::class_list::class_list;
use pages::home::{open_external, scroll_to_section, Home};

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("servicios", "Servicios"),
    ("experiencia", "Experiencia"),
    ("proyectos", "Proyectos"),
    ("contacto", "Contacto"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_whatsapp = Callback::from(|_: MouseEvent| open_external(&config::whatsapp_url()));

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={class_list([Some("top-nav"), (*is_scrolled).then(|| "scrolled")])}>
            <div class="nav-content">
                <div class="nav-logo">{"DIT"}<span class="accent">{"Pro"}</span></div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|&(section_id, label)| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            menu_open.set(false);
                            scroll_to_section(section_id);
                        });
                        html! {
                            <button class="nav-link" onclick={onclick}>{label}</button>
                        }
                    }) }
                    <Button class="whatsapp-cta" onclick={open_whatsapp}>
                        {"💬 WhatsApp"}
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
