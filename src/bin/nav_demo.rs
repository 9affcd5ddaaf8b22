use dioxus::prelude::*;
use nav_toggle::components::{NavBar, NavLink};

// Links are hidden on narrow screens until the toggle adds `show-nav`
static NAV_CSS: &str = r#"
.navbar { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #212530; color: #f1f5f9; }
.nav-header { display: flex; align-items: center; justify-content: space-between; width: 100%; }
.nav-brand { font-weight: 600; letter-spacing: 0.05em; }
.nav-toggle-btn { display: none; background: none; border: 0; color: inherit; font-size: 1.5rem; cursor: pointer; }
.nav-links { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.nav-links a { color: inherit; text-decoration: none; }
@media (max-width: 800px) {
    .nav-toggle-btn { display: block; }
    .nav-links { display: none; flex-direction: column; width: 100%; padding-top: 0.75rem; }
    .nav-links.show-nav { display: flex; }
}
"#;

fn main() {
    nav_toggle::wasm::init_logging(Some("debug".to_string()));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let links = vec![
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Projects", "#projects"),
        NavLink::new("Contact", "#contact"),
    ];

    rsx! {
        style { {NAV_CSS} }

        NavBar { brand: "Nav Toggle", links }

        main {
            style: "padding: 2rem; font-family: sans-serif;",
            h1 { "Responsive navigation" }
            p { "Narrow the window and use the menu button to show or hide the links." }
        }
    }
}
