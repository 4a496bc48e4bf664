use crate::components::Header;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <Stylesheet id="leptos" href="/pkg/narratus.css" />
                <Title text="narratus" />
            </head>

            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <Header />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::App;
    use crate::nav;
    use crate::test_support::visible_text;
    use leptos::prelude::*;

    fn render() -> String {
        Owner::new().with(|| view! { <App /> }.to_html())
    }

    #[test]
    fn wraps_a_single_header_in_the_app_container() {
        let html = render();
        let container = html.find(r#"<div class="App">"#).expect("app container");
        let header = html.find("<header").expect("header");
        assert!(container < header);
        assert!(html.rfind("</header>") < html.rfind("</div>"));
        assert_eq!(html.matches(r#"class="App""#).count(), 1);
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("</header>").count(), 1);
    }

    #[test]
    fn text_content_matches_nav_table() {
        let text = visible_text(&render());
        assert_eq!(
            text,
            "narratus Connections Datasets Charts Reports Settings Login"
        );
        assert_eq!(text, nav::text_content());
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = render();
        let second = render();
        assert_eq!(first, second);
    }
}
