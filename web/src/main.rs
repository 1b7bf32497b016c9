use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{
    AnswerLab, AskQuestion, Home, Login, NotFound, QuestionDetail, Register, Search, TagQuestions,
    Tags, UserLab, UserProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/ask")]
        AskQuestion {},
        #[route("/questions/:id")]
        QuestionDetail { id: String },
        #[route("/tags")]
        Tags {},
        #[route("/tags/:tag_name")]
        TagQuestions { tag_name: String },
        #[route("/users/:id")]
        UserProfile { id: String },
        #[route("/search?:q")]
        Search { q: String },
        #[route("/debug/answers")]
        AnswerLab {},
        #[route("/debug/users")]
        UserLab {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Shared chrome: the navbar on every page, routed content below it.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_search: move |keyword: String| {
                nav.push(Route::Search { q: keyword });
            },
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        footer {
            class: "muted centered",
            "StackUnderflow — a place to ask and answer questions"
        }
    }
}
