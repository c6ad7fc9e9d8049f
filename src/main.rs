#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing;

mod api;
mod components;
mod feed;
mod pages;

const SERVE_PORT: u16 = 8080;

fn main() {
    // Init logger
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("starting horizon portal");

    #[cfg(feature = "web")]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    {
        use axum::Router;
        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let app = Router::new()
                .serve_dioxus_application(ServeConfig::builder().build(), || VirtualDom::new(App))
                .await;
            let addr = std::net::SocketAddr::from(([0, 0, 0, 0], SERVE_PORT));
            tracing::info!("serving portal on {addr}");
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
                .unwrap();
        });
    }
}

fn App() -> Element {
    rsx! {
        Router::<pages::Pages> {}
    }
}
