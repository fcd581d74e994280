#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use myfeeds::api::{get_analytics, get_menu, get_reviews, submit_review};
    use myfeeds::app::*;
    use myfeeds::store::Store;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Seed the in-memory store; all state is volatile and resets on restart
    let store = Arc::new(Mutex::new(Store::with_menu()));
    println!("Menu seeded successfully!");

    // Load configuration
    let conf = get_configuration(None).await.unwrap();
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    println!("listening on http://{}", &addr);

    // Start the Actix Web server
    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;
        let store = store.clone(); // Clone the Arc for each worker

        App::new()
            // Register custom API routes BEFORE Leptos server functions
            .service(
                web::scope("/api")
                    .app_data(web::Data::new(store.clone()))
                    .route("/menu", web::get().to(get_menu)) // GET /api/menu
                    .route("/reviews", web::get().to(get_reviews)) // GET /api/reviews
                    .route("/reviews", web::post().to(submit_review)) // POST /api/reviews
                    .route("/analytics", web::get().to(get_analytics)), // GET /api/analytics
            )
            // Register server functions
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            // Pass Leptos options to the app
            .app_data(web::Data::new(leptos_options.to_owned()))
            // Pass the store as shared state
            .app_data(web::Data::new(store))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use myfeeds::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
