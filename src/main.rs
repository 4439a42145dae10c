#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::config::get_configuration;
    use leptos::prelude::provide_context;
    use leptos_actix::{generate_route_list, LeptosRoutes};

    use login_dialog::common::ConfigError;
    use login_dialog::config::AppConfig;
    use login_dialog::frontend::{self, shell};

    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let conf = get_configuration(None)
        .map_err(|e| std::io::Error::other(ConfigError::Leptos(e.to_string())))?;
    let addr = app_config.bind_addr_or(conf.leptos_options.site_addr);

    log::info!(
        "Serving login dialog on http://{} (demo account: {})",
        addr,
        app_config.demo_account.username
    );

    let demo_account = app_config.demo_account;

    HttpServer::new(move || {
        let routes = generate_route_list(frontend::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .route(
                "/api/{tail:.*}",
                leptos_actix::handle_server_fns_with_context({
                    let demo_account = demo_account.clone();
                    move || provide_context(demo_account.clone())
                }),
            )
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .service(Files::new("/", site_root.as_str()))
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
