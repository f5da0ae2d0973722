use std::io;
use std::net::TcpListener;

use actix_web::dev::{Server, ServerHandle};
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use longblock::control::ControlService;
use longblock::module::DebugModule;
use longblock_config::shared::ApiConfig;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use crate::routes::debug::{pause, resume};
use crate::routes::docs::openapi_json;
use crate::routes::health_check::health_check;

/// Control API server of a node.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Binds the address from `config` and prepares the server for `module`.
    ///
    /// The server does not accept requests until [`Application::run_until_stopped`] is
    /// awaited.
    pub fn build(config: &ApiConfig, module: &DebugModule) -> io::Result<Self> {
        let listener = TcpListener::bind(config.address())?;
        let port = listener.local_addr()?.port();
        let server = run(listener, module)?;

        info!(port, "control api bound");

        Ok(Self { port, server })
    }

    /// Returns the port the server is bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns a handle that can stop the server from another task.
    pub fn server_handle(&self) -> ServerHandle {
        self.server.handle()
    }

    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Creates the control API server on `listener`.
///
/// The pause and resume routes are only registered when `module` exposes a control
/// service, i.e. when the `debug` feature is compiled in.
pub fn run(listener: TcpListener, module: &DebugModule) -> io::Result<Server> {
    let control_service = module.control_service().map(Data::new);
    if control_service.is_none() {
        warn!(
            module = module.name(),
            "module is disabled, pause and resume routes are not registered"
        );
    }

    let server = HttpServer::new(move || {
        let control_service = control_service.clone();
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(openapi_json)
            .configure(|cfg| configure_debug_routes(cfg, control_service))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn configure_debug_routes(cfg: &mut web::ServiceConfig, control: Option<Data<ControlService>>) {
    let Some(control) = control else {
        return;
    };

    cfg.app_data(control).service(pause).service(resume);
}
