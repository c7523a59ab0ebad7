use api::Router;
use db::{Config, Database, NoTls};
use hyper::{server::conn::http1, service};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    fmt::Display,
    future::Future,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port = env::var("PORT")?.parse()?;
    let user = env::var("PG_USERNAME")?;
    let pass = env::var("PG_PASSWORD")?;
    let host = env::var("PG_HOSTNAME")?;
    let data = env::var("PG_DATABASE")?;
    let pg_port = match env::var("PG_PORT") {
        Ok(port) => port.parse()?,
        _ => 5432,
    };

    let mut config = Config::new();
    config.user(&user).password(&pass).host(&host).dbname(&data).port(pg_port);

    let runtime = Runtime::new()?;
    runtime.block_on(run(port, config))
}

/// Polls the database connection to completion. Returns whether it closed
/// cleanly; a failure is logged since every later query will fail with it.
async fn drive_connection<F, E>(conn: F) -> bool
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match conn.await {
        Ok(()) => true,
        Err(err) => {
            log::error!("Database connection failed: {err}");
            false
        }
    }
}

async fn run(port: u16, config: Config) -> anyhow::Result<()> {
    // Connect to the database and drive the connection in the background
    let (client, conn) = config.connect(NoTls).await?;
    let conn = tokio::spawn(drive_connection(conn));
    let db = Database::from(client);
    db.init_schema().await.map_err(|err| anyhow::anyhow!("cannot initialize schema: {err}"))?;
    log::info!("Database schema is ready.");

    let router = Arc::new(Router::new(db));
    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on {addr}.");

    let stop = tokio::signal::ctrl_c();
    tokio::pin!(stop);

    loop {
        let (stream, remote) = tokio::select! {
            biased;
            res = &mut stop => {
                res?;
                break;
            }
            conn = listener.accept() => match conn {
                Ok(pair) => pair,
                Err(err) => {
                    log::error!("Failed to accept a connection: {err}");
                    continue;
                }
            },
        };

        let outer = router.clone();
        tokio::spawn(async move {
            let service = service::service_fn(move |req| {
                let inner = outer.clone();
                async move { Ok::<_, Infallible>(inner.respond(req).await) }
            });
            if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                log::error!("Connection with {remote} failed: {err}");
            }
        });
    }

    log::info!("Shutting down.");
    conn.abort();
    Ok(())
}
