use {
  super::*,
  axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    routing::get,
    Router,
  },
  tokio::runtime::Runtime,
};

#[derive(Parser)]
pub struct Server {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  address: SocketAddr,
  #[arg(
    long,
    help = "Fetch country list from <URL>.",
    default_value = Loader::DEFAULT_URL
  )]
  url: String,
  #[arg(long, help = "Open server in browser.")]
  open: bool,
}

#[derive(RustEmbed)]
#[folder = "static"]
struct Static;

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

#[derive(Debug, PartialEq)]
pub enum ServerError {
  LoadFailed { message: String },
  NotFound { path: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::LoadFailed { message } => (StatusCode::BAD_GATEWAY, message).into_response(),
      Self::NotFound { path } => {
        (StatusCode::NOT_FOUND, format!("{path} not found")).into_response()
      }
    }
  }
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Server {
  pub fn run(self) -> Result {
    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    let loader = Arc::new(Loader::new(self.url));

    log::info!("listening on http://{}/", self.address);

    Runtime::new().context(error::Runtime)?.block_on(async {
      axum_server::Server::bind(self.address)
        .serve(
          Router::new()
            .route("/", get(Self::countries))
            .route("/api/countries", get(Self::api))
            .route("/static/*path", get(Self::asset))
            .layer(Extension(loader))
            .into_make_service(),
        )
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  // One fetch per page render, no caching between requests.
  async fn countries(loader: Extension<Arc<Loader>>) -> ServerResult<CountriesHtml> {
    let roster = Roster::new(Self::fetch(&loader).await?);

    log::debug!("rendering {} countries", roster.len());

    Ok(CountriesHtml { roster })
  }

  async fn api(loader: Extension<Arc<Loader>>) -> ServerResult {
    let roster = Roster::new(Self::fetch(&loader).await?);

    Ok(Resource::new(
      mime::APPLICATION_JSON,
      serde_json::to_vec(roster.countries()).unwrap(),
    ))
  }

  async fn fetch(loader: &Loader) -> ServerResult<Vec<Country>> {
    loader.load().await.map_err(|err| {
      log::error!("failed to load country list: {err}");

      ServerError::LoadFailed {
        message: err.to_string(),
      }
    })
  }

  async fn asset(Path(path): Path<String>) -> ServerResult {
    match Static::get(&path) {
      Some(asset) => Ok(Resource::new(
        mime_guess::from_path(&path).first_or_octet_stream(),
        asset.data.into_owned(),
      )),
      None => Err(ServerError::NotFound {
        path: format!("/static/{path}"),
      }),
    }
  }
}
